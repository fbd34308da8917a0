use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;

use base_converter::utils::{logger, validation::Validate};
use base_converter::{convert_request, CliConfig, ConversionRequest, ConverterForm, Radix};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting base-converter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    match config.to_request() {
        Some(request) => run_once(&request, config.json)?,
        None => run_interactive(config.from, config.to)?,
    }

    Ok(())
}

fn run_once(request: &ConversionRequest, json: bool) -> anyhow::Result<()> {
    match convert_request(request) {
        Ok(conversion) => {
            if json {
                println!("{}", serde_json::to_string(&conversion)?);
            } else {
                println!("{}", conversion);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

/// Drives a `ConverterForm` over stdin. `from <base>` and `to <base>`
/// switch bases, any other line is converted. A rejected input replaces
/// the previous result with the error.
fn run_interactive(from: Radix, to: Radix) -> anyhow::Result<()> {
    let mut form = ConverterForm::new();
    form.set_source_radix(from);
    form.set_target_radix(to);

    println!("Base Converter");
    println!("Type a number to convert, `from <base>` / `to <base>` to switch bases, `quit` to exit.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} -> {} > ", form.source_radix(), form.target_radix());
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input line")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit" | "q") {
            break;
        }

        if let Some(rest) = trimmed.strip_prefix("from ") {
            if let Some(radix) = parse_radix_or_report(rest) {
                form.set_source_radix(radix);
            }
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("to ") {
            if let Some(radix) = parse_radix_or_report(rest) {
                form.set_target_radix(radix);
            }
            continue;
        }

        form.set_input(line.as_str());
        match form.submit() {
            Ok(conversion) => println!("{}", conversion),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    Ok(())
}

fn parse_radix_or_report(text: &str) -> Option<Radix> {
    match text.parse::<Radix>() {
        Ok(radix) => Some(radix),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            None
        }
    }
}
