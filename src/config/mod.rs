use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::{ConversionRequest, Radix};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "base-converter")]
#[command(about = "Convert integer literals between binary, octal, decimal and hex")]
pub struct CliConfig {
    /// Base the input is written in (name or numeric value)
    #[arg(long, default_value = "decimal")]
    pub from: Radix,

    /// Base to render the result in (name or numeric value)
    #[arg(long, default_value = "binary")]
    pub to: Radix,

    /// Value to convert; omit to start the interactive prompt
    pub value: Option<String>,

    /// Print the conversion as a JSON object
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// One-shot request, when a value was given on the command line.
    pub fn to_request(&self) -> Option<ConversionRequest> {
        self.value.as_ref().map(|value| ConversionRequest {
            input_text: value.clone(),
            source_radix: self.from,
            target_radix: self.to,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.json && self.value.is_none() {
            return Err(ConvertError::ConfigError {
                message: "--json requires a value to convert".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(value: Option<&str>, json: bool) -> CliConfig {
        CliConfig {
            from: Radix::Decimal,
            to: Radix::Binary,
            value: value.map(str::to_string),
            json,
            verbose: false,
        }
    }

    #[test]
    fn test_one_shot_request() {
        let request = config(Some("255"), false).to_request().unwrap();
        assert_eq!(request.input_text, "255");
        assert_eq!(request.source_radix, Radix::Decimal);
        assert_eq!(request.target_radix, Radix::Binary);

        assert!(config(None, false).to_request().is_none());
    }

    #[test]
    fn test_json_requires_a_value() {
        assert!(config(Some("255"), true).validate().is_ok());
        assert!(config(None, false).validate().is_ok());
        assert!(config(None, true).validate().is_err());
    }
}
