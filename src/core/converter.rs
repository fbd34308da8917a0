use crate::domain::model::{Conversion, ConversionRequest, Radix};
use crate::utils::error::{ConvertError, Result};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Converts `input_text` from `source_radix` to `target_radix`.
///
/// Parsing takes the longest valid prefix of the input: leading whitespace
/// is skipped, an optional sign is accepted, and everything from the first
/// character that is not a digit of the source base is ignored. If no
/// digit could be consumed at all, the conversion fails.
pub fn convert(input_text: &str, source_radix: Radix, target_radix: Radix) -> Result<Conversion> {
    let Some(value) = parse_prefix(input_text, source_radix) else {
        tracing::debug!(input = input_text, radix = %source_radix, "no valid leading digits");
        return Err(ConvertError::InvalidNumber {
            radix: source_radix,
        });
    };

    let digits = render(value, target_radix);
    tracing::debug!(input = input_text, from = %source_radix, to = %target_radix, %digits, "converted");

    Ok(Conversion {
        input: input_text.to_string(),
        from: source_radix,
        to: target_radix,
        digits,
    })
}

pub fn convert_request(request: &ConversionRequest) -> Result<Conversion> {
    convert(
        &request.input_text,
        request.source_radix,
        request.target_radix,
    )
}

/// Longest-valid-prefix signed integer parsing. A `0x`/`0X` prefix is
/// consumed when the base is hex. Returns `None` when no digit could be
/// consumed, or when the magnitude does not fit in an i64.
fn parse_prefix(text: &str, radix: Radix) -> Option<i64> {
    let mut s = text.trim_start();

    let mut negative = false;
    if let Some(stripped) = s.strip_prefix('-') {
        negative = true;
        s = stripped;
    } else if let Some(stripped) = s.strip_prefix('+') {
        s = stripped;
    }

    if radix == Radix::Hex {
        if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            s = stripped;
        }
    }

    let base = i64::from(radix.value());
    let mut value: i64 = 0;
    let mut consumed = 0usize;
    for c in s.chars() {
        let Some(digit) = c.to_digit(radix.value()) else {
            break;
        };
        value = value.checked_mul(base)?.checked_add(i64::from(digit))?;
        consumed += 1;
    }

    if consumed == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Renders `value` in `radix`: uppercase digits, no leading zeros, a
/// leading `-` for negative values, `"0"` for zero.
fn render(value: i64, radix: Radix) -> String {
    let base = u64::from(radix.value());
    let mut magnitude = value.unsigned_abs();

    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(magnitude % base) as usize] as char);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        out.push('-');
    }
    out.iter().rev().collect()
}
