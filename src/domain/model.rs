use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{ConvertError, Result};

/// The fixed set of numeral bases the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hex];

    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// User-facing base name, as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        }
    }

    /// Digit characters accepted for this base, shown in recovery suggestions.
    pub fn digit_set(self) -> &'static str {
        match self {
            Radix::Binary => "0-1",
            Radix::Octal => "0-7",
            Radix::Decimal => "0-9",
            Radix::Hex => "0-9, A-F",
        }
    }

    pub fn from_value(value: u32) -> Option<Radix> {
        match value {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hex),
            _ => None,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = ConvertError;

    /// Accepts both the base name (`"hex"`) and its numeric value (`"16"`).
    fn from_str(s: &str) -> Result<Radix> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u32>() {
            return crate::utils::validation::validate_radix_value("radix", value);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Radix::Binary),
            "octal" | "oct" => Ok(Radix::Octal),
            "decimal" | "dec" => Ok(Radix::Decimal),
            "hex" | "hexadecimal" => Ok(Radix::Hex),
            _ => Err(ConvertError::InvalidRadixValue {
                field: "radix".to_string(),
                value: trimmed.to_string(),
                reason: "supported bases are binary, octal, decimal and hex".to_string(),
            }),
        }
    }
}

/// A single conversion attempt as supplied by the presentation layer.
/// Built fresh per attempt, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input_text: String,
    pub source_radix: Radix,
    pub target_radix: Radix,
}

/// A successful conversion, carrying everything the display layer echoes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub from: Radix,
    pub to: Radix,
    pub digits: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) = {} ({})", self.input, self.from, self.digits, self.to)
    }
}
