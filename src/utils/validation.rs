use crate::domain::model::Radix;
use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Maps a raw numeric base onto the supported set {2, 8, 10, 16}.
pub fn validate_radix_value(field_name: &str, value: u32) -> Result<Radix> {
    Radix::from_value(value).ok_or_else(|| ConvertError::InvalidRadixValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "supported bases are 2, 8, 10 and 16".to_string(),
    })
}
