#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::converter::{convert, convert_request};
pub use crate::core::form::ConverterForm;
pub use crate::domain::model::{Conversion, ConversionRequest, Radix};
pub use crate::utils::error::{ConvertError, Result};
