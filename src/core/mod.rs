pub mod converter;
pub mod form;

pub use crate::domain::model::{Conversion, ConversionRequest, Radix};
pub use crate::utils::error::Result;
