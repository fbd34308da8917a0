use crate::core::converter;
use crate::domain::model::{Conversion, Radix};
use crate::utils::error::{ConvertError, Result};

/// Form state for the interactive converter surface.
///
/// Holds the base selections and input text plus the last outcome shown
/// to the user. A failed submit clears the previous result.
#[derive(Debug, Clone)]
pub struct ConverterForm {
    source_radix: Radix,
    target_radix: Radix,
    input_value: String,
    result: Option<Conversion>,
    error: Option<ConvertError>,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self {
            source_radix: Radix::Decimal,
            target_radix: Radix::Binary,
            input_value: String::new(),
            result: None,
            error: None,
        }
    }
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_radix(&self) -> Radix {
        self.source_radix
    }

    pub fn target_radix(&self) -> Radix {
        self.target_radix
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn result(&self) -> Option<&Conversion> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ConvertError> {
        self.error.as_ref()
    }

    pub fn set_source_radix(&mut self, radix: Radix) {
        self.source_radix = radix;
    }

    pub fn set_target_radix(&mut self, radix: Radix) {
        self.target_radix = radix;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
    }

    /// Converts the current input between the selected bases and records
    /// the outcome.
    pub fn submit(&mut self) -> Result<Conversion> {
        self.error = None;
        match converter::convert(&self.input_value, self.source_radix, self.target_radix) {
            Ok(conversion) => {
                self.result = Some(conversion.clone());
                Ok(conversion)
            }
            Err(e) => {
                tracing::warn!(input = %self.input_value, radix = %self.source_radix, "rejected input");
                self.result = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
