use derive_more::{Display, Into};

/// Weight lifted or body weight, in any unit as long as all weights share it.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed_value = value.trim();

        if trimmed_value.is_empty() {
            return Err(WeightError::Empty);
        }

        match trimmed_value.replace(',', ".").parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    #[error("Weight must not be empty")]
    Empty,
    #[error("Weight must be a positive number")]
    OutOfRange,
    #[error("Weight must be a decimal number")]
    ParseError,
}
