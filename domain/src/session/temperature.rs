//! Sampling temperature value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Sampling temperature in the closed range `[0, 1]` (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    pub const DEFAULT: f64 = 0.7;

    /// Create a temperature, rejecting NaN and values outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidTemperature(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Temperature::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Temperature::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Temperature::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Temperature::new(1.2),
            Err(DomainError::InvalidTemperature(1.2))
        );
        assert!(Temperature::new(-0.1).is_err());
        assert!(Temperature::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Temperature::default().value(), 0.7);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Temperature = serde_json::from_str("0.2").unwrap();
        assert_eq!(ok.value(), 0.2);
        assert!(serde_json::from_str::<Temperature>("3.0").is_err());
    }
}
