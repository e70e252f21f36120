//! Accuracy tier selection.

use std::fmt;
use std::str::FromStr;

use crate::errors::AstroError;

/// Which series length the sun, moon and nutation models evaluate.
///
/// Both tiers compute in `f64` and share every interface. `High` follows the
/// full Meeus tables with 77-term nutation (arcsecond-level positions);
/// `Low` keeps only the dominant terms, good to a few hundredths of a degree
/// for the sun and about a tenth of a degree for the moon, which is below the
/// size of either disc on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    #[default]
    High,
    Low,
}

impl Precision {
    pub fn is_high(self) -> bool {
        matches!(self, Precision::High)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::High => write!(f, "high"),
            Precision::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Precision {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Precision::High),
            "low" => Ok(Precision::Low),
            other => Err(AstroError::config_error(
                "precision",
                &format!("unknown precision '{}', expected 'high' or 'low'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_high() {
        assert_eq!(Precision::default(), Precision::High);
        assert!(Precision::High.is_high());
        assert!(!Precision::Low.is_high());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("LOW".parse::<Precision>().unwrap(), Precision::Low);
        assert_eq!(" high ".parse::<Precision>().unwrap(), Precision::High);
        assert!("medium".parse::<Precision>().is_err());
        assert_eq!(Precision::Low.to_string(), "low");
    }
}
