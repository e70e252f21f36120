//! Error types for the firmament engine.
//!
//! The numeric routines never fail: out-of-range observers are clamped and the
//! calendar gap maps to Julian Day `0.0`. [`AstroError`] exists for the
//! boundaries where rejecting input is the better answer: validated calendar
//! construction, configuration loading, and explicit numeric guards.
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidDate`](AstroError::InvalidDate) | Calendar validation failures | No |
//! | [`MathError`](AstroError::MathError) | Non-finite or out-of-range observer input | No |
//! | [`ConfigError`](AstroError::ConfigError) | Configuration text or file problems | Yes |
//!
//! ```
//! use firmament_core::{AstroError, MathErrorKind, ObserverLocation};
//!
//! let err = ObserverLocation::checked(95.0, 0.0, 0.0).unwrap_err();
//! assert!(matches!(
//!     err,
//!     AstroError::MathError { kind: MathErrorKind::OutOfRange, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for the numeric core.
#[derive(Error, Debug)]
pub enum AstroError {
    /// Invalid calendar date (e.g., month 13, the 1582 calendar gap).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Configuration could not be read or understood.
    #[error("Config error ({source_name}): {message}")]
    ConfigError {
        source_name: String,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`ConfigError`](Self::ConfigError).
    pub fn config_error(source_name: &str, reason: &str) -> Self {
        Self::ConfigError {
            source_name: source_name.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if fixing the input and retrying might succeed.
    ///
    /// Only [`ConfigError`](Self::ConfigError) is recoverable (edit the file, fall back to defaults).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_error() {
        let err = AstroError::invalid_date(2000, 13, 1, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2000-13-01: month out of range"
        );
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = AstroError::math_error("revd", MathErrorKind::InvalidInput, "NaN input");
        assert!(err.to_string().contains("Math error in revd"));
        assert!(err.to_string().contains("InvalidInput"));
    }

    #[test]
    fn test_config_error_is_recoverable() {
        let err = AstroError::config_error("sky.ron", "unexpected token");
        assert_eq!(
            err.to_string(),
            "Config error (sky.ron): unexpected token"
        );
        assert!(err.is_recoverable());
        assert!(!AstroError::invalid_date(1582, 10, 10, "calendar gap").is_recoverable());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AstroError>();
    }
}
