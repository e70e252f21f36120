use firmament_core::AstroError;
use firmament_time::TimeError;

pub type FirmamentResult<T> = Result<T, FirmamentError>;

/// Errors raised at the configuration boundary of the sky engine.
///
/// The numeric models never fail; these only come from reading, parsing or
/// validating user-supplied settings.
#[derive(Debug, thiserror::Error)]
pub enum FirmamentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[cfg(feature = "serde")]
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] AstroError),

    #[error(transparent)]
    Time(#[from] TimeError),
}

impl FirmamentError {
    pub fn config(source_name: &str, message: &str) -> Self {
        Self::Config(AstroError::config_error(source_name, message))
    }
}
