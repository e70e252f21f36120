pub mod calendar;
pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use calendar::CalendarTime;
pub use julian::JulianDay;
pub use parsing::parse_iso8601;
pub use sidereal::{
    apparent_sidereal_time, local_sidereal_time, mean_sidereal_time, sidereal_time,
    SiderealTime,
};

use firmament_core::AstroError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Core(#[from] AstroError),
}

impl TimeError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }
}
