use thiserror::Error;

/// Errors raised while deriving a horoscope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoroscopeError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("No sign covers month={month} day={day}")]
    UnresolvableSign { month: u32, day: u32 },
}
