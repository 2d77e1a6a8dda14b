//! Generated daily and weekly readings.

pub mod parser;
pub mod prompt;
pub mod service;

use async_trait::async_trait;
use thiserror::Error;

pub use parser::{
    parse_daily_reading, DailyReading, ParsedReading, ReadingFallback, ReadingRules, Section,
};
pub use prompt::{
    compatibility_prompt, daily_prompt, strip_weekly_title, tarot_spread_prompt, weekly_prompt,
    WEEKLY_TITLE,
};
pub use service::{ReadingService, WeeklyForecast, WEEKLY_FORECAST_KEY};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Text service error: {0}")]
    Service(String),
    #[error("Text service returned an empty response")]
    EmptyResponse,
}

/// Source of free text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
