use crate::reading::parser::{parse_daily_reading, DailyReading, ReadingFallback, ReadingRules};
use crate::reading::prompt::{daily_prompt, strip_weekly_title, weekly_prompt, WEEKLY_TITLE};
use crate::reading::{GenerationError, TextGenerator};
use crate::store::{DailyCache, KeyValueStore};
use crate::western::Sign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const WEEKLY_FORECAST_KEY: &str = "weekly_forecast_data";

const WEEKLY_FALLBACK: &str = "Bu hafta kariyerinde ilerlemek için yeni fırsatlar çıkabilir. İlişkilerde açık iletişimi koruman önemli. Perşembe günü finansal konularda dikkatli olmalısın.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    pub title: String,
    pub text: String,
}

/// Generated readings with local fallbacks.
pub struct ReadingService<G> {
    generator: G,
    rules: ReadingRules,
    fallback: ReadingFallback,
}

impl<G: TextGenerator> ReadingService<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            rules: ReadingRules::default(),
            fallback: ReadingFallback::default(),
        }
    }

    pub fn with_rules(mut self, rules: ReadingRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_fallback(mut self, fallback: ReadingFallback) -> Self {
        self.fallback = fallback;
        self
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let text = self.generator.generate(prompt).await?;
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }

    /// Today's reading for a user. Never fails: a generator error yields the
    /// fallback reading.
    pub async fn daily_reading(&self, name: &str, birth_date: &str) -> DailyReading {
        let prompt = daily_prompt(birth_date, name);
        match self.generate(&prompt).await {
            Ok(text) => parse_daily_reading(&text, &self.rules).resolve(&self.fallback, &self.rules),
            Err(e) => {
                log::warn!("Daily reading generation failed, using fallback: {}", e);
                DailyReading::from_fallback(&self.fallback)
            }
        }
    }

    /// The week's forecast for `sign`, generated once per Monday-to-Sunday
    /// week. The cache should use [`crate::store::CachePolicy::Weekly`].
    pub async fn weekly_forecast<S: KeyValueStore>(
        &self,
        cache: &DailyCache<S>,
        sign: Sign,
        today: NaiveDate,
    ) -> WeeklyForecast {
        let prompt = weekly_prompt(sign);
        let fetched = cache
            .get_or_refresh(WEEKLY_FORECAST_KEY, today, || async {
                self.generate(&prompt)
                    .await
                    .map(|text| strip_weekly_title(&text))
            })
            .await;

        let text = match fetched {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Weekly forecast unavailable: {}", e);
                WEEKLY_FALLBACK.to_string()
            }
        };

        WeeklyForecast {
            title: WEEKLY_TITLE.to_string(),
            text,
        }
    }
}
