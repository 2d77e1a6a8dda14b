//! Display locales for sign, planet and phase labels.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Language used for human-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::Turkish => "tr",
            Self::English => "en",
        }
    }

    /// Accepts "tr"/"en" and the common region-qualified forms ("tr-TR", "en_US").
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "tr" => Some(Self::Turkish),
            "en" => Some(Self::English),
            _ => None,
        }
    }
}

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Month name for a 1-based month; `None` outside 1..=12.
pub fn month_name(month: u32, locale: Locale) -> Option<&'static str> {
    let idx = month.checked_sub(1)? as usize;
    match locale {
        Locale::Turkish => MONTHS_TR.get(idx).copied(),
        Locale::English => MONTHS_EN.get(idx).copied(),
    }
}

/// Long form date, e.g. "15 Temmuz 1990" or "15 July 1990".
pub fn format_long_date<D: Datelike>(date: &D, locale: Locale) -> String {
    let month = month_name(date.month(), locale).unwrap_or_default();
    format!("{} {} {}", date.day(), month, date.year())
}
