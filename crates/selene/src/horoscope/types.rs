//! Birth record input and horoscope output types.

use crate::locale::Locale;
use crate::western::{BirthTime, Element, Sign};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Birth data as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<BirthTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl BirthRecord {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date: Some(birth_date),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<BirthTime>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Birth place, or the non-empty city and country joined with ", ".
    ///
    /// The returned string is not trimmed.
    pub fn resolved_location(&self) -> Option<String> {
        if let Some(place) = self.birth_place.as_deref().filter(|p| !p.is_empty()) {
            return Some(place.to_string());
        }

        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResult {
    pub sun_sign: Sign,
    pub ascendant_sign: Option<Sign>,
    pub moon_sign: Sign,
    pub element_group: Element,
}

/// Display labels of a [`HoroscopeResult`] in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeLabels {
    pub sun_sign: &'static str,
    pub ascendant_sign: Option<&'static str>,
    pub moon_sign: &'static str,
    pub element_group: &'static str,
}

impl HoroscopeResult {
    pub fn describe(&self, locale: Locale) -> HoroscopeLabels {
        HoroscopeLabels {
            sun_sign: self.sun_sign.label(locale),
            ascendant_sign: self.ascendant_sign.map(|s| s.label(locale)),
            moon_sign: self.moon_sign.label(locale),
            element_group: self.element_group.label(locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1995, 1, 2).unwrap()
    }

    #[test]
    fn test_location_prefers_birth_place() {
        let r = BirthRecord::new(date())
            .with_place("Bursa")
            .with_city("Izmir")
            .with_country("Türkiye");
        assert_eq!(r.resolved_location().as_deref(), Some("Bursa"));
    }

    #[test]
    fn test_location_joins_city_and_country() {
        let r = BirthRecord::new(date()).with_city("Izmir").with_country("Türkiye");
        assert_eq!(r.resolved_location().as_deref(), Some("Izmir, Türkiye"));

        let r = BirthRecord::new(date()).with_place("").with_country("Türkiye");
        assert_eq!(r.resolved_location().as_deref(), Some("Türkiye"));

        let r = BirthRecord::new(date()).with_city("").with_country("");
        assert_eq!(r.resolved_location(), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"birthDate":"1990-07-15","birthTime":"14:30","city":"Istanbul"}"#;
        let r: BirthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.birth_date, NaiveDate::from_ymd_opt(1990, 7, 15));
        assert_eq!(r.birth_time.unwrap().hour_minute(), Ok((14, 30)));
        assert_eq!(r.city.as_deref(), Some("Istanbul"));
        assert_eq!(r.birth_place, None);
    }
}
