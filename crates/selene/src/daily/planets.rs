//! Illustrative planet-of-the-day signs.
//!
//! Each planet advances by a fixed number of degrees per "day index", where
//! the day index is `day_of_month + month * 30`. The result is a stable,
//! date-keyed rotation for display, not an ephemeris.

use crate::locale::Locale;
use crate::western::Sign;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    /// Display order.
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub const fn degrees_per_day(self) -> f64 {
        match self {
            Self::Sun => 1.0,
            Self::Moon => 13.2,
            Self::Mercury => 1.4,
            Self::Venus => 1.2,
            Self::Mars => 0.5,
            Self::Jupiter => 0.08,
            Self::Saturn => 0.03,
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::Sun) => "Sun",
            (Locale::English, Self::Moon) => "Moon",
            (Locale::English, Self::Mercury) => "Mercury",
            (Locale::English, Self::Venus) => "Venus",
            (Locale::English, Self::Mars) => "Mars",
            (Locale::English, Self::Jupiter) => "Jupiter",
            (Locale::English, Self::Saturn) => "Saturn",
            (Locale::Turkish, Self::Sun) => "Güneş",
            (Locale::Turkish, Self::Moon) => "Ay",
            (Locale::Turkish, Self::Mercury) => "Merkür",
            (Locale::Turkish, Self::Venus) => "Venüs",
            (Locale::Turkish, Self::Mars) => "Mars",
            (Locale::Turkish, Self::Jupiter) => "Jüpiter",
            (Locale::Turkish, Self::Saturn) => "Satürn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPlanetPosition {
    pub planet: Planet,
    pub sign: Sign,
    /// Accumulated degrees reduced to [0, 360).
    pub longitude: f64,
}

/// Day index used by the rotation; the month weighting of 30 is fixed.
fn day_index<D: Datelike>(now: &D) -> u32 {
    now.day() + now.month() * 30
}

fn position_of(planet: Planet, day_index: u32) -> DailyPlanetPosition {
    let day_factor = f64::from(day_index) * planet.degrees_per_day();
    let longitude = day_factor % 360.0;
    DailyPlanetPosition {
        planet,
        sign: Sign::from_longitude(longitude),
        longitude,
    }
}

/// Signs of the seven classical planets for the calendar date of `now`,
/// in [`Planet::ALL`] order.
pub fn planet_positions<D: Datelike>(now: &D) -> Vec<DailyPlanetPosition> {
    let index = day_index(now);
    Planet::ALL.iter().map(|&p| position_of(p, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_positions_for_march_7() {
        // day index = 7 + 3 * 30 = 97
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let signs: Vec<Sign> = planet_positions(&d).iter().map(|p| p.sign).collect();
        assert_eq!(
            signs,
            vec![
                Sign::Cancer,
                Sign::Libra,
                Sign::Leo,
                Sign::Cancer,
                Sign::Taurus,
                Sign::Aries,
                Sign::Aries,
            ]
        );
    }

    #[test]
    fn test_moon_longitude_wraps() {
        let p = position_of(Planet::Moon, 97);
        assert!((p.longitude - 200.4).abs() < 1e-9);
    }

    #[test]
    fn test_order_is_fixed() {
        let d = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
        let planets: Vec<Planet> = planet_positions(&d).iter().map(|p| p.planet).collect();
        assert_eq!(planets, Planet::ALL.to_vec());
    }
}
