use crate::error::HoroscopeError;
use crate::horoscope::types::{BirthRecord, HoroscopeResult};
use crate::western::{ascendant_for_time, moon_sign, sun_sign, Element, Sign};

/// Derives sun, moon, rising sign and element from a birth record.
///
/// Only a missing birth date is an error. The rising sign is computed when a
/// birth time and a non-blank location are both present; a malformed time
/// leaves it unset instead of failing the whole result.
pub fn calculate_horoscope(record: &BirthRecord) -> Result<HoroscopeResult, HoroscopeError> {
    let birth_date = record
        .birth_date
        .ok_or(HoroscopeError::MissingRequiredField("birthDate"))?;

    let sun = sun_sign(&birth_date);
    let ascendant_sign = rising_sign(record);

    Ok(HoroscopeResult {
        sun_sign: sun,
        ascendant_sign,
        moon_sign: moon_sign(&birth_date),
        element_group: Element::of(sun),
    })
}

fn rising_sign(record: &BirthRecord) -> Option<Sign> {
    let time = record.birth_time.as_ref()?;
    let location = record.resolved_location().filter(|l| !l.trim().is_empty())?;

    match ascendant_for_time(time, &location) {
        Ok(sign) => {
            log::debug!("Ascendant {:?} from time {:?} at '{}'", sign, time, location);
            Some(sign)
        }
        Err(e) => {
            log::warn!("Ascendant skipped for '{}': {}", location, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn july_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 7, 15).unwrap()
    }

    #[test]
    fn test_full_record() {
        let record = BirthRecord::new(july_15()).with_time("14:30").with_place("Istanbul");
        let result = calculate_horoscope(&record).unwrap();
        assert_eq!(result.sun_sign, Sign::Cancer);
        assert_eq!(result.moon_sign, Sign::Leo);
        assert_eq!(result.ascendant_sign, Some(Sign::Scorpio));
        assert_eq!(result.element_group, Element::Water);
    }

    #[test]
    fn test_missing_date() {
        let record = BirthRecord::default().with_time("14:30").with_place("Istanbul");
        assert_eq!(
            calculate_horoscope(&record),
            Err(HoroscopeError::MissingRequiredField("birthDate"))
        );
    }

    #[test]
    fn test_bad_time_degrades() {
        let record = BirthRecord::new(july_15()).with_time("not-a-time").with_place("X");
        let result = calculate_horoscope(&record).unwrap();
        assert_eq!(result.ascendant_sign, None);
        assert_eq!(result.sun_sign, Sign::Cancer);
    }

    #[test]
    fn test_no_rising_without_location() {
        let record = BirthRecord::new(july_15()).with_time("14:30").with_place("  ");
        assert_eq!(calculate_horoscope(&record).unwrap().ascendant_sign, None);

        let record = BirthRecord::new(july_15()).with_place("Istanbul");
        assert_eq!(calculate_horoscope(&record).unwrap().ascendant_sign, None);
    }

    #[test]
    fn test_clock_time_and_city_country() {
        // "Izmir, TR" has 9 units -> factor 1; floor(5 / 2) = 2 -> Cancer
        let record = BirthRecord::new(july_15())
            .with_time(NaiveTime::from_hms_opt(5, 45, 0).unwrap())
            .with_city("Izmir")
            .with_country("TR");
        assert_eq!(calculate_horoscope(&record).unwrap().ascendant_sign, Some(Sign::Cancer));
    }
}
