use chrono::{Datelike, NaiveDate, NaiveTime};
use selene::western::{ascendant, element_group, moon_sign_for, sun_sign, sun_sign_for, Element, Sign};
use selene::{calculate_horoscope, BirthRecord, HoroscopeError, Locale};

fn every_day_of_2024() -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    start.iter_days().take_while(|d| d.year() == 2024)
}

#[test]
fn test_every_calendar_day_has_a_sun_sign() {
    let mut seen = std::collections::HashSet::new();
    for d in every_day_of_2024() {
        let sign = sun_sign(&d);
        assert_eq!(sun_sign_for(d.month(), d.day()), Some(sign));
        seen.insert(sign);
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_moon_is_one_sign_after_sun() {
    for d in every_day_of_2024() {
        let sun = sun_sign(&d);
        let moon = moon_sign_for(d.month(), d.day()).unwrap();
        assert_eq!(moon.index(), (sun.index() + 1) % 12);
    }
    assert_eq!(moon_sign_for(12, 25), Some(Sign::Aquarius));
}

#[test]
fn test_elements_partition_signs() {
    for element in Element::ALL {
        assert_eq!(element.members().len(), 3);
    }
    for sign in Sign::ALL {
        let owners: Vec<Element> = Element::ALL.into_iter().filter(|e| e.contains(sign)).collect();
        assert_eq!(owners, vec![Element::of(sign)]);
        assert_eq!(element_group(Some(sign)), Some(Element::of(sign)));
    }
    assert_eq!(element_group(None), None);
}

#[test]
fn test_ascendant_is_total_and_deterministic() {
    for place in ["A", "Rize", "Istanbul", "Kahramanmaraş", "Ankara, Türkiye"] {
        for hour in 0..24 {
            for minute in [0, 29, 59] {
                let first = ascendant(hour, minute, place).unwrap();
                assert_eq!(ascendant(hour, minute, place).unwrap(), first);
            }
        }
    }
}

#[test]
fn test_ascendant_rejects_bad_input() {
    assert!(matches!(ascendant(24, 0, "Van"), Err(HoroscopeError::InvalidTimeFormat(_))));
    assert!(matches!(ascendant(10, 60, "Van"), Err(HoroscopeError::InvalidTimeFormat(_))));
    assert_eq!(
        ascendant(10, 0, "   "),
        Err(HoroscopeError::MissingRequiredField("location"))
    );
}

#[test]
fn test_location_length_shifts_the_rising_sign() {
    // 4 and 8 characters give the same offset, 5 one more
    assert_eq!(ascendant(6, 0, "Rize"), ascendant(6, 0, "Istanbul"));
    let base = ascendant(6, 0, "Rize").unwrap();
    assert_eq!(ascendant(6, 0, "Adana").unwrap(), base.next());
}

#[test]
fn test_natal_example() {
    let record = BirthRecord::new(NaiveDate::from_ymd_opt(1990, 7, 15).unwrap())
        .with_time(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        .with_city("Istanbul");
    let result = calculate_horoscope(&record).unwrap();

    let labels = result.describe(Locale::Turkish);
    assert_eq!(labels.sun_sign, "Yengeç");
    assert_eq!(labels.moon_sign, "Aslan");
    assert_eq!(labels.element_group, "Su");
    assert_eq!(result.ascendant_sign, Some(Sign::Scorpio));
    assert_eq!(result.describe(Locale::English).ascendant_sign, Some("Scorpio"));
}

#[test]
fn test_rising_sign_needs_time_and_place() {
    let date = NaiveDate::from_ymd_opt(2000, 2, 19).unwrap();

    let no_time = calculate_horoscope(&BirthRecord::new(date).with_place("Bursa")).unwrap();
    assert_eq!(no_time.ascendant_sign, None);
    assert_eq!(no_time.sun_sign, Sign::Pisces);

    let no_place = calculate_horoscope(&BirthRecord::new(date).with_time("08:00")).unwrap();
    assert_eq!(no_place.ascendant_sign, None);

    let bad_time = calculate_horoscope(&BirthRecord::new(date).with_time("sabah").with_place("Bursa")).unwrap();
    assert_eq!(bad_time.ascendant_sign, None);
    assert_eq!(bad_time.element_group, Element::Water);
}

#[test]
fn test_missing_birth_date() {
    let record: BirthRecord = serde_json::from_str(r#"{"birthPlace":"Konya"}"#).unwrap();
    assert_eq!(
        calculate_horoscope(&record),
        Err(HoroscopeError::MissingRequiredField("birthDate"))
    );
}

#[test]
fn test_result_serializes_slugs() {
    let record = BirthRecord::new(NaiveDate::from_ymd_opt(1990, 7, 15).unwrap());
    let json = serde_json::to_value(calculate_horoscope(&record).unwrap()).unwrap();
    assert_eq!(json["sunSign"], "cancer");
    assert_eq!(json["moonSign"], "leo");
    assert_eq!(json["elementGroup"], "water");
    assert!(json["ascendantSign"].is_null());
}
