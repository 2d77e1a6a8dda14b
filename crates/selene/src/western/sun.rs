//! Sun sign from calendar date cut-offs.

use crate::error::HoroscopeError;
use crate::western::signs::Sign;
use chrono::Datelike;

/// Per month (January first): the last day belonging to the earlier sign,
/// the earlier sign, and the sign that starts the day after.
const SUN_SIGN_CUSPS: [(u32, Sign, Sign); 12] = [
    (19, Sign::Capricorn, Sign::Aquarius),
    (18, Sign::Aquarius, Sign::Pisces),
    (20, Sign::Pisces, Sign::Aries),
    (19, Sign::Aries, Sign::Taurus),
    (20, Sign::Taurus, Sign::Gemini),
    (20, Sign::Gemini, Sign::Cancer),
    (22, Sign::Cancer, Sign::Leo),
    (22, Sign::Leo, Sign::Virgo),
    (22, Sign::Virgo, Sign::Libra),
    (22, Sign::Libra, Sign::Scorpio),
    (21, Sign::Scorpio, Sign::Sagittarius),
    (21, Sign::Sagittarius, Sign::Capricorn),
];

fn lookup(month0: usize, day: u32) -> Sign {
    let (cusp, before, after) = SUN_SIGN_CUSPS[month0];
    if day <= cusp {
        before
    } else {
        after
    }
}

/// Sun sign for a calendar date.
pub fn sun_sign<D: Datelike>(date: &D) -> Sign {
    lookup(date.month0() as usize, date.day())
}

/// Sun sign for a raw (month, day) pair.
///
/// Returns `None` when the month is outside 1..=12 or the day outside 1..=31.
/// Day-of-month is not checked against the month length: February 30 still
/// resolves, to Pisces.
pub fn sun_sign_for(month: u32, day: u32) -> Option<Sign> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(lookup((month - 1) as usize, day))
}

/// Like [`sun_sign_for`], reporting an unresolvable pair as an error.
pub fn resolve_sun_sign(month: u32, day: u32) -> Result<Sign, HoroscopeError> {
    sun_sign_for(month, day).ok_or(HoroscopeError::UnresolvableSign { month, day })
}
