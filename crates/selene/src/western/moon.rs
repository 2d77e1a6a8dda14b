//! Moon sign, taken as the sign following the sun sign.
//!
//! This is a fixed offset, not a lunar position.

use crate::western::signs::Sign;
use crate::western::sun::{sun_sign, sun_sign_for};
use chrono::Datelike;

pub fn moon_sign<D: Datelike>(date: &D) -> Sign {
    sun_sign(date).next()
}

/// Raw (month, day) form; unresolvable pairs stay unresolved.
pub fn moon_sign_for(month: u32, day: u32) -> Option<Sign> {
    sun_sign_for(month, day).map(Sign::next)
}
