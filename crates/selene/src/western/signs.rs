//! The twelve tropical signs in their fixed cyclic order.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_COUNT: usize = 12;

impl Sign {
    /// All signs in zodiac order (Aries = 0 .. Pisces = 11).
    pub const ALL: [Sign; SIGN_COUNT] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Sign {
        Self::ALL[index % SIGN_COUNT]
    }

    /// The following sign, Pisces wrapping back to Aries.
    pub const fn next(self) -> Sign {
        Self::from_index(self.index() + 1)
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Sign> {
        Self::ALL.iter().copied().find(|s| s.slug() == slug)
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::Aries => "Aries",
                Self::Taurus => "Taurus",
                Self::Gemini => "Gemini",
                Self::Cancer => "Cancer",
                Self::Leo => "Leo",
                Self::Virgo => "Virgo",
                Self::Libra => "Libra",
                Self::Scorpio => "Scorpio",
                Self::Sagittarius => "Sagittarius",
                Self::Capricorn => "Capricorn",
                Self::Aquarius => "Aquarius",
                Self::Pisces => "Pisces",
            },
            Locale::Turkish => match self {
                Self::Aries => "Koç",
                Self::Taurus => "Boğa",
                Self::Gemini => "İkizler",
                Self::Cancer => "Yengeç",
                Self::Leo => "Aslan",
                Self::Virgo => "Başak",
                Self::Libra => "Terazi",
                Self::Scorpio => "Akrep",
                Self::Sagittarius => "Yay",
                Self::Capricorn => "Oğlak",
                Self::Aquarius => "Kova",
                Self::Pisces => "Balık",
            },
        }
    }

    /// Sign occupying an ecliptic longitude (30 degrees per sign).
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = ((longitude % 360.0) + 360.0) % 360.0;
        Self::from_index((lon / 30.0).floor() as usize)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Sign::Aries.next(), Sign::Taurus);
        assert_eq!(Sign::Pisces.next(), Sign::Aries);
        assert_eq!(Sign::from_index(12), Sign::Aries);
    }

    #[test]
    fn test_from_longitude() {
        assert_eq!(Sign::from_longitude(5.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(359.9), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-15.0), Sign::Pisces);
        assert_eq!(Sign::from_longitude(720.0 + 95.0), Sign::Cancer);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Sign::Cancer.label(Locale::Turkish), "Yengeç");
        assert_eq!(Sign::Cancer.label(Locale::English), "Cancer");
        assert_eq!(Sign::from_slug("capricorn"), Some(Sign::Capricorn));
        assert_eq!(Sign::from_slug("ophiuchus"), None);
    }
}
