//! Element groups.
//!
//! The twelve signs are partitioned into four elements of three signs each,
//! following the fixed triplicity pattern Fire, Earth, Air, Water.

use crate::locale::Locale;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub const fn of(sign: Sign) -> Element {
        match sign.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// The three member signs, in zodiac order.
    pub fn members(self) -> &'static [Sign] {
        ELEMENT_GROUPS.get(&self).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(self, sign: Sign) -> bool {
        self.members().contains(&sign)
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::Fire) => "Fire",
            (Locale::English, Self::Earth) => "Earth",
            (Locale::English, Self::Air) => "Air",
            (Locale::English, Self::Water) => "Water",
            (Locale::Turkish, Self::Fire) => "Ateş",
            (Locale::Turkish, Self::Earth) => "Toprak",
            (Locale::Turkish, Self::Air) => "Hava",
            (Locale::Turkish, Self::Water) => "Su",
        }
    }
}

lazy_static::lazy_static! {
    static ref ELEMENT_GROUPS: HashMap<Element, Vec<Sign>> = {
        let mut groups: HashMap<Element, Vec<Sign>> = HashMap::new();
        for sign in Sign::ALL {
            groups.entry(Element::of(sign)).or_default().push(sign);
        }
        groups
    };
}

/// Element of a possibly unresolved sign.
pub fn element_group(sign: Option<Sign>) -> Option<Element> {
    sign.map(Element::of)
}
