//! Moon phase of the day, keyed on day-of-month.
//!
//! Days fall into four broad ranges (1-6, 7-13, 14-20, 21+). A handful of
//! exact days carry their own phase and text, and those take precedence.

use crate::locale::{format_long_date, Locale};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    FullMoon,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::NewMoon) => "New Moon",
            (Locale::English, Self::WaxingCrescent) => "Waxing Crescent",
            (Locale::English, Self::FirstQuarter) => "First Quarter",
            (Locale::English, Self::FullMoon) => "Full Moon",
            (Locale::English, Self::LastQuarter) => "Last Quarter",
            (Locale::English, Self::WaningCrescent) => "Waning Crescent",
            (Locale::Turkish, Self::NewMoon) => "Yeni Ay",
            (Locale::Turkish, Self::WaxingCrescent) => "Hilal (Büyüyen)",
            (Locale::Turkish, Self::FirstQuarter) => "İlk Dördün",
            (Locale::Turkish, Self::FullMoon) => "Dolunay",
            (Locale::Turkish, Self::LastQuarter) => "Son Dördün",
            (Locale::Turkish, Self::WaningCrescent) => "Hilal (Küçülen)",
        }
    }
}

struct PhaseRule {
    days: RangeInclusive<u32>,
    phase: MoonPhase,
    tr: &'static str,
    en: &'static str,
}

impl PhaseRule {
    fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Turkish => self.tr,
            Locale::English => self.en,
        }
    }
}

static EXACT_DAYS: [PhaseRule; 5] = [
    PhaseRule {
        days: 1..=2,
        phase: MoonPhase::NewMoon,
        tr: "Taze bir başlangıç için mükemmel zaman! Bugün attığın her tohum, yakında büyük bir ağaca dönüşecek. Kalbinde taşıdığın hayalleri gerçekleştirme fırsatıyla dolup taşıyorsun.",
        en: "A perfect time for a fresh start! Every seed you plant today will soon grow into a great tree. You are brimming with the chance to make the dreams you carry come true.",
    },
    PhaseRule {
        days: 7..=8,
        phase: MoonPhase::WaxingCrescent,
        tr: "İçindeki kararlılık her geçen gün artıyor. Attığın adımların meyvelerini görmeye başlıyorsun. Kendine olan inancını koru, yıldızlar senin için parlıyor!",
        en: "Your determination grows with every passing day. You are starting to see the fruits of the steps you have taken. Keep believing in yourself, the stars are shining for you!",
    },
    PhaseRule {
        days: 14..=15,
        phase: MoonPhase::FullMoon,
        tr: "Bugün kozmik enerjiler seninle! Gizli yeteneklerin ortaya çıkıyor, sezgilerin güçleniyor. Kendini ifade etmekten çekinme, parlaklığın herkesi etkileyecek.",
        en: "Cosmic energies are with you today! Hidden talents surface and your intuition grows stronger. Do not hold back from expressing yourself, your brilliance will move everyone.",
    },
    PhaseRule {
        days: 21..=22,
        phase: MoonPhase::LastQuarter,
        tr: "Hayatın dengelerini yeniden kurmak için ideal zaman. Seni olgunlaştıran deneyimlerin değerini anla. Yakında başlayacak yeni döngü için içsel hazırlığını tamamla.",
        en: "An ideal time to restore the balance of your life. Appreciate the experiences that matured you. Finish your inner preparation for the new cycle about to begin.",
    },
    PhaseRule {
        days: 28..=31,
        phase: MoonPhase::WaningCrescent,
        tr: "İçsel bilgeliğin artıyor, sessizliğin gücünü keşfediyorsun. Kendini dinleme zamanı! Yakında başlayacak yeni döngü için enerjini topla, büyük değişimler kapıda.",
        en: "Your inner wisdom is growing and you are discovering the power of silence. Time to listen to yourself! Gather your energy for the coming cycle, big changes are at the door.",
    },
];

static RANGES: [PhaseRule; 4] = [
    PhaseRule {
        days: 1..=6,
        phase: MoonPhase::NewMoon,
        tr: "Yeni fırsatların kapıları sana açılıyor! Bu evrede atacağın her adım, gelecekte büyük başarılara dönüşecek. Hedeflerini belirle ve ilk adımı cesaretle at.",
        en: "The doors of new opportunities are opening for you! Every step you take in this phase will turn into great success. Set your goals and take the first step with courage.",
    },
    PhaseRule {
        days: 7..=13,
        phase: MoonPhase::FirstQuarter,
        tr: "Potansiyelinin şimdi farkına varma zamanı! Karşına çıkan engelleri aşma gücüne sahipsin. Cesaretle ilerle, parlayan enerjin çevrene ilham verecek.",
        en: "Now is the time to realize your potential! You have the power to overcome the obstacles in your way. Move forward bravely, your shining energy will inspire those around you.",
    },
    PhaseRule {
        days: 14..=20,
        phase: MoonPhase::FullMoon,
        tr: "Enerjin ve sezgilerin en yüksek noktada! İçindeki ışık dışarı yansıyor, duygusal netlik kazanıyorsun. Yarım kalan işleri tamamla, ilişkilerini derinleştir.",
        en: "Your energy and intuition are at their peak! Your inner light shines outward and you gain emotional clarity. Finish what was left half done and deepen your relationships.",
    },
    PhaseRule {
        days: 21..=u32::MAX,
        phase: MoonPhase::LastQuarter,
        tr: "Kendini keşfetme yolculuğundasın. Geçmişten ders al ve geleceğe umutla bak. Seni sınırlandıran düşüncelerden arınma vakti, yeni bir döngüye hazırlan!",
        en: "You are on a journey of self-discovery. Learn from the past and look to the future with hope. Time to let go of the thoughts that limit you, get ready for a new cycle!",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseOfDay {
    pub phase: MoonPhase,
    pub phase_name: String,
    /// True when the day has its own entry rather than its range's.
    pub exact_day: bool,
    pub description: String,
    pub formatted_date: String,
}

fn rule_for_day(day: u32) -> (&'static PhaseRule, bool) {
    if let Some(rule) = EXACT_DAYS.iter().find(|r| r.days.contains(&day)) {
        return (rule, true);
    }
    // Day 0 never occurs for a real date; it falls into the first range.
    let rule = RANGES
        .iter()
        .find(|r| r.days.contains(&day))
        .unwrap_or(&RANGES[0]);
    (rule, false)
}

/// Moon phase for `now`, labelled in `locale`.
pub fn moon_phase_in<D: Datelike>(now: &D, locale: Locale) -> MoonPhaseOfDay {
    let (rule, exact_day) = rule_for_day(now.day());
    MoonPhaseOfDay {
        phase: rule.phase,
        phase_name: rule.phase.label(locale).to_string(),
        exact_day,
        description: rule.text(locale).to_string(),
        formatted_date: format_long_date(now, locale),
    }
}

/// Moon phase for `now` in the default locale.
pub fn moon_phase<D: Datelike>(now: &D) -> MoonPhaseOfDay {
    moon_phase_in(now, Locale::default())
}
