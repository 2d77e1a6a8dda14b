//! Splits a generated daily reading into its sections.
//!
//! The generator is asked for a free paragraph followed by sections headed
//! "Aşk:", "Kariyer:" and "Sağlık:". Every section of the parsed result says
//! whether it was found, so callers decide what to show in its place.

use crate::locale::Locale;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref LEADING_LABELS: [Regex; 3] = [
        Regex::new(r"(?im)^Genel Bakış:?").expect("valid regex"),
        Regex::new(r"(?im)^Genel Yorum:?").expect("valid regex"),
        Regex::new(r"(?im)^Günlük Yorum:?").expect("valid regex"),
    ];
    static ref SECTION_MARKERS: Regex = Regex::new(r"(?i)Aşk:|Kariyer:|Sağlık:").expect("valid regex");
}

/// Length rules applied while parsing and resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRules {
    /// Main text shorter than this many characters counts as missing.
    pub min_detail_chars: usize,
    /// Characters kept in the teaser before the ellipsis.
    pub teaser_chars: usize,
}

impl Default for ReadingRules {
    fn default() -> Self {
        Self {
            min_detail_chars: 100,
            teaser_chars: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Found(String),
    Missing,
}

impl Section {
    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(text) if !text.is_empty() => Self::Found(text.to_string()),
            _ => Self::Missing,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn or_fallback(self, fallback: &str) -> String {
        match self {
            Self::Found(text) => text,
            Self::Missing => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReading {
    pub detailed: Section,
    pub love: Section,
    pub career: Section,
    pub health: Section,
}

/// Texts shown for sections the generator did not deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingFallback {
    pub detailed: String,
    pub love: String,
    pub career: String,
    pub health: String,
}

impl ReadingFallback {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Turkish => Self {
                detailed: "Bugün, kozmik enerjiler size yaratıcılık ve iletişim alanlarında destek veriyor. Fikirlerinizi açıkça ifade etmek için ideal bir gün. Çevrenizdeki insanlarla olan etkileşimleriniz size ilham verebilir. Güneş'in burç evinize yaptığı olumlu açı, kendinizi ifade etmenizi kolaylaştırıyor ve özgüveninizi artırıyor. Sevdiklerinizle geçireceğiniz zaman ruhunuzu yükseltecek ve size pozitif enerji kazandıracak.".to_string(),
                love: "Romantik ilişkilerde şanslı bir gün. Partnerinizle açık iletişim kurabilir, duygularınızı paylaşabilirsiniz. Bekarsanız, yeni tanışacağınız biri hayatınızı değiştirebilir.".to_string(),
                career: "İş yerinde fikirleriniz takdir görecek. Yeni bir proje başlatmak için uygun bir zaman. Finansal konularda temkinli olmalı ve planlı hareket etmelisiniz.".to_string(),
                health: "Enerjiniz yüksek olacak. Fiziksel aktivite için ideal bir gün. Zihinsel sağlığınıza da özen gösterin ve meditasyon gibi rahatlama teknikleri deneyin.".to_string(),
            },
            Locale::English => Self {
                detailed: "Today cosmic energies support you in creativity and communication. It is an ideal day to express your ideas openly. Your interactions with the people around you may inspire you. The Sun's favourable angle to your sign makes self-expression easier and lifts your confidence. Time spent with loved ones will raise your spirits and fill you with positive energy.".to_string(),
                love: "A lucky day for romance. You can talk openly with your partner and share your feelings. If you are single, someone you meet soon could change your life.".to_string(),
                career: "Your ideas will be appreciated at work. A good time to start a new project. Be cautious with money and act according to plan.".to_string(),
                health: "Your energy will be high. An ideal day for physical activity. Look after your mental health too and try relaxation techniques such as meditation.".to_string(),
            },
        }
    }
}

impl Default for ReadingFallback {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReading {
    pub teaser: String,
    pub detailed: String,
    pub love: String,
    pub career: String,
    pub health: String,
}

impl DailyReading {
    /// Reading made entirely of fallback texts, teaser included in full.
    pub fn from_fallback(fallback: &ReadingFallback) -> Self {
        Self {
            teaser: fallback.detailed.clone(),
            detailed: fallback.detailed.clone(),
            love: fallback.love.clone(),
            career: fallback.career.clone(),
            health: fallback.health.clone(),
        }
    }
}

impl ParsedReading {
    pub fn resolve(self, fallback: &ReadingFallback, rules: &ReadingRules) -> DailyReading {
        let detailed = self.detailed.or_fallback(&fallback.detailed);
        let teaser = format!("{}...", detailed.chars().take(rules.teaser_chars).collect::<String>());
        DailyReading {
            teaser,
            detailed,
            love: self.love.or_fallback(&fallback.love),
            career: self.career.or_fallback(&fallback.career),
            health: self.health.or_fallback(&fallback.health),
        }
    }
}

fn clean(text: &str) -> String {
    let mut cleaned = text.replace('*', "");
    for label in LEADING_LABELS.iter() {
        cleaned = label.replacen(&cleaned, 1, "").into_owned();
    }
    cleaned
}

/// Parses generated text. Sections are taken positionally in the order the
/// markers appear: the first marker opens "love", the second "career", the
/// third "health".
pub fn parse_daily_reading(text: &str, rules: &ReadingRules) -> ParsedReading {
    let cleaned = clean(text);
    let mut parts = SECTION_MARKERS.split(&cleaned);

    let main = parts.next().unwrap_or_default().trim();
    let detailed = if main.chars().count() < rules.min_detail_chars {
        Section::Missing
    } else {
        Section::Found(main.to_string())
    };

    ParsedReading {
        detailed,
        love: Section::from_raw(parts.next()),
        career: Section::from_raw(parts.next()),
        health: Section::from_raw(parts.next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_intro() -> String {
        "Bugün yıldızlar seninle. ".repeat(6)
    }

    #[test]
    fn test_all_sections_found() {
        let text = format!(
            "**Genel Bakış:** {}\nAşk: Kalbin açık.\nKariyer: Yeni bir kapı.\nSağlık: Dinlen.",
            long_intro()
        );
        let parsed = parse_daily_reading(&text, &ReadingRules::default());
        assert!(parsed.detailed.is_found());
        assert_eq!(parsed.love, Section::Found("Kalbin açık.".to_string()));
        assert_eq!(parsed.career, Section::Found("Yeni bir kapı.".to_string()));
        assert_eq!(parsed.health, Section::Found("Dinlen.".to_string()));

        if let Section::Found(main) = &parsed.detailed {
            assert!(!main.contains('*'));
            assert!(!main.starts_with("Genel"));
        }
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let text = format!("{}AŞK: a KARIYER: b sağlık: c", long_intro());
        let parsed = parse_daily_reading(&text, &ReadingRules::default());
        assert_eq!(parsed.love, Section::Found("a".to_string()));
        assert_eq!(parsed.career, Section::Found("b".to_string()));
        assert_eq!(parsed.health, Section::Found("c".to_string()));
    }

    #[test]
    fn test_short_main_and_missing_sections() {
        let parsed = parse_daily_reading("Kısa metin. Aşk: ", &ReadingRules::default());
        assert_eq!(parsed.detailed, Section::Missing);
        assert_eq!(parsed.love, Section::Missing);
        assert_eq!(parsed.career, Section::Missing);
    }

    #[test]
    fn test_resolve_uses_fallback_and_teaser() {
        let rules = ReadingRules { min_detail_chars: 100, teaser_chars: 10 };
        let fallback = ReadingFallback::for_locale(Locale::English);
        let parsed = parse_daily_reading("too short", &rules);
        let reading = parsed.resolve(&fallback, &rules);

        assert_eq!(reading.detailed, fallback.detailed);
        assert_eq!(reading.teaser, "Today cosm...");
        assert_eq!(reading.health, fallback.health);
    }
}
