use selene::reading::ReadingRules;
use selene::Locale;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeleneSettings {
    pub locale: Locale,
    pub reading: ReadingRules,
}

impl SeleneSettings {
    pub fn reading_rules(&self) -> ReadingRules {
        self.reading
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayToml {
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ReadingToml {
    #[serde(default)]
    min_detail_chars: Option<usize>,
    #[serde(default)]
    teaser_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    display: DisplayToml,
    #[serde(default)]
    reading: ReadingToml,
}

/// Tries the common relative paths for `configs/selene.toml`.
pub fn read_settings_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/selene.toml", "../../configs/selene.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load selene.toml from {:?}", paths);
}

/// Parses settings text. Absent keys keep their defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<SeleneSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse selene.toml: {e}"))?;

    let locale = match root.display.locale {
        Some(code) => Locale::from_code(&code)
            .ok_or_else(|| anyhow::anyhow!("Unsupported display.locale '{code}' (expected tr or en)"))?,
        None => Locale::default(),
    };

    let defaults = ReadingRules::default();
    let reading = ReadingRules {
        min_detail_chars: root.reading.min_detail_chars.unwrap_or(defaults.min_detail_chars),
        teaser_chars: root.reading.teaser_chars.unwrap_or(defaults.teaser_chars),
    };
    if reading.teaser_chars == 0 {
        anyhow::bail!("reading.teaser_chars must be greater than zero");
    }

    Ok(SeleneSettings { locale, reading })
}

pub fn load_settings() -> anyhow::Result<SeleneSettings> {
    let text = read_settings_toml_text()?;
    parse_settings(&text)
}

/// Like [`load_settings`], falling back to defaults with a warning.
pub fn load_settings_or_default() -> SeleneSettings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings: {e}");
            SeleneSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let settings = parse_settings(
            "[display]\nlocale = \"en\"\n\n[reading]\nmin_detail_chars = 80\nteaser_chars = 120\n",
        )
        .unwrap();
        assert_eq!(settings.locale, Locale::English);
        assert_eq!(
            settings.reading_rules(),
            ReadingRules { min_detail_chars: 80, teaser_chars: 120 }
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, SeleneSettings::default());

        let settings = parse_settings("[reading]\nteaser_chars = 40\n").unwrap();
        assert_eq!(settings.locale, Locale::Turkish);
        assert_eq!(settings.reading.min_detail_chars, 100);
        assert_eq!(settings.reading.teaser_chars, 40);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[display]\nlocale = \"fr\"\n").is_err());
        assert!(parse_settings("[reading]\nteaser_chars = 0\n").is_err());
        assert!(parse_settings("[reading\n").is_err());
    }
}
