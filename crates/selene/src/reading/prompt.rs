//! Prompts sent to the text generator.

use crate::locale::Locale;
use crate::tarot::TarotSpread;
use crate::western::Sign;
use regex::Regex;

lazy_static::lazy_static! {
    // Turkish dotted capital I does not case-fold to i.
    static ref WEEKLY_TITLE_ECHO: Regex =
        Regex::new(r"(?i)^\s*bu hafta sen[iİı] neler bekl[iİı]yor\?").expect("valid regex");
}

/// Title the weekly forecast is shown under; generators tend to echo it.
pub const WEEKLY_TITLE: &str = "Bu hafta seni neler bekliyor?";

pub fn daily_prompt(birth_date: &str, name: &str) -> String {
    format!(
        "Sen bir astroloji uzmanısın. {birth_date} doğumlu, {name} isimli kullanıcımın burcu için bugünün burç yorumunu Türkçe olarak yaz. \n\
         \n\
         İlk paragrafta en az 4-5 cümlelik detaylı bir genel yorum yaz. Başlık veya \"Genel Bakış\" gibi etiketler kullanma. \n\
         \n\
         Sonra aşağıdaki üç alan için ayrı ayrı 2-3 cümlelik detaylı yorumlar yaz:\n\
         - Aşk ve İlişkiler\n\
         - Kariyer ve Finans\n\
         - Sağlık ve Enerji\n\
         \n\
         Her bölümün başında sadece \"Aşk:\", \"Kariyer:\", \"Sağlık:\" yazarak başla. \n\
         Markdown formatı, yıldız işaretleri veya numaralandırmalar kullanma. \n\
         Bilimsel terminoloji veya uyarılar ekleme."
    )
}

pub fn weekly_prompt(sign: Sign) -> String {
    format!(
        "{} burcu için bu haftanın (önümüzdeki 7 gün) astrolojik öngörüsünü Türkçe olarak yaz. \
         3-4 cümle ile özetle. Özellikle kariyer, ilişkiler ve dikkat edilmesi gereken günler hakkında bilgi ver. \
         Cevabında \"{}\" sorusuna yanıt veriyormuş gibi başla.",
        sign.label(Locale::Turkish),
        WEEKLY_TITLE
    )
}

/// Drops a leading echo of [`WEEKLY_TITLE`] (any letter case) and trims.
pub fn strip_weekly_title(text: &str) -> String {
    WEEKLY_TITLE_ECHO.replace(text, "").trim().to_string()
}

/// Past, present and future reading for a three-card spread.
pub fn tarot_spread_prompt(spread: &TarotSpread) -> String {
    format!(
        "3 tarot kartı seçildi:\n\
         \n\
         Geçmiş: {} – {}\n\
         Şimdi: {} – {}\n\
         Gelecek: {} – {}\n\
         \n\
         Her birine karşılık gelecek şekilde kısa bir tarot yorumu yaz. \
         Yorumlar 5-6 cümle olsun. Sade, pozitif ya da uyarıcı en önemlisi insanların genel beklentilerini karşılayacak bir dil kullan. Türkçe yaz.",
        spread.past.name,
        spread.past.description,
        spread.present.name,
        spread.present.description,
        spread.future.name,
        spread.future.description,
    )
}

/// Numerology-style compatibility reading for two people.
pub fn compatibility_prompt(
    name: &str,
    other_name: &str,
    birth_date: &str,
    other_birth_date: &str,
) -> String {
    format!(
        "Ad Soyad: {name}\n\
         Uyumlu kişinin Ad Soyad: {other_name}\n\
         Doğum tarihi: {birth_date}\n\
         Uyumlu kişinin Doğum tarihi: {other_birth_date}\n\
         \n\
         Numerolojiye göre bu kişinin temel karakter özelliklerini ve yaşam enerjisini sade bir şekilde yorumla. \
         5 paragraf yaz, Türkçe yaz. Pozitif ya da uyarıcı dille olabilir, spiritüel bir ton kullan."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_prompt_names_sections() {
        let p = daily_prompt("1990-07-15", "Deniz");
        assert!(p.contains("1990-07-15 doğumlu, Deniz isimli"));
        for marker in ["\"Aşk:\"", "\"Kariyer:\"", "\"Sağlık:\""] {
            assert!(p.contains(marker));
        }
    }

    #[test]
    fn test_weekly_prompt_uses_turkish_label() {
        assert!(weekly_prompt(Sign::Leo).starts_with("Aslan burcu"));
    }

    #[test]
    fn test_strip_weekly_title() {
        assert_eq!(
            strip_weekly_title("Bu hafta seni neler bekliyor? Güzel bir hafta."),
            "Güzel bir hafta."
        );
        assert_eq!(
            strip_weekly_title("bu hafta seni neler bekliyor?\nHareketli."),
            "Hareketli."
        );
        assert_eq!(strip_weekly_title("  Sakin bir hafta. "), "Sakin bir hafta.");
    }

    #[test]
    fn test_strip_uppercase_turkish_title() {
        assert_eq!(
            strip_weekly_title("BU HAFTA SENİ NELER BEKLİYOR? Yoğun bir hafta."),
            "Yoğun bir hafta."
        );
        // only a leading echo is removed
        assert_eq!(
            strip_weekly_title("Merak etme. Bu hafta seni neler bekliyor? Huzur."),
            "Merak etme. Bu hafta seni neler bekliyor? Huzur."
        );
    }

    #[test]
    fn test_tarot_spread_prompt_orders_positions() {
        let spread = TarotSpread::from_ids(["fool", "tower", "star"]).unwrap();
        let p = tarot_spread_prompt(&spread);
        let past = p.find("Geçmiş: Aptal – Başlangıçlar").unwrap();
        let present = p.find("Şimdi: Kule – Ani değişim").unwrap();
        let future = p.find("Gelecek: Yıldız – Umut").unwrap();
        assert!(past < present && present < future);
    }

    #[test]
    fn test_compatibility_prompt_names_both_people() {
        let p = compatibility_prompt("Ada Yıldız", "Can Demir", "1992-04-01", "1990-11-20");
        assert!(p.contains("Ad Soyad: Ada Yıldız\n"));
        assert!(p.contains("Uyumlu kişinin Ad Soyad: Can Demir"));
        assert!(p.contains("Uyumlu kişinin Doğum tarihi: 1990-11-20"));
        assert!(p.contains("5 paragraf"));
    }
}
