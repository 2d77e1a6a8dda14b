//! Four-colour personality test scoring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PersonalityColor {
    /// Tally order; earlier colours win ties.
    pub const ALL: [PersonalityColor; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Red => "KIRMIZI KİŞİLİK",
            Self::Blue => "MAVİ KİŞİLİK",
            Self::Green => "YEŞİL KİŞİLİK",
            Self::Yellow => "SARI KİŞİLİK",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Red => "Siz bir KIRMIZI kişiliksiniz! İddialı, güçlü ve hedefe odaklı bir yapınız var. Liderlik etmeyi ve hedeflerinize kararlılıkla ilerlemeyi seversiniz.",
            Self::Blue => "Siz bir MAVİ kişiliksiniz! Analitik, detaycı ve mükemmeliyetçi özellikleriniz var. Düzen, doğruluk ve derinlemesine bilgi sizin için önemlidir.",
            Self::Green => "Siz bir YEŞİL kişiliksiniz! İlişki odaklı, destekleyici ve uyumlu özellikleriniz var. Başkalarına yardım etmeyi ve huzurlu bir ortam oluşturmayı önemsiyorsunuz.",
            Self::Yellow => "Siz bir SARI kişiliksiniz! Enerjik, yaratıcı ve sosyal özellikleriniz var. Hayattan keyif almayı ve yeni deneyimler yaşamayı seviyorsunuz.",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Red => "Sabırlı olmayı öğrenin ve başkalarının duygularını dikkate alın. Bazen yavaşlamak ve süreci de en az sonuç kadar önemsemek size daha sağlıklı ilişkiler ve dengeli bir yaşam sağlayabilir.",
            Self::Blue => "Mükemmeliyetçiliğinizi dengelemeyi öğrenin. Her zaman en iyisini yapmak güzel, ancak bazı durumlarda 'yeterince iyi' de kabul edilebilir. Spontane davranışlara ve yeniliklere daha açık olun.",
            Self::Green => "Kendi ihtiyaçlarınızı da ön planda tutmayı öğrenin. Başkalarına yardım etmek değerli, ancak kendinize de aynı şefkati ve özeni göstermelisiniz. Sınırlar belirlemek sağlıklı ilişkiler için önemlidir.",
            Self::Yellow => "Odaklanma ve projeleri tamamlama becerilerinizi geliştirin. Tüm fikirleriniz değerli, ancak bunları hayata geçirmek için sabır ve disiplin gerekir. Heyecanınızı kontrol etmeyi ve uzun vadeli hedefler belirlemeyi öğrenin.",
        }
    }
}

/// Colour picked most often. Ties go to the colour earliest in
/// [`PersonalityColor::ALL`]; no answers at all give blue.
pub fn dominant_color<I>(answers: I) -> PersonalityColor
where
    I: IntoIterator<Item = PersonalityColor>,
{
    let mut counts = [0usize; 4];
    for color in answers {
        if let Some(slot) = PersonalityColor::ALL.iter().position(|c| *c == color) {
            counts[slot] += 1;
        }
    }

    let mut dominant = PersonalityColor::Blue;
    let mut max = 0;
    for (color, count) in PersonalityColor::ALL.iter().zip(counts) {
        if count > max {
            max = count;
            dominant = *color;
        }
    }
    dominant
}
