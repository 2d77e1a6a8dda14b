//! Colour energy of the day, one fixed entry per weekday.

use crate::locale::Locale;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub struct ColorEnergy {
    /// Days from Sunday (0 = Sunday .. 6 = Saturday).
    pub weekday: u32,
    pub color: &'static str,
    pub gradient: [&'static str; 2],
    name: [&'static str; 2],
    energy: [&'static str; 2],
    mood_tips: [[&'static str; 3]; 2],
}

const fn slot(locale: Locale) -> usize {
    match locale {
        Locale::Turkish => 0,
        Locale::English => 1,
    }
}

impl ColorEnergy {
    pub fn name(&self, locale: Locale) -> &'static str {
        self.name[slot(locale)]
    }

    pub fn energy(&self, locale: Locale) -> &'static str {
        self.energy[slot(locale)]
    }

    pub fn mood_tips(&self, locale: Locale) -> &[&'static str; 3] {
        &self.mood_tips[slot(locale)]
    }

    /// Owned, serializable copy in one locale.
    pub fn localized(&self, locale: Locale) -> ColorEnergyOfDay {
        ColorEnergyOfDay {
            weekday: self.weekday,
            color: self.color.to_string(),
            gradient: self.gradient.map(str::to_string),
            name: self.name(locale).to_string(),
            energy: self.energy(locale).to_string(),
            mood_tips: self.mood_tips(locale).map(str::to_string).to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEnergyOfDay {
    pub weekday: u32,
    pub color: String,
    pub gradient: [String; 2],
    pub name: String,
    pub energy: String,
    pub mood_tips: Vec<String>,
}

static COLOR_ENERGIES: [ColorEnergy; 7] = [
    ColorEnergy {
        weekday: 0,
        color: "#FF5733",
        gradient: ["#FF5733", "#FFC300"],
        name: ["Turuncu Alev", "Orange Flame"],
        energy: [
            "Canlılık, sıcaklık ve yeni olasılıklar. Bugün kendinize zaman ayırmak ve sevdiğiniz şeylere yönelmek için ideal.",
            "Vitality, warmth and new possibilities. Today is ideal for making time for yourself and turning to the things you love.",
        ],
        mood_tips: [
            [
                "Sevdiğiniz bir aktiviteye zaman ayırın",
                "Uzun zamandır düşündüğünüz bir fikri hayata geçirin",
                "Sıcak renkli bir kıyafet tercih edin",
            ],
            [
                "Make time for an activity you love",
                "Bring to life an idea you have been considering for a long time",
                "Choose warm-coloured clothing",
            ],
        ],
    },
    ColorEnergy {
        weekday: 1,
        color: "#3498DB",
        gradient: ["#3498DB", "#2980B9"],
        name: ["Sakin Mavi", "Calm Blue"],
        energy: [
            "Huzur, dinginlik ve düzen. Bu renk enerjisi haftaya sakin bir başlangıç yapmanıza yardımcı olur.",
            "Peace, serenity and order. This colour energy helps you start the week calmly.",
        ],
        mood_tips: [
            [
                "Evinizde küçük bir düzenleme yapın",
                "Günün ilk saatlerinde derin nefes alarak güne başlayın",
                "Bol su içmeyi ihmal etmeyin",
            ],
            [
                "Make a small rearrangement at home",
                "Start the day with a few deep breaths in the early hours",
                "Do not forget to drink plenty of water",
            ],
        ],
    },
    ColorEnergy {
        weekday: 2,
        color: "#27AE60",
        gradient: ["#27AE60", "#2ECC71"],
        name: ["Canlı Yeşil", "Vivid Green"],
        energy: [
            "Bereket, büyüme ve denge. Bugün ailenizle ve sevdiklerinizle ilişkilerinize odaklanmak için güzel bir gün.",
            "Abundance, growth and balance. A good day to focus on your relationships with family and loved ones.",
        ],
        mood_tips: [
            [
                "Bir aile üyesini veya arkadaşınızı arayın",
                "Çiçeklerinizi veya bitkilerinizi sulayın",
                "Güzel anılarınızı tazelemek için eski fotoğraflara bakın",
            ],
            [
                "Call a family member or a friend",
                "Water your flowers or plants",
                "Look through old photos to refresh happy memories",
            ],
        ],
    },
    ColorEnergy {
        weekday: 3,
        color: "#9B59B6",
        gradient: ["#9B59B6", "#8E44AD"],
        name: ["Gizemli Mor", "Mysterious Purple"],
        energy: [
            "Hayal gücü, bilgelik ve içe dönüş. Bugün kendinize zaman ayırarak huzur bulabilirsiniz.",
            "Imagination, wisdom and introspection. Taking time for yourself today can bring you peace.",
        ],
        mood_tips: [
            [
                "Sevdiğiniz bir kitabı okuyun",
                "Hoşunuza giden bir çay demleyin",
                "Kendinize küçük bir hediye alın",
            ],
            [
                "Read a book you love",
                "Brew a tea you enjoy",
                "Buy yourself a small gift",
            ],
        ],
    },
    ColorEnergy {
        weekday: 4,
        color: "#F1C40F",
        gradient: ["#F1C40F", "#F39C12"],
        name: ["Parlak Sarı", "Bright Yellow"],
        energy: [
            "Neşe, iyimserlik ve aydınlık. Bugün sevdiklerinizle paylaşımda bulunmak için ideal.",
            "Joy, optimism and brightness. Today is ideal for sharing with the people you love.",
        ],
        mood_tips: [
            [
                "Sevdiğiniz biriyle kahve için veya sohbet edin",
                "Uzun zamandır ertelediğiniz küçük bir alışverişi yapın",
                "Günlük rutininize neşeli bir müzik ekleyin",
            ],
            [
                "Have a coffee or a chat with someone you love",
                "Do the small errand you have been putting off",
                "Add some cheerful music to your daily routine",
            ],
        ],
    },
    ColorEnergy {
        weekday: 5,
        color: "#E74C3C",
        gradient: ["#E74C3C", "#C0392B"],
        name: ["Canlı Kırmızı", "Vivid Red"],
        energy: [
            "Tutku, canlılık ve sevgi. Bugün kendinize ve sevdiklerinize sevginizi göstermek için mükemmel.",
            "Passion, vitality and love. Today is perfect for showing love to yourself and those dear to you.",
        ],
        mood_tips: [
            [
                "Sevdiklerinize vakit ayırın",
                "Kendinize güzel bir akşam yemeği hazırlayın",
                "Evde küçük bir güzellik bakımı yapın",
            ],
            [
                "Make time for your loved ones",
                "Cook yourself a nice dinner",
                "Treat yourself to a small beauty routine at home",
            ],
        ],
    },
    ColorEnergy {
        weekday: 6,
        color: "#8E44AD",
        gradient: ["#8E44AD", "#9B59B6"],
        name: ["Derin Mor", "Deep Purple"],
        energy: [
            "Dinlenme, kendini şarj etme ve iç huzur. Bugün rahatlamak ve kendinize bakmak için ideal.",
            "Rest, recharging and inner peace. Today is ideal for relaxing and looking after yourself.",
        ],
        mood_tips: [
            [
                "Rahatlatıcı bir duş veya banyo yapın",
                "Sevdiğiniz bir TV programı veya film izleyin",
                "Erken yatarak iyi bir gece uykusu alın",
            ],
            [
                "Take a relaxing shower or bath",
                "Watch a TV show or film you love",
                "Go to bed early for a good night's sleep",
            ],
        ],
    },
];

/// Colour energy for the weekday of `now`.
pub fn color_energy<D: Datelike>(now: &D) -> &'static ColorEnergy {
    let weekday = now.weekday().num_days_from_sunday() as usize;
    &COLOR_ENERGIES[weekday % COLOR_ENERGIES.len()]
}
