//! Major arcana deck and the three-card past/present/future spread.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reverse_description: &'static str,
}

const fn card(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    reverse_description: &'static str,
) -> TarotCard {
    TarotCard { id, name, description, reverse_description }
}

pub static MAJOR_ARCANA: [TarotCard; 22] = [
    card("fool", "Aptal", "Başlangıçlar, özgür ruh, sıçrama, potansiyel", "Düşüncesizlik, değişim korkusu, sorumsuzluk"),
    card("magician", "Büyücü", "Yaratım gücü, ilham, beceri, kaynakları kullanma", "Aldatma, illüzyon, kullanılmayan yetenekler"),
    card("high_priestess", "Başrahibe", "Sezgi, gizem, içsel bilgelik, bilinçaltı", "Sırlar, sezgiden kopukluk, içe kapanma"),
    card("empress", "İmparatoriçe", "Verimlilik, güzellik, bolluk, şefkatli enerji", "Yaratıcılık tıkanıklığı, bağımlılık, güvensizlik"),
    card("emperor", "İmparator", "Otorite, yapı, istikrar, baba figürü", "Baskıcılık, katılık, kontrol sorunu"),
    card("hierophant", "Başrahip", "Gelenek, ruhsal bilgelik, uyum, inançlar", "İsyan, kişisel değerler, farklılık"),
    card("lovers", "Aşıklar", "Aşk, uyum, ortaklıklar, seçimler", "Uyumsuzluk, dengesizlik, ilişki sorunları"),
    card("chariot", "Savaş Arabası", "İrade gücü, kontrol, zafer, kararlılık", "Yön kaybı, saldırganlık, engeller"),
    card("strength", "Güç", "İçsel güç, cesaret, şefkat, sabır", "Kendine güven eksikliği, zayıflık, bastırılmış duygular"),
    card("hermit", "Ermiş", "İçe dönüş, yalnızlık, içsel rehberlik, yansıma", "Yalıtım, yalnızlık hissi, bilgeliği reddetme"),
    card("wheel_of_fortune", "Kader Çarkı", "Değişim, döngüler, kader, şans", "Kötü şans, değişime direnç, karma"),
    card("justice", "Adalet", "Adalet, hakikat, yasa, sorumluluk", "Adaletsizlik, dengesizlik, dürüst olmamak"),
    card("hanged_man", "Asılan Adam", "Duraklama, kabulleniş, yeni bakış açısı, bırakma", "Direnç, kararsızlık, sıkışmışlık"),
    card("death", "Ölüm", "Dönüşüm, sonlanma, değişim, geçiş", "Değişim korkusu, durgunluk, direnç"),
    card("temperance", "Denge", "Uyum, sabır, ölçülülük, içsel denge", "Aşırılık, dengesizlik, kontrolsüzlük"),
    card("devil", "Şeytan", "Bağımlılıklar, arzular, materyalizm, esaret", "Özgürleşme, bağımlılıktan kurtulma, gölgeyle yüzleşme"),
    card("tower", "Kule", "Ani değişim, yıkım, kaos, farkındalık", "Yıkımdan kaçış, değişim korkusu, baskılanmış kriz"),
    card("star", "Yıldız", "Umut, ilham, yenilenme, şifa", "Umutsuzluk, kopukluk, inanç kaybı"),
    card("moon", "Ay", "Yanılsama, sezgi, rüyalar, bilinçaltı", "Kafa karışıklığı, aldanma, korkular"),
    card("sun", "Güneş", "Mutluluk, başarı, canlılık, pozitiflik", "Negatiflik, gecikmeler, keyifsizlik"),
    card("judgement", "Mahkeme", "Uyanış, iç çağrı, yeniden doğuş, farkındalık", "Kendini sorgulayamama, öğrenememe, hatalı karar"),
    card("world", "Dünya", "Tamamlanma, başarı, bütünlük, doyum", "Kapanmamış döngüler, eksik hedefler, ertelenme"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TarotError {
    #[error("Unknown tarot card: {0}")]
    UnknownCard(String),
    #[error("Card '{0}' drawn more than once")]
    Duplicate(&'static str),
}

pub fn card_by_id(id: &str) -> Option<&'static TarotCard> {
    MAJOR_ARCANA.iter().find(|c| c.id == id)
}

/// The whole deck in random order.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static TarotCard> {
    let mut deck: Vec<&'static TarotCard> = MAJOR_ARCANA.iter().collect();
    deck.shuffle(rng);
    deck
}

/// Three distinct cards read in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotSpread {
    pub past: &'static TarotCard,
    pub present: &'static TarotCard,
    pub future: &'static TarotCard,
}

impl TarotSpread {
    pub fn new(
        past: &'static TarotCard,
        present: &'static TarotCard,
        future: &'static TarotCard,
    ) -> Result<Self, TarotError> {
        if past.id == present.id || past.id == future.id {
            return Err(TarotError::Duplicate(past.id));
        }
        if present.id == future.id {
            return Err(TarotError::Duplicate(present.id));
        }
        Ok(Self { past, present, future })
    }

    pub fn from_ids(ids: [&str; 3]) -> Result<Self, TarotError> {
        let lookup = |id: &str| card_by_id(id).ok_or_else(|| TarotError::UnknownCard(id.to_string()));
        Self::new(lookup(ids[0])?, lookup(ids[1])?, lookup(ids[2])?)
    }

    /// Draws three distinct cards.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut picked = MAJOR_ARCANA.choose_multiple(rng, 3);
        // the deck has more than three cards, so all three slots are filled
        let mut next = || picked.next().unwrap_or(&MAJOR_ARCANA[0]);
        Self {
            past: next(),
            present: next(),
            future: next(),
        }
    }

    pub fn cards(&self) -> [&'static TarotCard; 3] {
        [self.past, self.present, self.future]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_deck_ids_unique() {
        let ids: HashSet<&str> = MAJOR_ARCANA.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 22);
        assert_eq!(card_by_id("hanged_man").unwrap().name, "Asılan Adam");
        assert!(card_by_id("page_of_cups").is_none());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = shuffled_deck(&mut rng);
        assert_eq!(deck.len(), MAJOR_ARCANA.len());
        let ids: HashSet<&str> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 22);

        let again = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(deck, again);
    }

    #[test]
    fn test_draw_gives_distinct_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let spread = TarotSpread::draw(&mut rng);
            let ids: HashSet<&str> = spread.cards().iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 3);
        }
    }

    #[test]
    fn test_spread_validation() {
        let spread = TarotSpread::from_ids(["sun", "moon", "star"]).unwrap();
        assert_eq!(spread.present.name, "Ay");
        assert_eq!(
            TarotSpread::from_ids(["sun", "joker", "star"]),
            Err(TarotError::UnknownCard("joker".to_string()))
        );
        assert_eq!(
            TarotSpread::from_ids(["sun", "moon", "moon"]),
            Err(TarotError::Duplicate("moon"))
        );
    }
}
