pub mod error;
pub mod locale;

pub mod western;
pub mod horoscope;
pub mod daily;
pub mod personality;
pub mod tarot;

pub mod store;
pub mod reading;

pub use error::HoroscopeError;
pub use locale::Locale;
pub use western::{Element, Sign};
pub use horoscope::{calculate_horoscope, BirthRecord, HoroscopeResult};
