pub mod calculator;
pub mod types;

pub use calculator::calculate_horoscope;
pub use types::{BirthRecord, HoroscopeLabels, HoroscopeResult};
