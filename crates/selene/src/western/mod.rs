pub mod signs;
pub mod elements;
pub mod sun;
pub mod moon;
pub mod ascendant;

pub use signs::{Sign, SIGN_COUNT};
pub use elements::{Element, element_group};
pub use sun::{sun_sign, sun_sign_for, resolve_sun_sign};
pub use moon::{moon_sign, moon_sign_for};
pub use ascendant::{BirthTime, ascendant, ascendant_for_time};
