pub mod planets;
pub mod moon_phase;
pub mod color_energy;

pub use planets::{DailyPlanetPosition, Planet, planet_positions};
pub use moon_phase::{MoonPhase, MoonPhaseOfDay, moon_phase, moon_phase_in};
pub use color_energy::{ColorEnergy, ColorEnergyOfDay, color_energy};
