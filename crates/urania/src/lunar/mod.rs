pub mod phase;

pub use phase::{calculate_moon_phase, MoonPhase, PhaseName};
