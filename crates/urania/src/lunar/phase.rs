//! Lunar phase from the Sun–Moon elongation.
//!
//! Illumination is a linear estimate over the elongation (0 at New Moon,
//! 100 at Full Moon), not the cosine law.

use crate::angle::{forward_delta, round_to};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl PhaseName {
    /// Phase for an elongation in [0, 360). Each bin is 45° wide and centred
    /// on a multiple of 45°, so New Moon spans [337.5, 360) ∪ [0, 22.5).
    pub fn from_angle(angle: f64) -> Self {
        if !(22.5..337.5).contains(&angle) {
            PhaseName::NewMoon
        } else if angle < 67.5 {
            PhaseName::WaxingCrescent
        } else if angle < 112.5 {
            PhaseName::FirstQuarter
        } else if angle < 157.5 {
            PhaseName::WaxingGibbous
        } else if angle < 202.5 {
            PhaseName::FullMoon
        } else if angle < 247.5 {
            PhaseName::WaningGibbous
        } else if angle < 292.5 {
            PhaseName::LastQuarter
        } else {
            PhaseName::WaningCrescent
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "🌑",
            PhaseName::WaxingCrescent => "🌒",
            PhaseName::FirstQuarter => "🌓",
            PhaseName::WaxingGibbous => "🌔",
            PhaseName::FullMoon => "🌕",
            PhaseName::WaningGibbous => "🌖",
            PhaseName::LastQuarter => "🌗",
            PhaseName::WaningCrescent => "🌘",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub phase: PhaseName,
    pub symbol: String,
    /// Percent, one decimal
    pub illumination: f64,
    /// Moon minus Sun longitude, one decimal
    pub angle: f64,
}

/// Classify the lunar phase from Sun and Moon longitudes
pub fn calculate_moon_phase(sun_longitude: f64, moon_longitude: f64) -> MoonPhase {
    let angle = forward_delta(sun_longitude, moon_longitude);
    let phase = PhaseName::from_angle(angle);
    let illumination = (1.0 - (angle - 180.0).abs() / 180.0) * 100.0;

    MoonPhase {
        phase,
        symbol: phase.symbol().to_string(),
        illumination: round_to(illumination, 1),
        angle: round_to(angle, 1),
    }
}
