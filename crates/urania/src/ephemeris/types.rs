use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Bodies a chart is computed for, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    TrueNode,
    MeanNode,
    /// Black Moon Lilith (mean lunar apogee)
    Lilith,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 14] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::Chiron,
        CelestialBody::TrueNode,
        CelestialBody::MeanNode,
        CelestialBody::Lilith,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::Chiron => "Chiron",
            CelestialBody::TrueNode => "TrueNode",
            CelestialBody::MeanNode => "MeanNode",
            CelestialBody::Lilith => "Lilith",
        }
    }

    /// Position in [`CelestialBody::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One position sample as delivered by an ephemeris provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees (not necessarily normalized)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
    /// Degrees per day
    #[serde(default)]
    pub speed_longitude: f64,
    /// Degrees per day
    #[serde(default)]
    pub speed_latitude: f64,
    /// AU per day
    #[serde(default)]
    pub speed_distance: f64,
}

/// Samples at the chart instant and one hour before it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    pub current: RawPosition,
    pub previous: RawPosition,
}

/// House cusps and angles as computed by the house-system provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawHouses {
    /// Cusps of houses 1..=12, in house order
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
}

/// Everything the chart core needs from the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawChart {
    /// Instant the samples were taken at (Julian day, UT)
    pub julian_day: f64,
    /// Samples per body. A missing key and `null` both mean "no data".
    #[serde(default)]
    pub bodies: BTreeMap<CelestialBody, Option<BodySample>>,
    pub houses: RawHouses,
}

impl RawChart {
    pub fn sample(&self, body: CelestialBody) -> Option<BodySample> {
        self.bodies.get(&body).copied().flatten()
    }
}
