use crate::ephemeris::CelestialBody;
use crate::houses::AngularPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact angle and maximum orb of one aspect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub max_orb: f64,
}

/// Something that can take part in an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChartPoint {
    Body(CelestialBody),
    Angle(AngularPoint),
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartPoint::Body(body) => fmt::Display::fmt(body, f),
            ChartPoint::Angle(angle) => fmt::Display::fmt(angle, f),
        }
    }
}

/// A chart point and its longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectPoint {
    pub point: ChartPoint,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub body_a: ChartPoint,
    pub body_b: ChartPoint,
    pub aspect: AspectKind,
    /// Deviation from the exact angle in degrees, two decimals
    pub orb: f64,
    /// Whether the gap between the two points is closing
    pub applying: bool,
}
