//! Per-body annotations: sign, retrograde state, house and lunar phase.

use crate::angle::{format_degree_minute, normalize};
use crate::ephemeris::{is_retrograde, BodySample, CelestialBody};
use crate::lunar::MoonPhase;
use crate::western::Sign;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A body with everything derived that does not depend on houses
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedBody {
    pub name: CelestialBody,
    /// Normalized to [0, 360)
    pub longitude: f64,
    pub longitude_formatted: String,
    /// Sign of the rounded position, which differs from `sign` when
    /// rounding carries past 30°
    pub formatted_sign: Sign,
    pub latitude: f64,
    pub distance: f64,
    pub speed_longitude: f64,
    pub speed_latitude: f64,
    pub speed_distance: f64,
    pub retrograde: bool,
    pub sign: Sign,
}

/// Derive sign, retrograde flag and formatted position from a raw sample
pub fn annotate_body(name: CelestialBody, sample: &BodySample) -> AnnotatedBody {
    let current = &sample.current;
    let longitude = normalize(current.longitude);
    let formatted = format_degree_minute(longitude);
    AnnotatedBody {
        name,
        longitude,
        longitude_formatted: formatted.to_string(),
        formatted_sign: Sign::from_index(formatted.sign_index),
        latitude: current.latitude,
        distance: current.distance,
        speed_longitude: current.speed_longitude,
        speed_latitude: current.speed_latitude,
        speed_distance: current.speed_distance,
        retrograde: is_retrograde(current.longitude, sample.previous.longitude),
        sign: Sign::from_longitude(longitude),
    }
}

/// A body placed in a house, as reported in the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    #[serde(skip)]
    pub name: CelestialBody,
    pub longitude: f64,
    pub longitude_formatted: String,
    /// Sign `longitude_formatted` is counted in
    pub formatted_sign: Sign,
    pub sign: Sign,
    pub latitude: f64,
    pub distance: f64,
    pub retrograde: bool,
    pub speed_longitude: f64,
    pub speed_latitude: f64,
    pub speed_distance: f64,
    /// 1..=12
    pub house: u8,
    pub house_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<MoonPhase>,
}

impl Body {
    pub fn placed(annotated: AnnotatedBody, house: u8) -> Self {
        Self {
            name: annotated.name,
            longitude: annotated.longitude,
            longitude_formatted: annotated.longitude_formatted,
            formatted_sign: annotated.formatted_sign,
            sign: annotated.sign,
            latitude: annotated.latitude,
            distance: annotated.distance,
            retrograde: annotated.retrograde,
            speed_longitude: annotated.speed_longitude,
            speed_latitude: annotated.speed_latitude,
            speed_distance: annotated.speed_distance,
            house,
            house_formatted: format!("House {}", house),
            phase: None,
        }
    }

    pub fn with_phase(self, phase: MoonPhase) -> Self {
        Self {
            phase: Some(phase),
            ..self
        }
    }
}

/// All bodies of a chart, indexed by [`CelestialBody`]; `None` marks a body
/// the ephemeris had no data for.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTable {
    slots: [Option<Body>; 14],
}

impl BodyTable {
    pub fn from_bodies(bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut slots: [Option<Body>; 14] = Default::default();
        for body in bodies {
            let index = body.name.index();
            slots[index] = Some(body);
        }
        Self { slots }
    }

    pub fn get(&self, name: CelestialBody) -> Option<&Body> {
        self.slots[name.index()].as_ref()
    }

    /// Present bodies in [`CelestialBody::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace one body, leaving the rest untouched
    pub fn map_body(self, name: CelestialBody, f: impl FnOnce(Body) -> Body) -> Self {
        let mut slots = self.slots;
        let index = name.index();
        slots[index] = slots[index].take().map(f);
        Self { slots }
    }
}

impl Serialize for BodyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (name, slot) in CelestialBody::ALL.iter().zip(self.slots.iter()) {
            map.serialize_entry(name.name(), slot)?;
        }
        map.end()
    }
}
