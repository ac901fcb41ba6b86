use crate::ephemeris::CelestialBody;
use crate::western::Sign;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The four chart angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngularPoint {
    Ascendant,
    #[serde(rename = "MC")]
    Mc,
    #[serde(rename = "IC")]
    Ic,
    #[serde(rename = "DSC")]
    Dsc,
}

impl AngularPoint {
    /// Angles in the order they take part in aspects
    pub const ASPECT_ORDER: [AngularPoint; 4] = [
        AngularPoint::Ascendant,
        AngularPoint::Mc,
        AngularPoint::Ic,
        AngularPoint::Dsc,
    ];

    pub fn house(self) -> u8 {
        match self {
            AngularPoint::Ascendant => 1,
            AngularPoint::Ic => 4,
            AngularPoint::Dsc => 7,
            AngularPoint::Mc => 10,
        }
    }

    pub fn for_house(house: u8) -> Option<AngularPoint> {
        match house {
            1 => Some(AngularPoint::Ascendant),
            4 => Some(AngularPoint::Ic),
            7 => Some(AngularPoint::Dsc),
            10 => Some(AngularPoint::Mc),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AngularPoint::Ascendant => "Ascendant",
            AngularPoint::Mc => "MC",
            AngularPoint::Ic => "IC",
            AngularPoint::Dsc => "DSC",
        }
    }
}

impl fmt::Display for AngularPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A house cusp with sign and rulership, before ruler positions are known
#[derive(Debug, Clone, PartialEq)]
pub struct HouseDraft {
    pub number: u8,
    pub longitude: f64,
    pub longitude_formatted: String,
    pub formatted_sign: Sign,
    pub sign: Sign,
    pub name: Option<AngularPoint>,
    pub sign_ruler: CelestialBody,
    pub house_ruler: CelestialBody,
}

/// Where the ruler of a house stood when the chart was cast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulerPosition {
    pub longitude: f64,
    pub longitude_formatted: String,
    pub formatted_sign: Sign,
    pub sign: Sign,
    pub house: u8,
    pub house_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousePoint {
    #[serde(skip)]
    pub number: u8,
    pub longitude: f64,
    pub longitude_formatted: String,
    /// Sign `longitude_formatted` is counted in
    pub formatted_sign: Sign,
    pub sign: Sign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<AngularPoint>,
    /// True exactly for houses 1, 4, 7 and 10
    pub is_angular: bool,
    pub sign_ruler: CelestialBody,
    /// Same as `sign_ruler` under modern rulership
    pub house_ruler: CelestialBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruler_position: Option<RulerPosition>,
}

/// The twelve houses of a chart, numbered 1..=12
#[derive(Debug, Clone, PartialEq)]
pub struct Houses {
    points: [HousePoint; 12],
}

impl Houses {
    pub fn new(points: [HousePoint; 12]) -> Self {
        Self { points }
    }

    pub fn get(&self, number: u8) -> Option<&HousePoint> {
        match number {
            1..=12 => Some(&self.points[number as usize - 1]),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HousePoint> {
        self.points.iter()
    }

    pub fn cusps(&self) -> [f64; 12] {
        std::array::from_fn(|i| self.points[i].longitude)
    }

    /// Angular houses in aspect order: Ascendant, MC, IC, DSC
    pub fn angular_points(&self) -> impl Iterator<Item = (AngularPoint, &HousePoint)> {
        AngularPoint::ASPECT_ORDER
            .into_iter()
            .map(move |angle| (angle, &self.points[angle.house() as usize - 1]))
    }
}

impl Serialize for Houses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for point in &self.points {
            map.serialize_entry(&point.number.to_string(), point)?;
        }
        map.end()
    }
}
