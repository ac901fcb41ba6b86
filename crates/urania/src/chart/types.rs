use crate::aspects::Aspect;
use crate::bodies::BodyTable;
use crate::houses::Houses;
use serde::{Deserialize, Serialize};

/// Request details echoed unchanged into the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A fully interpreted chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub julian_day: f64,
    pub bodies: BodyTable,
    pub houses: Houses,
    pub aspects: Vec<Aspect>,
}
