use crate::ephemeris::EphemerisError;
use crate::request::RequestError;
use thiserror::Error;

/// Failures that stop a chart from being produced.
///
/// A body without ephemeris data is not an error: it is reported as absent
/// in the chart.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart request: {0}")]
    InvalidRequest(#[from] RequestError),
    #[error("House computation failed: {0}")]
    HouseComputationFailure(#[source] EphemerisError),
}
