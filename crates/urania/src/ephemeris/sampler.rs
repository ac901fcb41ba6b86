//! Collects the raw inputs of a chart from an [`EphemerisProvider`].

use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{BodySample, CelestialBody, RawChart};
use crate::error::ChartError;
use std::collections::BTreeMap;

const ONE_HOUR_IN_DAYS: f64 = 1.0 / 24.0;

/// The chart instant and the instant used for retrograde detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleInstant {
    pub julian_day: f64,
    pub previous_julian_day: f64,
}

impl SampleInstant {
    /// Pairs `julian_day` with the instant one hour earlier
    pub fn at(julian_day: f64) -> Self {
        Self {
            julian_day,
            previous_julian_day: julian_day - ONE_HOUR_IN_DAYS,
        }
    }
}

/// Query every body twice and the house cusps once.
///
/// A body the provider cannot compute at either instant is recorded as
/// absent; a house failure aborts the chart.
pub fn sample_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: SampleInstant,
    latitude: f64,
    longitude: f64,
) -> Result<RawChart, ChartError> {
    let mut bodies = BTreeMap::new();
    for body in CelestialBody::ALL {
        let current = provider.position(body, instant.julian_day);
        let previous = provider.position(body, instant.previous_julian_day);
        let sample = match (current, previous) {
            (Ok(current), Ok(previous)) => Some(BodySample { current, previous }),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("No ephemeris data for {}: {}", body, e);
                None
            }
        };
        bodies.insert(body, sample);
    }

    let houses = provider
        .houses(instant.julian_day, latitude, longitude)
        .map_err(ChartError::HouseComputationFailure)?;

    Ok(RawChart {
        julian_day: instant.julian_day,
        bodies,
        houses,
    })
}
