//! Runs the chart pipeline end to end.
//!
//! Stage order: annotate bodies, assemble cusps, place bodies, snapshot
//! house rulers, attach the lunar phase, compute aspects. Every stage
//! consumes the previous stage's output and returns a new value.

use crate::aspects::{collect_aspect_points, AspectCalculator};
use crate::bodies::{annotate_body, AnnotatedBody, BodyTable};
use crate::chart::types::{Chart, ChartMeta};
use crate::ephemeris::{sample_chart, CelestialBody, EphemerisProvider, RawChart, SampleInstant};
use crate::error::ChartError;
use crate::houses::{assemble_cusps, attach_ruler_positions, build_houses, place_bodies};
use crate::lunar::calculate_moon_phase;
use crate::request::{julian_day, ChartRequest, TimeResolver};

pub struct ChartAssembler {
    aspects: AspectCalculator,
}

impl ChartAssembler {
    pub fn new() -> Self {
        Self::with_aspect_calculator(AspectCalculator::new())
    }

    pub fn with_aspect_calculator(aspects: AspectCalculator) -> Self {
        Self { aspects }
    }

    /// Interpret raw positions and cusps as a chart.
    ///
    /// Bodies without ephemeris data are reported as absent; everything else
    /// is total over finite input.
    pub fn assemble(&self, meta: ChartMeta, raw: &RawChart) -> Chart {
        let annotated: Vec<AnnotatedBody> = CelestialBody::ALL
            .iter()
            .filter_map(|&body| raw.sample(body).map(|sample| annotate_body(body, &sample)))
            .collect();

        let cusps = assemble_cusps(&raw.houses);
        let drafts = build_houses(&cusps);
        let placed = place_bodies(annotated, &cusps);
        let houses = attach_ruler_positions(drafts, &placed);
        let bodies = attach_moon_phase(placed);

        let points = collect_aspect_points(&bodies, &houses);
        let aspects = self.aspects.compute_aspects(&points);

        log::debug!(
            "Assembled chart for {} {}: {} bodies, {} aspects",
            meta.date,
            meta.time,
            bodies.len(),
            aspects.len()
        );

        Chart {
            date: meta.date,
            time: meta.time,
            timezone: meta.timezone,
            latitude: meta.latitude,
            longitude: meta.longitude,
            julian_day: raw.julian_day,
            bodies,
            houses,
            aspects,
        }
    }
}

impl ChartAssembler {
    /// Validate a request, resolve its UTC instant, sample the provider at
    /// that instant and one hour earlier, then assemble.
    pub fn cast<P: EphemerisProvider + ?Sized>(
        &self,
        request: &ChartRequest,
        resolver: &dyn TimeResolver,
        provider: &P,
    ) -> Result<Chart, ChartError> {
        let validated = request.validate()?;
        let resolved = resolver.resolve(&validated)?;
        let jd = julian_day(resolved.utc);
        log::debug!("Casting chart for {} UTC (JD {:.6})", resolved.utc, jd);

        let raw = sample_chart(
            provider,
            SampleInstant::at(jd),
            request.latitude,
            request.longitude,
        )?;
        Ok(self.assemble(validated.chart_meta(&resolved.timezone), &raw))
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the lunar phase to the Moon when both luminaries are present.
fn attach_moon_phase(bodies: BodyTable) -> BodyTable {
    let sun = bodies.get(CelestialBody::Sun).map(|b| b.longitude);
    let moon = bodies.get(CelestialBody::Moon).map(|b| b.longitude);
    match (sun, moon) {
        (Some(sun), Some(moon)) => {
            let phase = calculate_moon_phase(sun, moon);
            bodies.map_body(CelestialBody::Moon, |body| body.with_phase(phase))
        }
        _ => bodies,
    }
}

/// Assemble a chart with the standard aspect table
pub fn assemble_chart(meta: ChartMeta, raw: &RawChart) -> Chart {
    ChartAssembler::new().assemble(meta, raw)
}

/// Cast a chart from a request with the standard aspect table
pub fn cast_chart<P: EphemerisProvider + ?Sized>(
    request: &ChartRequest,
    resolver: &dyn TimeResolver,
    provider: &P,
) -> Result<Chart, ChartError> {
    ChartAssembler::new().cast(request, resolver, provider)
}
