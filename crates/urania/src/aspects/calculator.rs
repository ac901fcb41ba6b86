use crate::angle::{forward_delta, round_to, shortest_separation};
use crate::aspects::types::{Aspect, AspectDefinition, AspectKind, AspectPoint, ChartPoint};
use crate::bodies::BodyTable;
use crate::houses::Houses;

/// Aspect table in match priority order
pub const ASPECTS: [AspectDefinition; 5] = [
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, max_orb: 8.0 },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, max_orb: 6.0 },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0, max_orb: 6.0 },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0, max_orb: 6.0 },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, max_orb: 8.0 },
];

/// Bodies in chart order followed by the four angles (Ascendant, MC, IC, DSC).
pub fn collect_aspect_points(bodies: &BodyTable, houses: &Houses) -> Vec<AspectPoint> {
    let bodies = bodies.iter().map(|body| AspectPoint {
        point: ChartPoint::Body(body.name),
        longitude: body.longitude,
    });
    let angles = houses.angular_points().map(|(angle, house)| AspectPoint {
        point: ChartPoint::Angle(angle),
        longitude: house.longitude,
    });
    bodies.chain(angles).collect()
}

/// Aspect calculator
pub struct AspectCalculator {
    definitions: Vec<AspectDefinition>,
}

impl AspectCalculator {
    /// Calculator using the standard five-aspect table
    pub fn new() -> Self {
        Self::with_definitions(ASPECTS.to_vec())
    }

    pub fn with_definitions(definitions: Vec<AspectDefinition>) -> Self {
        Self { definitions }
    }

    /// Aspects between every pair of points, in pair order.
    ///
    /// Each definition is checked on its own, so a pair within the orb of
    /// two definitions yields two records.
    pub fn compute_aspects(&self, points: &[AspectPoint]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let a = &points[i];
                let b = &points[j];
                for (kind, orb) in self.matching_aspects(a.longitude, b.longitude) {
                    aspects.push(Aspect {
                        body_a: a.point,
                        body_b: b.point,
                        aspect: kind,
                        orb: round_to(orb, 2),
                        applying: is_applying(a.longitude, b.longitude),
                    });
                }
            }
        }
        aspects
    }

    /// Every definition within orb of the separation of two longitudes,
    /// with the unrounded orb.
    pub fn matching_aspects(&self, lon1: f64, lon2: f64) -> Vec<(AspectKind, f64)> {
        let separation = shortest_separation(lon1, lon2);
        self.definitions
            .iter()
            .filter_map(|def| {
                let orb = (separation - def.angle).abs();
                (orb <= def.max_orb).then_some((def.kind, orb))
            })
            .collect()
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// The second point lies less than half a circle ahead of the first.
fn is_applying(lon1: f64, lon2: f64) -> bool {
    forward_delta(lon1, lon2) < 180.0
}
