pub mod calculator;
pub mod types;

pub use calculator::{collect_aspect_points, AspectCalculator, ASPECTS};
pub use types::{Aspect, AspectDefinition, AspectKind, AspectPoint, ChartPoint};
