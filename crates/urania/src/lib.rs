//! Natal chart interpretation from raw ephemeris samples.
//!
//! The core ([`chart::assemble_chart`]) takes body positions at the chart
//! instant and one hour earlier plus Placidus cusps, and derives signs,
//! retrograde state, house placement, house rulers, lunar phase and aspects.
//! Ephemeris access and request handling live at the edges
//! ([`ephemeris`], [`request`]).

pub mod angle;
pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod lunar;
pub mod request;
pub mod western;

pub use chart::{assemble_chart, cast_chart, Chart, ChartAssembler, ChartMeta};
pub use ephemeris::{sample_chart, EphemerisConfig, EphemerisProvider, RawChart, SampleInstant};
pub use error::ChartError;
pub use request::{ChartRequest, FixedOffsetResolver, TimeResolver};

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;
