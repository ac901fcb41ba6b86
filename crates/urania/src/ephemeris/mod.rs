pub mod provider;
pub mod retrograde;
pub mod sampler;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod swiss;

pub use provider::{
    check_placidus_latitude, EphemerisConfig, EphemerisError, EphemerisProvider,
    PLACIDUS_LATITUDE_LIMIT,
};
pub use retrograde::is_retrograde;
pub use sampler::{sample_chart, SampleInstant};
pub use types::{BodySample, CelestialBody, RawChart, RawHouses, RawPosition};

#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemerisAdapter;
