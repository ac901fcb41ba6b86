use crate::ephemeris::types::{CelestialBody, RawHouses, RawPosition};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by an ephemeris backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris path not found: {path}. {message}")]
    PathNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Location of the ephemeris data files, handed to a backend when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisConfig {
    pub ephemeris_path: PathBuf,
}

impl EphemerisConfig {
    pub const ENV_VAR: &'static str = "SWISS_EPHEMERIS_PATH";
    pub const DEFAULT_PATH: &'static str = "/usr/local/share/swisseph";

    pub fn new(ephemeris_path: impl Into<PathBuf>) -> Self {
        Self {
            ephemeris_path: ephemeris_path.into(),
        }
    }

    /// Explicit path if given, else `SWISS_EPHEMERIS_PATH`, else the system default.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit.unwrap_or_else(|| {
            env::var(Self::ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_PATH))
        });
        Self::new(path)
    }

    /// Fails when the configured directory does not exist
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.ephemeris_path.exists() {
            return Err(EphemerisError::PathNotFound {
                path: self.ephemeris_path.display().to_string(),
                message: "Please ensure the ephemeris data files are installed.".to_string(),
            });
        }
        Ok(())
    }
}

/// Mean obliquity of the ecliptic at J2000, degrees
const MEAN_OBLIQUITY: f64 = 23.439_291_1;

/// Beyond this |latitude| some ecliptic degrees never rise or set and
/// Placidus cusps do not exist.
pub const PLACIDUS_LATITUDE_LIMIT: f64 = 90.0 - MEAN_OBLIQUITY;

/// Reject latitudes where a Placidus house calculation has no answer.
///
/// Backends that silently switch house systems in the polar regions must
/// call this first.
pub fn check_placidus_latitude(latitude: f64) -> Result<(), EphemerisError> {
    if latitude.abs() < PLACIDUS_LATITUDE_LIMIT {
        Ok(())
    } else {
        Err(EphemerisError::HouseCalculationFailed {
            message: format!(
                "Placidus houses are undefined at latitude {} (limit ±{:.2})",
                latitude, PLACIDUS_LATITUDE_LIMIT
            ),
        })
    }
}

/// Source of raw body positions and house cusps.
///
/// Implementations compute Placidus houses; the chart core never selects a
/// house system itself.
pub trait EphemerisProvider {
    /// Position of `body` at the given Julian day (UT)
    fn position(&self, body: CelestialBody, julian_day: f64) -> Result<RawPosition, EphemerisError>;

    /// House cusps, Ascendant and MC for an instant and a geographic location
    fn houses(&self, julian_day: f64, latitude: f64, longitude: f64) -> Result<RawHouses, EphemerisError>;
}
