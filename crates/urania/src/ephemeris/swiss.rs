use crate::ephemeris::provider::{
    check_placidus_latitude, EphemerisConfig, EphemerisError, EphemerisProvider,
};
use crate::ephemeris::types::{CelestialBody, RawHouses, RawPosition};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::{AscMc, Cusp};

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: u32 = 2 | 256;
const HOUSE_FLAGS: i32 = 2 | 256;
const PLACIDUS: u8 = b'P';

/// Swiss Ephemeris body number
fn swiss_body_id(body: CelestialBody) -> u32 {
    match body {
        CelestialBody::Sun => 0,
        CelestialBody::Moon => 1,
        CelestialBody::Mercury => 2,
        CelestialBody::Venus => 3,
        CelestialBody::Mars => 4,
        CelestialBody::Jupiter => 5,
        CelestialBody::Saturn => 6,
        CelestialBody::Uranus => 7,
        CelestialBody::Neptune => 8,
        CelestialBody::Pluto => 9,
        CelestialBody::MeanNode => 10,
        CelestialBody::TrueNode => 11,
        CelestialBody::Lilith => 12, // MEAN_APOG
        CelestialBody::Chiron => 15,
    }
}

/// The library takes the data path as UTF-8 text
fn ephe_path_str(config: &EphemerisConfig) -> Result<&str, EphemerisError> {
    config
        .ephemeris_path
        .to_str()
        .ok_or_else(|| EphemerisError::PathNotFound {
            path: config.ephemeris_path.display().to_string(),
            message: "Ephemeris path is not valid UTF-8.".to_string(),
        })
}

/// Swiss Ephemeris backed provider
pub struct SwissEphemerisAdapter {
    config: EphemerisConfig,
}

impl SwissEphemerisAdapter {
    /// Create an adapter reading data files from the configured directory
    ///
    /// The Swiss Ephemeris library keeps one data path per process, so the
    /// most recently built adapter decides where files are read from.
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        set_ephe_path(ephe_path_str(&config)?);
        log::debug!(
            "Swiss Ephemeris adapter using {}",
            config.ephemeris_path.display()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(&self, body: CelestialBody, julian_day: f64) -> Result<RawPosition, EphemerisError> {
        let result = calc_ut(julian_day, swiss_body_id(body), CALC_FLAGS).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(RawPosition {
            longitude: out[0],
            latitude: out[1],
            distance: out[2],
            speed_longitude: out[3],
            speed_latitude: out[4],
            speed_distance: out[5],
        })
    }

    fn houses(&self, julian_day: f64, latitude: f64, longitude: f64) -> Result<RawHouses, EphemerisError> {
        // swe_houses_ex falls back to Porphyry near the poles without telling us
        check_placidus_latitude(latitude)?;
        let (c, a) = houses_ex(julian_day, HOUSE_FLAGS, latitude, longitude, PLACIDUS as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusps = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusps.iter().chain([&ascmc.ascendant, &ascmc.mc]).any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "non-finite cusp at JD {} (lat {}, lon {})",
                    julian_day, latitude, longitude
                ),
            });
        }

        Ok(RawHouses {
            cusps,
            ascendant: ascmc.ascendant,
            mc: ascmc.mc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_ids_are_distinct() {
        let mut ids: Vec<u32> = CelestialBody::ALL.iter().map(|b| swiss_body_id(*b)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CelestialBody::ALL.len());
    }

    #[test]
    fn missing_directory_is_rejected_before_reaching_the_library() {
        let config = EphemerisConfig::new("/definitely/not/a/real/ephe/dir");
        assert!(matches!(
            SwissEphemerisAdapter::new(config),
            Err(EphemerisError::PathNotFound { .. })
        ));
    }

    #[test]
    fn utf8_path_is_passed_through() {
        let config = EphemerisConfig::new("/usr/share/swisseph");
        assert_eq!(ephe_path_str(&config).unwrap(), "/usr/share/swisseph");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let config = EphemerisConfig::new(OsStr::from_bytes(b"/tmp/ephe\xff"));
        assert!(matches!(
            ephe_path_str(&config),
            Err(EphemerisError::PathNotFound { .. })
        ));
    }

    #[test]
    fn polar_houses_fail_instead_of_switching_systems() {
        let adapter = SwissEphemerisAdapter {
            config: EphemerisConfig::new(std::env::temp_dir()),
        };
        assert!(matches!(
            adapter.houses(2460375.3125, 78.2, 15.6),
            Err(EphemerisError::HouseCalculationFailed { .. })
        ));
    }
}
