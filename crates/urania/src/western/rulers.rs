//! Sign rulers for Western astrology (modern scheme).
//!
//! Chiron, the lunar nodes and Lilith rule no sign.

use crate::ephemeris::CelestialBody;
use crate::western::signs::Sign;

/// Ruling body of a sign under modern rulership
pub fn modern_ruler(sign: Sign) -> CelestialBody {
    match sign {
        Sign::Aries => CelestialBody::Mars,
        Sign::Taurus => CelestialBody::Venus,
        Sign::Gemini => CelestialBody::Mercury,
        Sign::Cancer => CelestialBody::Moon,
        Sign::Leo => CelestialBody::Sun,
        Sign::Virgo => CelestialBody::Mercury,
        Sign::Libra => CelestialBody::Venus,
        Sign::Scorpio => CelestialBody::Pluto,
        Sign::Sagittarius => CelestialBody::Jupiter,
        Sign::Capricorn => CelestialBody::Saturn,
        Sign::Aquarius => CelestialBody::Uranus,
        Sign::Pisces => CelestialBody::Neptune,
    }
}

/// Ruling body of the sign containing `longitude`
pub fn ruler_from_longitude(longitude: f64) -> CelestialBody {
    modern_ruler(Sign::from_longitude(longitude))
}
