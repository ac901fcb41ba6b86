//! Circular arithmetic on ecliptic longitudes.
//!
//! Every helper here is total over finite input and agnostic of what the
//! angle represents (body, cusp or angular point).

use std::fmt;

/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// Degrees spanned by one zodiac sign.
pub const SIGN_SPAN: f64 = 30.0;

const MINUTES_PER_CIRCLE: i64 = 360 * 60;

/// Normalize an angle to [0, 360).
pub fn normalize(angle: f64) -> f64 {
    let r = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if r >= FULL_CIRCLE {
        0.0
    } else {
        r
    }
}

/// Smallest unsigned separation between two longitudes, in [0, 180].
pub fn shortest_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % FULL_CIRCLE;
    if d > 180.0 {
        FULL_CIRCLE - d
    } else {
        d
    }
}

/// Forward (counter-clockwise) distance travelled from `from` to `to`, in [0, 360).
pub fn forward_delta(from: f64, to: f64) -> f64 {
    normalize(to - from)
}

/// Zodiac sign index (0 = Aries .. 11 = Pisces) containing `longitude`.
pub fn sign_index_of(longitude: f64) -> u8 {
    ((normalize(longitude) / SIGN_SPAN).floor() as u8) % 12
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A longitude expressed as whole degrees and arc-minutes within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeMinute {
    /// Degree within the sign, 0..=29
    pub degree: u8,
    /// Arc-minute, 0..=59
    pub minute: u8,
    /// Sign the rounded position falls in
    pub sign_index: u8,
}

impl fmt::Display for DegreeMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}’", self.degree, self.minute)
    }
}

/// Round a longitude to the nearest arc-minute and split it into
/// degree-within-sign and minute.
///
/// Rounding carries: 29°59.6′ becomes 0°00′ of the following sign, and
/// 359°59.7′ becomes 0°00′ Aries.
pub fn format_degree_minute(longitude: f64) -> DegreeMinute {
    let total = ((normalize(longitude) * 60.0).round() as i64).rem_euclid(MINUTES_PER_CIRCLE);
    let whole_degrees = total / 60;
    DegreeMinute {
        degree: (whole_degrees % 30) as u8,
        minute: (total % 60) as u8,
        sign_index: (whole_degrees / 30) as u8,
    }
}
