//! Which house arc contains a longitude.

use crate::angle::{normalize, FULL_CIRCLE};

/// House used when no arc matches (only reachable with non-finite input).
pub const FALLBACK_HOUSE: u8 = 12;

/// Start and end of the arc of house `house` (1..=12), with the end lifted
/// by 360° when the arc wraps past the Aries point.
pub fn house_arc(house: u8, cusps: &[f64; 12]) -> (f64, f64) {
    let i = (house as usize - 1) % 12;
    let start = normalize(cusps[i]);
    let mut end = normalize(cusps[(i + 1) % 12]);
    if end < start {
        end += FULL_CIRCLE;
    }
    (start, end)
}

/// Whether `longitude` lies in the inclusive range [start, end] of an arc
/// returned by [`house_arc`].
pub fn arc_contains(start: f64, end: f64, longitude: f64) -> bool {
    let mut lon = normalize(longitude);
    if lon < start {
        lon += FULL_CIRCLE;
    }
    start <= lon && lon <= end
}

/// House number (1..=12) whose arc contains `longitude`.
///
/// Arcs are closed at both ends, so a longitude exactly on a cusp belongs to
/// the house that ends there (house 1 keeps the Ascendant itself).
pub fn locate_house(longitude: f64, cusps: &[f64; 12]) -> u8 {
    for house in 1..=12u8 {
        let (start, end) = house_arc(house, cusps);
        if arc_contains(start, end, longitude) {
            return house;
        }
    }
    log::debug!(
        "No house arc contains longitude {}; falling back to house {}",
        longitude,
        FALLBACK_HOUSE
    );
    FALLBACK_HOUSE
}
