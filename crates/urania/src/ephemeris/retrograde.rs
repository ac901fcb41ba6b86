//! Retrograde classification from two time-adjacent longitude samples.
//!
//! This is a one-hour finite difference, not the instantaneous speed. Close
//! to a station the true speed can change sign inside the window, in which
//! case the classification follows the net motion over the hour.

use crate::angle::forward_delta;

/// Apparent motion larger than half a circle forward is backward motion.
const BACKWARD_THRESHOLD: f64 = 180.0;

/// Whether a body moved backwards along the zodiac between two samples.
pub fn is_retrograde(current: f64, previous: f64) -> bool {
    forward_delta(previous, current) > BACKWARD_THRESHOLD
}
