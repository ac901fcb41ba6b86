pub mod builder;
pub mod locator;
pub mod placement;
pub mod types;

pub use builder::{assemble_cusps, attach_ruler_positions, build_houses};
pub use locator::{arc_contains, house_arc, locate_house, FALLBACK_HOUSE};
pub use placement::place_bodies;
pub use types::{AngularPoint, HouseDraft, HousePoint, Houses, RulerPosition};
