use crate::bodies::{AnnotatedBody, Body, BodyTable};
use crate::houses::locator::locate_house;

/// Put every annotated body in the house whose arc contains it.
pub fn place_bodies(bodies: Vec<AnnotatedBody>, cusps: &[f64; 12]) -> BodyTable {
    BodyTable::from_bodies(bodies.into_iter().map(|body| {
        let house = locate_house(body.longitude, cusps);
        Body::placed(body, house)
    }))
}
