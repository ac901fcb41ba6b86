//! Assembles the twelve houses from the angles and the raw cusps.
//!
//! Ascendant and MC come straight from the house-system calculation; IC and
//! DSC are their exact oppositions, whatever the raw cusps 4 and 7 say.

use crate::angle::{format_degree_minute, normalize};
use crate::bodies::BodyTable;
use crate::ephemeris::RawHouses;
use crate::houses::types::{AngularPoint, HouseDraft, HousePoint, Houses, RulerPosition};
use crate::western::{modern_ruler, Sign};

/// Cusp longitudes of houses 1..=12, angles taking precedence over raw cusps.
pub fn assemble_cusps(raw: &RawHouses) -> [f64; 12] {
    let mut cusps: [Option<f64>; 12] = [None; 12];
    cusps[0] = Some(normalize(raw.ascendant));
    cusps[9] = Some(normalize(raw.mc));
    cusps[3] = Some(normalize(raw.mc + 180.0));
    cusps[6] = Some(normalize(raw.ascendant + 180.0));

    std::array::from_fn(|i| cusps[i].unwrap_or_else(|| normalize(raw.cusps[i])))
}

/// Sign, angle name and rulers for each cusp
pub fn build_houses(cusps: &[f64; 12]) -> [HouseDraft; 12] {
    std::array::from_fn(|i| {
        let number = i as u8 + 1;
        let longitude = cusps[i];
        let sign = Sign::from_longitude(longitude);
        let ruler = modern_ruler(sign);
        let formatted = format_degree_minute(longitude);
        HouseDraft {
            number,
            longitude,
            longitude_formatted: formatted.to_string(),
            formatted_sign: Sign::from_index(formatted.sign_index),
            sign,
            name: AngularPoint::for_house(number),
            sign_ruler: ruler,
            house_ruler: ruler,
        }
    })
}

/// Snapshot the position of each house ruler.
///
/// Takes bodies that are already placed in houses; a ruler the ephemeris had
/// no data for leaves `ruler_position` empty.
pub fn attach_ruler_positions(drafts: [HouseDraft; 12], bodies: &BodyTable) -> Houses {
    Houses::new(drafts.map(|draft| {
        let ruler_position = bodies.get(draft.sign_ruler).map(|ruler| RulerPosition {
            longitude: ruler.longitude,
            longitude_formatted: ruler.longitude_formatted.clone(),
            formatted_sign: ruler.formatted_sign,
            sign: ruler.sign,
            house: ruler.house,
            house_formatted: ruler.house_formatted.clone(),
        });
        HousePoint {
            number: draft.number,
            longitude: draft.longitude,
            longitude_formatted: draft.longitude_formatted,
            formatted_sign: draft.formatted_sign,
            sign: draft.sign,
            is_angular: draft.name.is_some(),
            name: draft.name,
            sign_ruler: draft.sign_ruler,
            house_ruler: draft.house_ruler,
            ruler_position,
        }
    }))
}
