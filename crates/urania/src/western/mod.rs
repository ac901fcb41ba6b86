pub mod rulers;
pub mod signs;

pub use rulers::{modern_ruler, ruler_from_longitude};
pub use signs::Sign;
