//! Coordinate normalization for the Murcia pharmacy open-data feed.
//!
//! Records in the feed carry two coordinate fields whose system and axis
//! order are not declared: some hold UTM zone 30N meters, some hold degrees,
//! either way round. [`normalize`] works out which and returns a canonical
//! [`GeoPoint`]; [`normalize_coordinates`] does the same but substitutes
//! [`GeoPoint::SENTINEL`] for anything it cannot resolve.

pub mod coord;
pub mod error;
pub mod normalize;
pub mod records;
pub mod region;
pub mod viewport;

pub use coord::GeoPoint;
pub use error::{NormalizeError, NormalizeResult};
pub use normalize::{RawValue, ValueClass, normalize, normalize_coordinates};
pub use region::{BoundingRegion, SPAIN_CORE_REGION, VALIDATION_REGION, in_bounds};
