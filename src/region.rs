//! Fixed geographic rectangles used to judge whether a position is plausible
//! for the Spanish data feed.

/// Inclusive latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// Accept/reject rectangle for raw and projected candidates.
pub const VALIDATION_REGION: BoundingRegion = BoundingRegion::new(35.0, 44.0, -10.0, 5.0);

/// Tighter "this is surely Spain" rectangle. Only used to score axis order,
/// never to reject.
pub const SPAIN_CORE_REGION: BoundingRegion = BoundingRegion::new(36.0, 44.0, -9.0, 3.0);

impl BoundingRegion {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    pub fn contains_latitude(&self, lat: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
    }

    pub fn contains_longitude(&self, lon: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&lon)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.contains_latitude(lat) && self.contains_longitude(lon)
    }
}

/// Free-function form of [`BoundingRegion::contains`].
pub fn in_bounds(lat: f64, lon: f64, region: &BoundingRegion) -> bool {
    region.contains(lat, lon)
}
