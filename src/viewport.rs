//! Map view fitting over normalized positions
//!
//! Sentinel positions never reach the map: they are filtered here before the
//! centre and zoom are worked out.

use serde::Serialize;

use crate::coord::GeoPoint;
use crate::records::Pharmacy;

/// View fitting configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Used when nothing is plottable.
    pub default_center: GeoPoint,
    pub default_zoom: u8,
    pub single_point_zoom: u8,
    /// (minimum span in degrees, zoom) checked top to bottom; first span
    /// exceeded wins.
    pub zoom_ladder: Vec<(f64, u8)>,
    /// Zoom when the span exceeds no ladder step.
    pub closest_zoom: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            // Murcia city centre
            default_center: GeoPoint::new(37.9922, -1.1307).unwrap_or(GeoPoint::SENTINEL),
            default_zoom: 9,
            single_point_zoom: 13,
            zoom_ladder: vec![(1.0, 8), (0.5, 9), (0.2, 10), (0.05, 12)],
            closest_zoom: 13,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

pub fn is_plottable(point: &GeoPoint) -> bool {
    !point.is_sentinel()
}

pub fn plottable(pharmacies: &[Pharmacy]) -> Vec<&Pharmacy> {
    pharmacies
        .iter()
        .filter(|p| is_plottable(&p.location))
        .collect()
}

/// Centre on the mean of the plottable points, zoomed by their spread.
pub fn fit_view(points: &[GeoPoint], config: &ViewConfig) -> MapView {
    let points: Vec<&GeoPoint> = points.iter().filter(|p| is_plottable(p)).collect();

    match points.as_slice() {
        [] => MapView {
            center: config.default_center,
            zoom: config.default_zoom,
        },
        [only] => MapView {
            center: **only,
            zoom: config.single_point_zoom,
        },
        _ => {
            let count = points.len() as f64;
            let mut sum_lat = 0.0;
            let mut sum_lon = 0.0;
            let mut min_lat = f64::INFINITY;
            let mut max_lat = f64::NEG_INFINITY;
            let mut min_lon = f64::INFINITY;
            let mut max_lon = f64::NEG_INFINITY;
            for p in &points {
                let (lat, lon) = p.as_tuple();
                sum_lat += lat;
                sum_lon += lon;
                min_lat = min_lat.min(lat);
                max_lat = max_lat.max(lat);
                min_lon = min_lon.min(lon);
                max_lon = max_lon.max(lon);
            }

            let span = (max_lat - min_lat).max(max_lon - min_lon);
            let zoom = config
                .zoom_ladder
                .iter()
                .find(|(min_span, _)| span > *min_span)
                .map_or(config.closest_zoom, |(_, zoom)| *zoom);

            // The mean of in-range points is itself in range
            let center = GeoPoint::new(sum_lat / count, sum_lon / count)
                .unwrap_or(config.default_center);
            MapView { center, zoom }
        }
    }
}
