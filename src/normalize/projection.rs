//! UTM zone 30N (ETRS89 / GRS80) to geographic degrees.
//!
//! The open-data feed publishes many positions in EPSG:25830. The inverse
//! transverse Mercator here uses the 6th-order Krüger series, which is exact
//! to well below a millimeter across the zone and a few zones beyond it.

use std::sync::LazyLock;

use tracing::{debug, trace, warn};

use crate::coord::GeoPoint;
use crate::error::{NormalizeError, NormalizeResult};
use crate::region::VALIDATION_REGION;

/// A transverse Mercator projection on a fixed ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionDefinition {
    pub name: &'static str,
    /// Ellipsoid semi-major axis, meters.
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub central_meridian_deg: f64,
    pub scale_factor: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

/// EPSG:25830, UTM zone 30 north on GRS80.
///
/// Target is WGS84 degrees; GRS80 and WGS84 differ by ~0.1 mm in the
/// semi-minor axis so no datum shift is applied.
pub const ETRS89_UTM_30N: ProjectionDefinition = ProjectionDefinition {
    name: "EPSG:25830",
    semi_major_axis: 6_378_137.0,
    inverse_flattening: 298.257_222_101,
    central_meridian_deg: -3.0,
    scale_factor: 0.9996,
    false_easting: 500_000.0,
    false_northing: 0.0,
};

/// Precomputed inverse-series terms for one projection.
struct InverseSeries {
    /// Rectifying radius scaled by k0.
    k0_a: f64,
    /// First eccentricity.
    e: f64,
    beta: [f64; 6],
}

impl InverseSeries {
    fn for_definition(def: &ProjectionDefinition) -> Self {
        let f = 1.0 / def.inverse_flattening;
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let a = def.semi_major_axis / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0);

        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0 - 81.0 * n5 / 512.0
                + 96199.0 * n6 / 604800.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0 + 46.0 * n5 / 105.0
                - 1118711.0 * n6 / 3870720.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0 - 209.0 * n5 / 4480.0 + 5569.0 * n6 / 90720.0,
            4397.0 * n4 / 161280.0 - 11.0 * n5 / 504.0 - 830251.0 * n6 / 7257600.0,
            4583.0 * n5 / 161280.0 - 108847.0 * n6 / 3991680.0,
            20648693.0 * n6 / 638668800.0,
        ];

        Self {
            k0_a: def.scale_factor * a,
            e: (f * (2.0 - f)).sqrt(),
            beta,
        }
    }
}

static UTM_30N_SERIES: LazyLock<InverseSeries> =
    LazyLock::new(|| InverseSeries::for_definition(&ETRS89_UTM_30N));

// Newton steps for geodetic from conformal latitude; converges in 2-3.
const MAX_LATITUDE_ITERATIONS: usize = 8;
const LATITUDE_TOLERANCE: f64 = 1e-14;

/// Inverse projection of one easting/northing pair on EPSG:25830.
///
/// Returns (latitude, longitude) in degrees. No plausibility check beyond
/// the results being finite and globally valid.
pub fn utm_to_geographic(easting: f64, northing: f64) -> NormalizeResult<(f64, f64)> {
    inverse_with(&UTM_30N_SERIES, &ETRS89_UTM_30N, easting, northing)
}

fn inverse_with(
    series: &InverseSeries,
    def: &ProjectionDefinition,
    easting: f64,
    northing: f64,
) -> NormalizeResult<(f64, f64)> {
    if !easting.is_finite() || !northing.is_finite() {
        return Err(NormalizeError::projection(format!(
            "non-finite input ({easting}, {northing})"
        )));
    }

    let xi = (northing - def.false_northing) / series.k0_a;
    let eta = (easting - def.false_easting) / series.k0_a;

    let mut xi_p = xi;
    let mut eta_p = eta;
    for (idx, beta) in series.beta.iter().enumerate() {
        let k = 2.0 * (idx as f64 + 1.0);
        xi_p -= beta * (k * xi).sin() * (k * eta).cosh();
        eta_p -= beta * (k * xi).cos() * (k * eta).sinh();
    }

    let chi = (xi_p.sin() / eta_p.cosh()).asin();
    let lambda = eta_p.sinh().atan2(xi_p.cos());

    let tau = geodetic_tau(chi.tan(), series.e);
    let latitude = tau.atan().to_degrees();
    let longitude = def.central_meridian_deg + lambda.to_degrees();

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(NormalizeError::projection(format!(
            "degenerate result for ({easting}, {northing})"
        )));
    }
    Ok((latitude, longitude))
}

/// Solve tan(geodetic latitude) from tan(conformal latitude).
fn geodetic_tau(tau_conformal: f64, e: f64) -> f64 {
    let e2m = 1.0 - e * e;
    let mut tau = tau_conformal;
    for _ in 0..MAX_LATITUDE_ITERATIONS {
        let tau1 = tau.hypot(1.0);
        let sigma = (e * (e * tau / tau1).atanh()).sinh();
        let tau_i = tau * sigma.hypot(1.0) - sigma * tau1;
        let dtau = (tau_conformal - tau_i) / tau_i.hypot(1.0) * (1.0 + e2m * tau * tau)
            / (e2m * tau1);
        tau += dtau;
        // NaN also stops here; the caller rejects the non-finite result
        if dtau.is_nan() || dtau.abs() < LATITUDE_TOLERANCE * tau.abs().max(1.0) {
            break;
        }
    }
    tau
}

/// One attempt: project and require the result inside the validation region.
fn attempt(easting: f64, northing: f64) -> NormalizeResult<GeoPoint> {
    let (lat, lon) = utm_to_geographic(easting, northing)?;
    if !VALIDATION_REGION.contains(lat, lon) {
        return Err(NormalizeError::projection(format!(
            "({easting}, {northing}) projects to ({lat:.5}, {lon:.5}), outside validation region"
        )));
    }
    GeoPoint::new(lat, lon)
}

/// Convert a UTM 30N pair to a validated position, retrying with the two
/// values swapped when the first reading lands outside the region.
///
/// Every failure, including degenerate math, ends as `None`.
pub fn convert_projected_to_geographic(easting: f64, northing: f64) -> Option<GeoPoint> {
    match attempt(easting, northing) {
        Ok(point) => {
            trace!(easting, northing, %point, "utm conversion accepted");
            Some(point)
        }
        Err(first) => {
            warn!("{first}; retrying with easting/northing swapped");
            match attempt(northing, easting) {
                Ok(point) => {
                    debug!(easting, northing, %point, "utm conversion recovered by swap");
                    Some(point)
                }
                Err(second) => {
                    warn!("{second}; giving up");
                    None
                }
            }
        }
    }
}
