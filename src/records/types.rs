//! Pharmacy record types

use serde::Serialize;

use crate::coord::GeoPoint;

/// One pharmacy from the regional open-data catalogue, with its position
/// already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub phone: String,
    pub postal_code: String,
    pub email: String,
    pub url: String,
    /// `GeoPoint::SENTINEL` when the raw fields could not be resolved.
    pub location: GeoPoint,
    pub photos: Vec<String>,
}

impl Pharmacy {
    pub fn has_location(&self) -> bool {
        !self.location.is_sentinel()
    }
}

/// Source field names in the datastore resource.
pub mod fields {
    pub const ID: &str = "_id";
    pub const CODE: &str = "Codigo";
    pub const NAME: &str = "Nombre";
    pub const ADDRESS: &str = "Direccion";
    pub const CITY: &str = "Municipio";
    pub const DISTRICT: &str = "Pedania";
    pub const PHONE: &str = "Telefono";
    pub const POSTAL_CODE: &str = "C.P.";
    pub const EMAIL: &str = "Email";
    pub const URL_FULL: &str = "URL Real";
    pub const URL_SHORT: &str = "URL Corta";
    pub const LATITUDE: &str = "Latitud";
    pub const LONGITUDE: &str = "Longitud";
    pub const PHOTOS: [&str; 3] = ["Foto 1", "Foto 2", "Foto 3"];
}
