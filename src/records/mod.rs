//! Open-data record ingestion
//!
//! Turns datastore responses from the regional catalogue into `Pharmacy`
//! values whose positions have been through the normalizer. Fetching the
//! response is left to the caller.

pub mod parser;
pub mod types;

pub use parser::{format_url, parse_datastore_response, parse_record};
pub use types::Pharmacy;
