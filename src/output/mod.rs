//! Record export in machine-readable formats.
//!
//! Feature-gated writers for handing parsed records to other tools:
//!
//! - `csv-output`: [`to_csv`] / [`write_csv`], semicolon-delimited
//! - `json-output`: [`to_json`] / [`write_json`], full records with all
//!   derived fields

#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
