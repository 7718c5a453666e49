//! Output writers for generated documents.

pub mod json;

pub use json::{read_json, write_json};
