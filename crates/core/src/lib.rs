//! Domain types shared by the LUCT reporting portal crates.
//!
//! `models` holds the request payloads accepted by the API and the row shapes it
//! returns; `errors` holds the error taxonomy every layer reports through.

pub mod errors;
pub mod models;
