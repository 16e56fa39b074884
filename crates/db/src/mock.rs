//! Test doubles for the store seam.

pub mod repositories;
