/// Password hashing and verification
pub mod auth;
/// Error to HTTP response mapping, fallback, timeout and panic handling
pub mod error_handling;
/// Extractors that report malformed input as `{error}` bodies
pub mod extract;
