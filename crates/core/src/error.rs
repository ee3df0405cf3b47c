//! Error types for U-Loading.

use thiserror::Error;

/// Result type alias for U-Loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating packages, vehicles and configuration.
///
/// Packing itself never fails: a package that cannot be loaded is reported
/// as unpacked data, not as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid package provided.
    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    /// Invalid vehicle provided.
    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),
}
