//! # U-Loading Core
//!
//! Core types shared by the U-Loading vehicle loading engine.
//!
//! ## Core Components
//!
//! - **Shapes**: [`Dimensions`] and the six axis-aligned [`Orientation`]s
//! - **Bounding boxes**: [`AABB3D`] overlap and containment tests
//! - **Configuration**: [`Config`] and [`LoadMode`]
//! - **Reports**: [`Placement`], [`VehicleLoad`], [`PlatformReport`], [`LoadReport`]
//!
//! ## Configuration
//!
//! ```rust
//! use u_loading_core::{Config, LoadMode};
//!
//! let config = Config::new()
//!     .with_mode(LoadMode::Distribute)
//!     .with_stop_when_full(true);
//! assert_eq!(config.mode, LoadMode::Distribute);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod transform;

// Re-exports
pub use config::{Config, LoadMode};
pub use error::{Error, Result};
pub use geometry::{Dimensions, Orientation, TOLERANCE};
pub use placement::Placement;
pub use result::{
    packed_fraction, LoadReport, PlatformOutcome, PlatformReport, VehicleLoad, VehicleTrial,
};
pub use transform::AABB3D;
