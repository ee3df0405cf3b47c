//! # U-Loading 3D
//!
//! Greedy 3D cargo packing for the U-Loading vehicle loading engine.
//!
//! This crate places box-shaped packages into box-shaped vehicles and picks,
//! per platform, either the best single vehicle or a combination of vehicles
//! for a package list.
//!
//! ## Features
//!
//! - Six axis-aligned orientations tried in a fixed order
//! - Corner pivots derived from already loaded packages
//! - First-fit loading by descending volume, then weight
//! - Payload and volume screening before any geometric test
//! - Best-single and distribute fleet modes
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use u_loading_d3::{Classifier, Fleet, Package, Vehicle};
//!
//! let mut fleet: Fleet = vec![
//!     Vehicle::new("Road", "Van", 2.0, 2.0, 2.0, 100.0),
//!     Vehicle::new("Road", "Truck", 4.0, 4.0, 4.0, 100.0),
//! ]
//! .into_iter()
//! .collect();
//! let packages: Vec<Arc<Package>> = (0..2)
//!     .map(|i| Arc::new(Package::new(format!("Box{}", i), 2.0, 2.0, 2.0, 1.0)))
//!     .collect();
//!
//! let report = Classifier::default_config().classify(&mut fleet, &packages);
//! assert!(report.platforms[0].all_packed());
//! ```

pub mod boundary;
pub mod classifier;
pub mod geometry;
pub mod packer;
pub mod pivot;

// Re-exports
pub use boundary::{PlacedPackage, Vehicle};
pub use classifier::{Classifier, Fleet};
pub use geometry::Package;
pub use packer::{loading_order, pack, PackOutcome};
pub use pivot::candidate_pivots;
pub use u_loading_core::{Config, Error, LoadMode, LoadReport, Orientation, Result};
