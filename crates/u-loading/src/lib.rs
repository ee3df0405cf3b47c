//! # U-Loading
//!
//! Vehicle loading optimization: fit boxed packages into vehicles and pick
//! the vehicles of each platform that carry them.
//!
//! This crate provides:
//! - **3D Packing**: greedy pivot-based placement of packages in a vehicle
//! - **Fleet Classification**: best single vehicle or distribution over a fleet
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use u_loading::d3::{Classifier, Fleet, Package, Vehicle};
//! use u_loading::{Config, LoadMode};
//!
//! let mut fleet: Fleet = vec![
//!     Vehicle::new("Road", "Van", 4.0, 3.0, 2.0, 800.0),
//!     Vehicle::new("Road", "Truck", 8.0, 3.0, 3.0, 3500.0),
//! ]
//! .into_iter()
//! .collect();
//! let packages: Vec<Arc<Package>> = (0..6)
//!     .map(|i| Arc::new(Package::new(format!("box{}", i), 1.0, 1.0, 1.0, 10.0)))
//!     .collect();
//!
//! let classifier = Classifier::new(Config::new().with_mode(LoadMode::BestSingle));
//! let report = classifier.classify(&mut fleet, &packages);
//! assert!(report.platform("Road").unwrap().all_packed());
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): 3D packing and fleet classification
//! - `serde`: Serialization support

/// Core types: configuration, geometry and reports.
pub use u_loading_core as core;

/// 3D packing and fleet classification.
#[cfg(feature = "d3")]
pub use u_loading_d3 as d3;

// Re-export commonly used types at root level
pub use u_loading_core::{
    Config, Dimensions, Error, LoadMode, LoadReport, Orientation, Placement, PlatformOutcome,
    PlatformReport, Result, VehicleLoad,
};
