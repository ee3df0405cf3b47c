//! Input dataset: a fleet of vehicles plus the packages to load.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use u_loading_d3::{Fleet, Package, Vehicle};

/// Summary of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Number of platforms
    pub platforms: usize,
    /// Number of vehicles across platforms
    pub vehicles: usize,
    /// Number of packages
    pub packages: usize,
    /// Sum of package weights
    pub total_weight: f64,
    /// Sum of package volumes
    pub total_volume: f64,
}

/// A parsed loading problem.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Vehicles grouped by platform
    pub fleet: Fleet,
    /// Packages to load
    pub packages: Vec<Arc<Package>>,
}

impl Dataset {
    /// Creates a dataset from its parts.
    pub fn new(fleet: Fleet, packages: Vec<Arc<Package>>) -> Self {
        Self { fleet, packages }
    }

    /// Vehicles used when no vehicle file is given.
    pub fn demo_fleet() -> Fleet {
        vec![
            Vehicle::new("Platform1", "Vehicle1", 10.0, 10.0, 10.0, 50.0),
            Vehicle::new("Platform1", "Vehicle2", 15.0, 15.0, 15.0, 75.0),
        ]
        .into_iter()
        .collect()
    }

    /// Packages used when no package file is given.
    pub fn demo_packages() -> Vec<Arc<Package>> {
        (0..10)
            .map(|i| Arc::new(Package::new(format!("Package{}", i), 1.0, 1.0, 1.0, 1.0)))
            .collect()
    }

    /// The built-in demo problem.
    pub fn demo() -> Self {
        Self::new(Self::demo_fleet(), Self::demo_packages())
    }

    /// Returns dataset information.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            platforms: self.fleet.len(),
            vehicles: self.fleet.vehicle_count(),
            packages: self.packages.len(),
            total_weight: self.packages.iter().map(|p| p.weight()).sum(),
            total_volume: self.packages.iter().map(|p| p.volume()).sum(),
        }
    }
}
