//! Loading result representation.

use crate::config::LoadMode;
use crate::placement::Placement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Share of `total` represented by `packed`, in `[0, 1]`.
///
/// An empty package list yields `0.0`.
pub fn packed_fraction(packed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        packed as f64 / total as f64
    }
}

/// Snapshot of one vehicle after a packing run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleLoad {
    /// Platform the vehicle belongs to.
    pub platform: String,

    /// Vehicle name.
    pub vehicle: String,

    /// Interior volume of the vehicle.
    pub vehicle_volume: f64,

    /// Maximum payload of the vehicle.
    pub weight_limit: f64,

    /// Loaded packages, in loading order.
    pub placements: Vec<Placement>,

    /// Names of packages offered to the vehicle that were left behind.
    pub unpacked: Vec<String>,

    /// Total weight of the loaded packages.
    pub loaded_weight: f64,
}

impl VehicleLoad {
    /// Returns the number of loaded packages.
    pub fn packed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the names of loaded packages, in loading order.
    pub fn packed_names(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.package.as_str()).collect()
    }

    /// Returns the total volume of the loaded packages.
    pub fn loaded_volume(&self) -> f64 {
        self.placements.iter().map(Placement::volume).sum()
    }

    /// Loaded volume over vehicle volume (0.0 - 1.0).
    pub fn volume_utilization(&self) -> f64 {
        if self.vehicle_volume > 0.0 {
            self.loaded_volume() / self.vehicle_volume
        } else {
            0.0
        }
    }

    /// Loaded weight over weight limit (0.0 - 1.0).
    pub fn weight_utilization(&self) -> f64 {
        if self.weight_limit > 0.0 {
            self.loaded_weight / self.weight_limit
        } else {
            0.0
        }
    }
}

/// Score of one vehicle evaluated in best-single mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleTrial {
    /// Vehicle name.
    pub vehicle: String,
    /// Share of the full package list the vehicle carried.
    pub packed_fraction: f64,
}

/// What was decided for one platform.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlatformOutcome {
    /// The single vehicle carrying the largest share of packages.
    BestSingle {
        /// The winning vehicle.
        chosen: VehicleLoad,
        /// Share of the full package list it carries.
        packed_fraction: f64,
        /// Every vehicle evaluated, in evaluation order.
        trials: Vec<VehicleTrial>,
    },
    /// Packages spread over several vehicles.
    Distribute {
        /// Vehicles used, in loading order.
        loads: Vec<VehicleLoad>,
        /// Packages carried across all vehicles.
        total_packed: usize,
    },
}

/// Outcome for a single platform group.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlatformReport {
    /// Platform identifier.
    pub platform: String,
    /// Number of packages in the full demand.
    pub total_packages: usize,
    /// Decision for the platform.
    pub outcome: PlatformOutcome,
}

impl PlatformReport {
    /// Returns the number of packages carried.
    pub fn packed_count(&self) -> usize {
        match &self.outcome {
            PlatformOutcome::BestSingle { chosen, .. } => chosen.packed_count(),
            PlatformOutcome::Distribute { total_packed, .. } => *total_packed,
        }
    }

    /// Returns the carried share as a percentage (0 - 100).
    pub fn packed_percent(&self) -> f64 {
        packed_fraction(self.packed_count(), self.total_packages) * 100.0
    }

    /// Returns true if every package found a place.
    pub fn all_packed(&self) -> bool {
        self.packed_count() == self.total_packages
    }

    /// Returns the vehicle loads behind this outcome.
    pub fn loads(&self) -> Vec<&VehicleLoad> {
        match &self.outcome {
            PlatformOutcome::BestSingle { chosen, .. } => vec![chosen],
            PlatformOutcome::Distribute { loads, .. } => loads.iter().collect(),
        }
    }
}

/// Result of classifying a whole fleet.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadReport {
    /// Mode the report was produced with.
    pub mode: LoadMode,
    /// One entry per non-empty platform, in fleet order.
    pub platforms: Vec<PlatformReport>,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl LoadReport {
    /// Creates an empty report for `mode`.
    pub fn new(mode: LoadMode) -> Self {
        Self {
            mode,
            platforms: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Finds the report for a platform.
    pub fn platform(&self, platform: &str) -> Option<&PlatformReport> {
        self.platforms.iter().find(|p| p.platform == platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use approx::assert_relative_eq;

    fn load(names: &[&str]) -> VehicleLoad {
        VehicleLoad {
            platform: "P1".to_string(),
            vehicle: "V1".to_string(),
            vehicle_volume: 1000.0,
            weight_limit: 50.0,
            placements: names
                .iter()
                .map(|n| Placement::new(*n, [0.0; 3], [1.0, 2.0, 5.0], Orientation::Wdh, 5.0))
                .collect(),
            unpacked: Vec::new(),
            loaded_weight: 5.0 * names.len() as f64,
        }
    }

    #[test]
    fn test_packed_fraction_empty_demand() {
        assert_eq!(packed_fraction(0, 0), 0.0);
        assert_relative_eq!(packed_fraction(1, 4), 0.25);
    }

    #[test]
    fn test_vehicle_load_metrics() {
        let load = load(&["a", "b"]);
        assert_eq!(load.packed_count(), 2);
        assert_eq!(load.packed_names(), vec!["a", "b"]);
        assert_relative_eq!(load.loaded_volume(), 20.0);
        assert_relative_eq!(load.volume_utilization(), 0.02);
        assert_relative_eq!(load.weight_utilization(), 0.2);
    }

    #[test]
    fn test_zero_capacity_utilization() {
        let load = VehicleLoad::default();
        assert_eq!(load.volume_utilization(), 0.0);
        assert_eq!(load.weight_utilization(), 0.0);
    }

    #[test]
    fn test_platform_report_percent() {
        let report = PlatformReport {
            platform: "P1".to_string(),
            total_packages: 4,
            outcome: PlatformOutcome::Distribute {
                loads: vec![load(&["a"]), load(&["b", "c"])],
                total_packed: 3,
            },
        };
        assert_relative_eq!(report.packed_percent(), 75.0);
        assert!(!report.all_packed());
        assert_eq!(report.loads().len(), 2);
    }

    #[test]
    fn test_report_lookup() {
        let mut report = LoadReport::new(LoadMode::BestSingle);
        report.platforms.push(PlatformReport {
            platform: "Road".to_string(),
            total_packages: 0,
            outcome: PlatformOutcome::BestSingle {
                chosen: load(&[]),
                packed_fraction: 0.0,
                trials: Vec::new(),
            },
        });
        assert!(report.platform("Road").is_some());
        assert!(report.platform("Rail").is_none());
        assert_eq!(report.platforms[0].packed_percent(), 0.0);
    }
}
