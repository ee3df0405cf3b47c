//! Integration tests for u-loading-core.

use nalgebra::Vector3;
use u_loading_core::config::{Config, LoadMode};
use u_loading_core::geometry::{Dimensions, Orientation};
use u_loading_core::placement::Placement;
use u_loading_core::result::{packed_fraction, PlatformOutcome, PlatformReport, VehicleLoad, VehicleTrial};
use u_loading_core::transform::AABB3D;

mod orientation_tests {
    use super::*;

    #[test]
    fn test_oriented_boxes_share_volume() {
        let dims = Dimensions::new(2.0, 3.0, 7.0);
        for orientation in Orientation::ALL {
            let extent = orientation.apply(&dims);
            let aabb = AABB3D::from_origin_and_extent(&Vector3::zeros(), &extent);
            assert!((aabb.volume() - dims.volume()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_cube_orientations_identical() {
        let dims = Dimensions::new(4.0, 4.0, 4.0);
        let first = dims.orientations()[0];
        assert!(dims.orientations().iter().all(|e| *e == first));
    }
}

mod report_tests {
    use super::*;

    fn load(vehicle: &str, packed: &[&str]) -> VehicleLoad {
        VehicleLoad {
            platform: "Road".to_string(),
            vehicle: vehicle.to_string(),
            vehicle_volume: 64.0,
            weight_limit: 10.0,
            placements: packed
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Placement::new(
                        *name,
                        [i as f64, 0.0, 0.0],
                        [1.0, 1.0, 1.0],
                        Orientation::Wdh,
                        1.0,
                    )
                })
                .collect(),
            unpacked: Vec::new(),
            loaded_weight: packed.len() as f64,
        }
    }

    #[test]
    fn test_best_single_percent() {
        let report = PlatformReport {
            platform: "Road".to_string(),
            total_packages: 3,
            outcome: PlatformOutcome::BestSingle {
                chosen: load("Van", &["a", "b"]),
                packed_fraction: packed_fraction(2, 3),
                trials: vec![VehicleTrial {
                    vehicle: "Van".to_string(),
                    packed_fraction: packed_fraction(2, 3),
                }],
            },
        };

        assert_eq!(report.packed_count(), 2);
        assert!((report.packed_percent() - 200.0 / 3.0).abs() < 1e-10);
        assert_eq!(report.loads()[0].packed_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_distribute_totals() {
        let report = PlatformReport {
            platform: "Road".to_string(),
            total_packages: 3,
            outcome: PlatformOutcome::Distribute {
                loads: vec![load("Van", &["a"]), load("Truck", &["b", "c"])],
                total_packed: 3,
            },
        };

        assert!(report.all_packed());
        let vehicles: Vec<&str> = report.loads().iter().map(|l| l.vehicle.as_str()).collect();
        assert_eq!(vehicles, vec!["Van", "Truck"]);
    }

    #[test]
    fn test_config_mode_flows_into_report() {
        let config = Config::new().with_mode(LoadMode::Distribute);
        let report = u_loading_core::LoadReport::new(config.mode);
        assert_eq!(report.mode, LoadMode::Distribute);
        assert!(report.platforms.is_empty());
    }
}
