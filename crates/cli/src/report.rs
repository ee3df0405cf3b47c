//! Console, list-file and JSON output for a [`LoadReport`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use u_loading_core::{LoadMode, LoadReport, PlatformOutcome};

/// Renders the console summary of a report.
pub fn render_text(report: &LoadReport) -> String {
    let mut out = match report.mode {
        LoadMode::BestSingle => "Smallest vehicle that accommodates the maximum load:\n",
        LoadMode::Distribute => "Best combination of vehicles that accommodates the maximum load:\n",
    }
    .to_string();

    for platform in &report.platforms {
        match &platform.outcome {
            PlatformOutcome::BestSingle { chosen, .. } => {
                out.push_str(&format!(
                    "{} | {} | Packages accommodated: {:.2}%\n",
                    platform.platform,
                    chosen.vehicle,
                    platform.packed_percent()
                ));
            }
            PlatformOutcome::Distribute { loads, total_packed } => {
                out.push_str(&format!(
                    "{}: {} packages occupied\n",
                    platform.platform, total_packed
                ));
                for load in loads {
                    out.push_str(&format!(
                        "{} | Packages Occupied: {}\n",
                        load.vehicle,
                        load.packed_count()
                    ));
                }
            }
        }
    }

    out
}

/// Writes one package list file per platform into `dir`.
///
/// Returns the paths written, in platform order.
pub fn write_lists(report: &LoadReport, dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(report.platforms.len());

    for platform in &report.platforms {
        let (path, body) = match &platform.outcome {
            PlatformOutcome::BestSingle { chosen, .. } => {
                let mut body = format!("{} = {}\n", platform.platform, chosen.vehicle);
                for name in chosen.packed_names() {
                    body.push_str(name);
                    body.push('\n');
                }
                (
                    dir.join(format!("best_individual_vehicle_{}.txt", platform.platform)),
                    body,
                )
            }
            PlatformOutcome::Distribute { loads, .. } => {
                let mut body = format!("{}:\n", platform.platform);
                for load in loads {
                    body.push_str(&load.vehicle);
                    body.push('\n');
                    for name in load.packed_names() {
                        body.push_str(name);
                        body.push('\n');
                    }
                }
                (
                    dir.join(format!("best_combination_{}.txt", platform.platform)),
                    body,
                )
            }
        };

        let mut file = fs::File::create(&path)?;
        file.write_all(body.as_bytes())?;
        log::debug!("wrote package list {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Saves the full report as pretty-printed JSON.
pub fn save_json(report: &LoadReport, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_loading_core::{Placement, PlatformReport, VehicleLoad, VehicleTrial};

    fn load(vehicle: &str, names: &[&str]) -> VehicleLoad {
        VehicleLoad {
            platform: "Road".into(),
            vehicle: vehicle.into(),
            vehicle_volume: 1000.0,
            weight_limit: 50.0,
            placements: names
                .iter()
                .map(|n| Placement::new(*n, [0.0; 3], [1.0; 3], Default::default(), 1.0))
                .collect(),
            unpacked: Vec::new(),
            loaded_weight: names.len() as f64,
        }
    }

    fn best_single_report() -> LoadReport {
        let mut report = LoadReport::new(LoadMode::BestSingle);
        report.platforms.push(PlatformReport {
            platform: "Road".into(),
            total_packages: 4,
            outcome: PlatformOutcome::BestSingle {
                chosen: load("Van", &["a", "b", "c"]),
                packed_fraction: 0.75,
                trials: vec![VehicleTrial {
                    vehicle: "Van".into(),
                    packed_fraction: 0.75,
                }],
            },
        });
        report
    }

    fn distribute_report() -> LoadReport {
        let mut report = LoadReport::new(LoadMode::Distribute);
        report.platforms.push(PlatformReport {
            platform: "Road".into(),
            total_packages: 3,
            outcome: PlatformOutcome::Distribute {
                loads: vec![load("Van", &["a", "b"]), load("Truck", &["c"])],
                total_packed: 3,
            },
        });
        report
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("u-loading-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_best_single() {
        let text = render_text(&best_single_report());
        assert_eq!(
            text,
            "Smallest vehicle that accommodates the maximum load:\n\
             Road | Van | Packages accommodated: 75.00%\n"
        );
    }

    #[test]
    fn test_render_distribute() {
        let text = render_text(&distribute_report());
        assert_eq!(
            text,
            "Best combination of vehicles that accommodates the maximum load:\n\
             Road: 3 packages occupied\n\
             Van | Packages Occupied: 2\n\
             Truck | Packages Occupied: 1\n"
        );
    }

    #[test]
    fn test_write_best_single_list() {
        let dir = scratch_dir("single");
        let paths = write_lists(&best_single_report(), &dir).unwrap();

        assert_eq!(paths, vec![dir.join("best_individual_vehicle_Road.txt")]);
        let body = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(body, "Road = Van\na\nb\nc\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_distribute_list() {
        let dir = scratch_dir("dist");
        let paths = write_lists(&distribute_report(), &dir).unwrap();

        let body = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(body, "Road:\nVan\na\nb\nTruck\nc\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_json() {
        let dir = scratch_dir("json");
        let path = dir.join("report.json");
        save_json(&distribute_report(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["mode"], "Distribute");
        assert_eq!(value["platforms"][0]["platform"], "Road");
        fs::remove_dir_all(&dir).unwrap();
    }
}
