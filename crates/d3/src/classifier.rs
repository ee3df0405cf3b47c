//! Fleet classification: choosing vehicles for a package list per platform.

use crate::boundary::Vehicle;
use crate::geometry::Package;
use crate::packer::pack;
use std::sync::Arc;
use std::time::Instant;
use u_loading_core::config::{Config, LoadMode};
use u_loading_core::result::{
    packed_fraction, LoadReport, PlatformOutcome, PlatformReport, VehicleTrial,
};
use u_loading_core::Result;

/// Vehicles grouped by platform, in first-seen platform order.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    groups: Vec<(String, Vec<Vehicle>)>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vehicle to the group named by its platform.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        match self
            .groups
            .iter_mut()
            .find(|(platform, _)| platform == vehicle.platform())
        {
            Some((_, vehicles)) => vehicles.push(vehicle),
            None => self
                .groups
                .push((vehicle.platform().to_string(), vec![vehicle])),
        }
    }

    /// Registers a platform without vehicles.
    pub fn add_platform(&mut self, platform: impl Into<String>) {
        let platform = platform.into();
        if !self.groups.iter().any(|(p, _)| *p == platform) {
            self.groups.push((platform, Vec::new()));
        }
    }

    /// Returns the vehicles of `platform`.
    pub fn platform(&self, platform: &str) -> Option<&[Vehicle]> {
        self.groups
            .iter()
            .find(|(p, _)| p == platform)
            .map(|(_, vehicles)| vehicles.as_slice())
    }

    /// Iterates over (platform, vehicles) pairs.
    pub fn platforms(&self) -> impl Iterator<Item = (&str, &[Vehicle])> {
        self.groups
            .iter()
            .map(|(p, vehicles)| (p.as_str(), vehicles.as_slice()))
    }

    /// Returns the number of platforms.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the fleet has no platforms.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of vehicles across all platforms.
    pub fn vehicle_count(&self) -> usize {
        self.groups.iter().map(|(_, vehicles)| vehicles.len()).sum()
    }

    /// Validates every vehicle.
    pub fn validate(&self) -> Result<()> {
        self.groups
            .iter()
            .flat_map(|(_, vehicles)| vehicles)
            .try_for_each(Vehicle::validate)
    }
}

impl FromIterator<Vehicle> for Fleet {
    fn from_iter<I: IntoIterator<Item = Vehicle>>(iter: I) -> Self {
        let mut fleet = Fleet::new();
        for vehicle in iter {
            fleet.add_vehicle(vehicle);
        }
        fleet
    }
}

/// Drives the greedy packer over every platform of a fleet.
///
/// Within a platform, vehicles are tried smallest volume first (ties keep
/// fleet order). In [`LoadMode::BestSingle`] every vehicle is scored on its
/// own against the full package list; in [`LoadMode::Distribute`] each vehicle
/// receives the packages the previous one left behind.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a classifier with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classifies `packages` against every platform of `fleet`.
    ///
    /// Vehicles are sorted and reloaded in place, so after the call each
    /// vehicle holds the load of its last trial. Platforms without vehicles
    /// are skipped.
    pub fn classify(&self, fleet: &mut Fleet, packages: &[Arc<Package>]) -> LoadReport {
        let start = Instant::now();
        let mut report = LoadReport::new(self.config.mode);

        for (platform, vehicles) in fleet.groups.iter_mut() {
            if vehicles.is_empty() {
                log::warn!("Platform '{}' has no vehicles, skipping", platform);
                continue;
            }

            vehicles.sort_by(|a, b| a.volume().total_cmp(&b.volume()));

            let outcome = match self.config.mode {
                LoadMode::BestSingle => self.best_single(platform, vehicles, packages),
                LoadMode::Distribute => self.distribute(vehicles, packages),
            };

            report.platforms.push(PlatformReport {
                platform: platform.clone(),
                total_packages: packages.len(),
                outcome,
            });
        }

        report.computation_time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Classified {} packages over {} platforms in {} mode ({} ms)",
            packages.len(),
            report.platforms.len(),
            self.config.mode.name(),
            report.computation_time_ms
        );
        report
    }

    /// Scores each vehicle against the full package list and keeps the first
    /// one with the highest packed fraction.
    fn best_single(
        &self,
        platform: &str,
        vehicles: &mut [Vehicle],
        packages: &[Arc<Package>],
    ) -> PlatformOutcome {
        let mut trials = Vec::with_capacity(vehicles.len());
        let mut best: Option<(usize, f64)> = None;

        for (idx, vehicle) in vehicles.iter_mut().enumerate() {
            vehicle.clear();
            let outcome = pack(vehicle, packages);
            let fraction = packed_fraction(outcome.packed.len(), packages.len());

            trials.push(VehicleTrial {
                vehicle: vehicle.name().to_string(),
                packed_fraction: fraction,
            });

            if best.map_or(true, |(_, best_fraction)| fraction > best_fraction) {
                best = Some((idx, fraction));
            }

            if self.config.stop_when_full && outcome.packed.len() == packages.len() {
                log::info!(
                    "{}: '{}' carries all {} packages",
                    platform,
                    vehicle.name(),
                    packages.len()
                );
                break;
            }
        }

        // The loop runs at least once because the group is non-empty.
        let (idx, packed_fraction) = best.unwrap_or((0, 0.0));

        PlatformOutcome::BestSingle {
            chosen: vehicles[idx].to_load(),
            packed_fraction,
            trials,
        }
    }

    /// Passes the leftovers of each vehicle on to the next one.
    fn distribute(&self, vehicles: &mut [Vehicle], packages: &[Arc<Package>]) -> PlatformOutcome {
        let mut remaining = packages.to_vec();
        let mut loads = Vec::new();
        let mut total_packed = 0;

        for vehicle in vehicles.iter_mut() {
            vehicle.clear();
            let outcome = pack(vehicle, &remaining);
            total_packed += outcome.packed.len();
            loads.push(vehicle.to_load());

            remaining = outcome.unpacked;
            if remaining.is_empty() {
                break;
            }
        }

        if !remaining.is_empty() {
            log::debug!("{} packages left after all vehicles", remaining.len());
        }

        PlatformOutcome::Distribute {
            loads,
            total_packed,
        }
    }
}
