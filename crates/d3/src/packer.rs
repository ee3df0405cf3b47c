//! Greedy first-fit packing of a package list into one vehicle.

use crate::boundary::Vehicle;
use crate::geometry::Package;
use crate::pivot::candidate_pivots;
use nalgebra::Vector3;
use std::sync::Arc;
use u_loading_core::TOLERANCE;

/// Packages handled by one [`pack`] call, split by outcome.
#[derive(Debug, Clone, Default)]
pub struct PackOutcome {
    /// Packages loaded, in loading order.
    pub packed: Vec<Arc<Package>>,
    /// Packages left out, in the order they were rejected.
    pub unpacked: Vec<Arc<Package>>,
}

impl PackOutcome {
    /// Returns true if every offered package was loaded.
    pub fn all_packed(&self) -> bool {
        self.unpacked.is_empty()
    }
}

/// Returns `packages` in loading order: descending volume, then descending
/// weight. Ties keep their input order.
pub fn loading_order(packages: &[Arc<Package>]) -> Vec<Arc<Package>> {
    let mut ordered = packages.to_vec();
    ordered.sort_by(|a, b| {
        b.volume()
            .total_cmp(&a.volume())
            .then_with(|| b.weight().total_cmp(&a.weight()))
    });
    ordered
}

/// Loads as many of `packages` into `vehicle` as the greedy heuristic allows.
///
/// Packages are taken in [`loading_order`]. Each one is first screened
/// against the remaining payload and volume (within [`TOLERANCE`]), then anchored at the origin if
/// the vehicle is empty, or at the first free pivot where some orientation
/// fits. Earlier placements are never revisited. Rejected packages are
/// recorded on the vehicle as unpacked.
pub fn pack(vehicle: &mut Vehicle, packages: &[Arc<Package>]) -> PackOutcome {
    let mut outcome = PackOutcome::default();

    for package in loading_order(packages) {
        if vehicle.available_weight() < package.weight() - TOLERANCE
            || vehicle.available_volume() < package.volume() - TOLERANCE
        {
            vehicle.add_unpacked(Arc::clone(&package));
            outcome.unpacked.push(package);
            continue;
        }

        if place(vehicle, &package) {
            outcome.packed.push(package);
        } else {
            vehicle.add_unpacked(Arc::clone(&package));
            outcome.unpacked.push(package);
        }
    }

    log::debug!(
        "{}: packed {} of {} packages ({:.1} / {:.1} weight)",
        vehicle.name(),
        outcome.packed.len(),
        packages.len(),
        vehicle.loaded_weight(),
        vehicle.weight_limit()
    );

    outcome
}

/// Finds the first anchor where `package` fits and loads it there.
fn place(vehicle: &mut Vehicle, package: &Arc<Package>) -> bool {
    if vehicle.packed_packages().is_empty() {
        return vehicle.try_place(package, Vector3::zeros()).is_some();
    }

    for pivot in candidate_pivots(vehicle) {
        if vehicle.is_pivot_occupied(&pivot) {
            continue;
        }
        if vehicle.try_place(package, pivot).is_some() {
            return true;
        }
    }

    false
}
