//! Pivot generation for the greedy packer.
//!
//! A pivot is a candidate anchor (minimum corner) for the next package.
//! Every loaded package offers three pivots, one just past its far face on
//! each axis:
//!
//! ```text
//!   (max_x, y, z)   bottom rear right
//!   (x, max_y, z)   bottom front left
//!   (x, y, max_z)   top rear left
//! ```
//!
//! This is the corner-point scheme of Dube & Kanavathy (2006),
//! "Optimizing Three-Dimensional Bin Packing Through Simulation".

use crate::boundary::Vehicle;
use nalgebra::Vector3;
use std::cmp::Ordering;
use u_loading_core::geometry::TOLERANCE;

/// Compares points lexicographically on (x, y, z).
fn lexicographic(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

/// Returns the distinct pivots offered by the packages loaded in `vehicle`,
/// in ascending (x, y, z) order.
///
/// An empty vehicle yields no pivots; the packer anchors the first package
/// at the origin itself.
pub fn candidate_pivots(vehicle: &Vehicle) -> Vec<Vector3<f64>> {
    let mut pivots: Vec<Vector3<f64>> = Vec::with_capacity(vehicle.packed_packages().len() * 3);

    for placed in vehicle.packed_packages() {
        let origin = placed.position();
        let far = placed.max_corner();
        pivots.push(Vector3::new(far.x, origin.y, origin.z));
        pivots.push(Vector3::new(origin.x, far.y, origin.z));
        pivots.push(Vector3::new(origin.x, origin.y, far.z));
    }

    pivots.sort_by(lexicographic);
    pivots.dedup_by(|a, b| (*a - *b).amax() <= TOLERANCE);
    pivots
}
