//! Vehicles: the containers packages are loaded into.

use crate::geometry::Package;
use nalgebra::Vector3;
use std::sync::Arc;
use u_loading_core::geometry::{Dimensions, Orientation, TOLERANCE};
use u_loading_core::result::VehicleLoad;
use u_loading_core::transform::AABB3D;
use u_loading_core::{Error, Placement, Result};

/// A package fixed at an anchor inside a vehicle.
#[derive(Debug, Clone)]
pub struct PlacedPackage {
    package: Arc<Package>,
    orientation: Orientation,
    position: Vector3<f64>,
}

impl PlacedPackage {
    /// Returns the loaded package.
    pub fn package(&self) -> &Arc<Package> {
        &self.package
    }

    /// Returns the orientation the package was loaded in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the minimum corner.
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    /// Returns the extent along x, y, z after orientation.
    pub fn extent(&self) -> Vector3<f64> {
        self.orientation.apply(self.package.dimensions())
    }

    /// Returns the max corner of the package.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.extent()
    }

    /// Returns the occupied box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin_and_extent(&self.position, &self.extent())
    }

    /// Checks if this package's interior intersects `other`.
    pub fn overlaps(&self, other: &AABB3D<f64>) -> bool {
        self.aabb().overlaps(other, TOLERANCE)
    }

    /// Converts to a report record.
    pub fn to_placement(&self) -> Placement {
        let extent = self.extent();
        Placement::new(
            self.package.name(),
            [self.position.x, self.position.y, self.position.z],
            [extent.x, extent.y, extent.z],
            self.orientation,
            self.package.weight(),
        )
    }
}

/// A vehicle with an interior envelope, a payload limit and its current load.
///
/// The loading state (packed and unpacked packages, loaded weight, occupied
/// pivots) is reset by [`Vehicle::clear`]; size, limit and platform never change.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Platform (group) identifier.
    platform: String,

    /// Vehicle name.
    name: String,

    /// Interior size (width, depth, height).
    dimensions: Dimensions,

    /// Maximum total package weight.
    weight_limit: f64,

    /// Packages loaded so far, in loading order.
    packed: Vec<PlacedPackage>,

    /// Packages that were offered but not loaded.
    unpacked: Vec<Arc<Package>>,

    /// Sum of loaded package weights.
    loaded_weight: f64,

    /// Anchors already taken by a successful placement.
    occupied_pivots: Vec<Vector3<f64>>,
}

impl Vehicle {
    /// Creates an empty vehicle.
    pub fn new(
        platform: impl Into<String>,
        name: impl Into<String>,
        width: f64,
        depth: f64,
        height: f64,
        weight_limit: f64,
    ) -> Self {
        Self {
            platform: platform.into(),
            name: name.into(),
            dimensions: Dimensions::new(width, depth, height),
            weight_limit,
            packed: Vec::new(),
            unpacked: Vec::new(),
            loaded_weight: 0.0,
            occupied_pivots: Vec::new(),
        }
    }

    /// Returns the platform identifier.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the interior dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the interior volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Returns the weight limit.
    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    /// Returns the loaded packages, in loading order.
    pub fn packed_packages(&self) -> &[PlacedPackage] {
        &self.packed
    }

    /// Returns the packages left out, in rejection order.
    pub fn unpacked_packages(&self) -> &[Arc<Package>] {
        &self.unpacked
    }

    /// Returns the anchors already used by a placement.
    pub fn occupied_pivots(&self) -> &[Vector3<f64>] {
        &self.occupied_pivots
    }

    /// Returns the loaded weight.
    pub fn loaded_weight(&self) -> f64 {
        self.loaded_weight
    }

    /// Returns the remaining payload.
    pub fn available_weight(&self) -> f64 {
        self.weight_limit - self.loaded_weight
    }

    /// Returns the total volume of the loaded packages.
    pub fn packed_volume(&self) -> f64 {
        self.packed.iter().map(|p| p.package.volume()).sum()
    }

    /// Returns the volume not yet taken by packages.
    pub fn available_volume(&self) -> f64 {
        self.volume() - self.packed_volume()
    }

    /// Returns true if `pivot` matches an anchor already used.
    pub fn is_pivot_occupied(&self, pivot: &Vector3<f64>) -> bool {
        self.occupied_pivots
            .iter()
            .any(|p| (p - pivot).amax() <= TOLERANCE)
    }

    /// Records a package that could not be loaded.
    pub fn add_unpacked(&mut self, package: Arc<Package>) {
        self.unpacked.push(package);
    }

    /// Empties the vehicle so it can be loaded again.
    pub fn clear(&mut self) {
        self.packed.clear();
        self.unpacked.clear();
        self.loaded_weight = 0.0;
        self.occupied_pivots.clear();
    }

    /// Returns the interior as a box anchored at the origin.
    pub fn envelope(&self) -> AABB3D<f64> {
        AABB3D::from_origin_and_extent(&Vector3::zeros(), &self.dimensions.extent())
    }

    /// Checks whether a box of `extent` anchored at `anchor` stays inside the
    /// vehicle and clears every loaded package.
    pub fn fits(&self, extent: &Vector3<f64>, anchor: &Vector3<f64>) -> bool {
        let candidate = AABB3D::from_origin_and_extent(anchor, extent);
        if !self.envelope().contains(&candidate, TOLERANCE) {
            return false;
        }

        !self.packed.iter().any(|placed| placed.overlaps(&candidate))
    }

    /// Tries to load `package` with its minimum corner at `anchor`.
    ///
    /// Orientations are tried in [`Orientation::ALL`] order and the first one
    /// that fits is kept. On success the package is appended to the load and
    /// the anchor is marked occupied. On failure nothing changes.
    ///
    /// Payload is not checked here; [`crate::packer::pack`] filters
    /// by weight before any geometric test.
    pub fn try_place(&mut self, package: &Arc<Package>, anchor: Vector3<f64>) -> Option<Orientation> {
        let orientation = Orientation::ALL
            .into_iter()
            .find(|o| self.fits(&o.apply(package.dimensions()), &anchor))?;

        self.occupied_pivots.push(anchor);
        self.loaded_weight += package.weight();
        self.packed.push(PlacedPackage {
            package: Arc::clone(package),
            orientation,
            position: anchor,
        });

        Some(orientation)
    }

    /// Takes a report snapshot of the current load.
    pub fn to_load(&self) -> VehicleLoad {
        VehicleLoad {
            platform: self.platform.clone(),
            vehicle: self.name.clone(),
            vehicle_volume: self.volume(),
            weight_limit: self.weight_limit,
            placements: self.packed.iter().map(PlacedPackage::to_placement).collect(),
            unpacked: self.unpacked.iter().map(|p| p.name().to_string()).collect(),
            loaded_weight: self.loaded_weight,
        }
    }

    /// Checks that the dimensions are positive and the weight limit non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.dimensions.is_positive() {
            return Err(Error::InvalidVehicle(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !self.weight_limit.is_finite() || self.weight_limit < 0.0 {
            return Err(Error::InvalidVehicle(format!(
                "Weight limit for '{}' cannot be negative",
                self.name
            )));
        }

        Ok(())
    }
}
