//! Packages: the cuboids to be loaded.

use nalgebra::Vector3;
use u_loading_core::geometry::Dimensions;
use u_loading_core::{Error, Result};

/// A rectangular package with a fixed size and weight.
///
/// Packages are immutable once created; where a package ends up is recorded
/// by the vehicle that loads it (see [`crate::boundary::PlacedPackage`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Name used in reports.
    name: String,

    /// Intrinsic size (width, depth, height).
    dimensions: Dimensions,

    /// Weight of the package.
    weight: f64,
}

impl Package {
    /// Creates a package from width, depth (thickness), height and weight.
    pub fn new(name: impl Into<String>, width: f64, depth: f64, height: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Dimensions::new(width, depth, height),
            weight,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the intrinsic dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.width()
    }

    /// Returns the depth (thickness).
    pub fn depth(&self) -> f64 {
        self.dimensions.depth()
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.height()
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Returns the extent of the package in each of the six orientations,
    /// in trial order.
    pub fn orientations(&self) -> [Vector3<f64>; 6] {
        self.dimensions.orientations()
    }

    /// Checks that the dimensions are positive and the weight non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.dimensions.is_positive() {
            return Err(Error::InvalidPackage(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidPackage(format!(
                "Weight for '{}' cannot be negative",
                self.name
            )));
        }

        Ok(())
    }
}
