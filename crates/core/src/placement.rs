//! Placement records for loaded packages.

use crate::geometry::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where and how a package ended up inside a vehicle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Name of the placed package.
    pub package: String,

    /// Minimum corner (x, y, z) of the package inside the vehicle.
    pub position: [f64; 3],

    /// Extent along x, y, z after the orientation is applied.
    pub extent: [f64; 3],

    /// Orientation used.
    pub orientation: Orientation,

    /// Package weight.
    pub weight: f64,
}

impl Placement {
    /// Creates a new placement record.
    pub fn new(
        package: impl Into<String>,
        position: [f64; 3],
        extent: [f64; 3],
        orientation: Orientation,
        weight: f64,
    ) -> Self {
        Self {
            package: package.into(),
            position,
            extent,
            orientation,
            weight,
        }
    }

    /// Returns the maximum corner of the placed package.
    pub fn max_corner(&self) -> [f64; 3] {
        [
            self.position[0] + self.extent[0],
            self.position[1] + self.extent[1],
            self.position[2] + self.extent[2],
        ]
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.extent[0] * self.extent[1] * self.extent[2]
    }
}
