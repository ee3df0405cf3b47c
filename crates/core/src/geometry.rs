//! Cuboid shapes and the six axis-aligned orientations.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slack used for every geometric comparison (bounds, overlap, pivot match).
pub const TOLERANCE: f64 = 1e-9;

/// One of the six ways to lay a cuboid's intrinsic dimensions onto the
/// x, y and z axes of a vehicle.
///
/// The declaration order is the trial order used during placement, and
/// [`Orientation::index`] is what gets reported for a loaded package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// (width, depth, height): unrotated.
    #[default]
    Wdh,
    /// (width, height, depth).
    Whd,
    /// (depth, height, width).
    Dhw,
    /// (depth, width, height).
    Dwh,
    /// (height, width, depth).
    Hwd,
    /// (height, depth, width).
    Hdw,
}

impl Orientation {
    /// All orientations in trial order.
    pub const ALL: [Orientation; 6] = [
        Orientation::Wdh,
        Orientation::Whd,
        Orientation::Dhw,
        Orientation::Dwh,
        Orientation::Hwd,
        Orientation::Hdw,
    ];

    /// Returns the stable index (0-5) of this orientation.
    pub fn index(self) -> usize {
        match self {
            Orientation::Wdh => 0,
            Orientation::Whd => 1,
            Orientation::Dhw => 2,
            Orientation::Dwh => 3,
            Orientation::Hwd => 4,
            Orientation::Hdw => 5,
        }
    }

    /// Looks up an orientation by its index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Intrinsic axis (0 = width, 1 = depth, 2 = height) laid on x, y and z.
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Orientation::Wdh => (0, 1, 2),
            Orientation::Whd => (0, 2, 1),
            Orientation::Dhw => (1, 2, 0),
            Orientation::Dwh => (1, 0, 2),
            Orientation::Hwd => (2, 0, 1),
            Orientation::Hdw => (2, 1, 0),
        }
    }

    /// Returns the extent of `dimensions` along x, y and z in this orientation.
    pub fn apply(self, dimensions: &Dimensions) -> Vector3<f64> {
        let (x, y, z) = self.axes();
        let extent = dimensions.extent();
        Vector3::new(extent[x], extent[y], extent[z])
    }
}

/// Intrinsic size of a cuboid.
///
/// Shared by packages and vehicles; the volume is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    extent: Vector3<f64>,
    volume: f64,
}

impl Dimensions {
    /// Creates dimensions from width, depth (thickness) and height.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            extent: Vector3::new(width, depth, height),
            volume: width * depth * height,
        }
    }

    /// Returns the width (axis 0).
    pub fn width(&self) -> f64 {
        self.extent.x
    }

    /// Returns the depth, a.k.a. thickness (axis 1).
    pub fn depth(&self) -> f64 {
        self.extent.y
    }

    /// Returns the height (axis 2).
    pub fn height(&self) -> f64 {
        self.extent.z
    }

    /// Returns (width, depth, height) as a vector.
    pub fn extent(&self) -> Vector3<f64> {
        self.extent
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the extent in every orientation, in [`Orientation::ALL`] order.
    pub fn orientations(&self) -> [Vector3<f64>; 6] {
        Orientation::ALL.map(|orientation| orientation.apply(self))
    }

    /// Returns true if every dimension is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.extent.iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume_fixed_at_creation() {
        let dims = Dimensions::new(2.0, 3.0, 4.0);
        assert_relative_eq!(dims.volume(), 24.0);
    }

    #[test]
    fn test_orientation_table() {
        let dims = Dimensions::new(1.0, 2.0, 3.0);
        let extents: Vec<(f64, f64, f64)> = dims
            .orientations()
            .iter()
            .map(|e| (e.x, e.y, e.z))
            .collect();

        assert_eq!(
            extents,
            vec![
                (1.0, 2.0, 3.0),
                (1.0, 3.0, 2.0),
                (2.0, 3.0, 1.0),
                (2.0, 1.0, 3.0),
                (3.0, 1.0, 2.0),
                (3.0, 2.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_orientations_are_permutations() {
        let dims = Dimensions::new(7.0, 5.0, 11.0);
        for extent in dims.orientations() {
            let mut sorted = [extent.x, extent.y, extent.z];
            sorted.sort_by(f64::total_cmp);
            assert_eq!(sorted, [5.0, 7.0, 11.0]);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, orientation) in Orientation::ALL.iter().enumerate() {
            assert_eq!(orientation.index(), i);
            assert_eq!(Orientation::from_index(i), Some(*orientation));
        }
        assert_eq!(Orientation::from_index(6), None);
        assert_eq!(Orientation::default(), Orientation::Wdh);
    }

    #[test]
    fn test_positive_dimensions() {
        assert!(Dimensions::new(1.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(0.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, -2.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, 1.0, f64::NAN).is_positive());
    }
}
