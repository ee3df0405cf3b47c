//! Axis-aligned bounding boxes.

use nalgebra::{RealField, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates the box spanned by `extent` from its minimum corner `origin`.
    pub fn from_origin_and_extent(origin: &Vector3<S>, extent: &Vector3<S>) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.z,
            origin.x + extent.x,
            origin.y + extent.y,
            origin.z + extent.z,
        )
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the depth (y dimension) of the AABB.
    pub fn depth(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the height (z dimension) of the AABB.
    pub fn height(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.depth() * self.height()
    }

    /// Checks whether the interiors of two boxes intersect.
    ///
    /// Boxes that only share a face, edge or corner do not overlap. The
    /// overlap on every axis must exceed `tolerance`.
    pub fn overlaps(&self, other: &Self, tolerance: S) -> bool {
        self.min_x < other.max_x - tolerance
            && other.min_x < self.max_x - tolerance
            && self.min_y < other.max_y - tolerance
            && other.min_y < self.max_y - tolerance
            && self.min_z < other.max_z - tolerance
            && other.min_z < self.max_z - tolerance
    }

    /// Checks whether `other` lies entirely inside this box (boundaries included).
    pub fn contains(&self, other: &Self, tolerance: S) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_y >= self.min_y - tolerance
            && other.min_z >= self.min_z - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_y <= self.max_y + tolerance
            && other.max_z <= self.max_z + tolerance
    }
}
