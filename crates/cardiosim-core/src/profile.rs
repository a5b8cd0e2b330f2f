//! Axisymmetric profile outlines.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Anatomical segment selector for segmented devices.
///
/// Only segmented device kinds interpret the selector; all others ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Far end of the device (e.g. pulmonary artery side).
    Distal,
    /// Central section.
    Middle,
    /// Near end of the device (e.g. right ventricle side).
    Proximal,
    /// The complete device as a single outline.
    Whole,
}

/// Ordered outline of a device's axisymmetric cross-section.
///
/// Points are `(radius, 0, axial)` in the device's local frame, with the
/// symmetry axis along +Z. Ordering defines the lofting path from one end
/// of the device to the other; consecutive duplicate points are legal and
/// are interpreted by the downstream curve-fitting stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    points: Vec<DVec3>,
}

impl Profile {
    /// Creates an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outline point at the given radius and axial position.
    pub fn push(&mut self, radius: f64, axial: f64) {
        self.points.push(DVec3::new(radius, 0.0, axial));
    }

    /// Returns the outline points in lofting order.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of outline points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the outline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the outline points in lofting order.
    pub fn iter(&self) -> impl Iterator<Item = &DVec3> {
        self.points.iter()
    }
}

impl IntoIterator for Profile {
    type Item = DVec3;
    type IntoIter = std::vec::IntoIter<DVec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
