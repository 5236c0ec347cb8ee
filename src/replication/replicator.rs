// Transform application engine: holds the fixed center and transform list and maps
// one block edit to the positions of all its symmetric copies.

use std::sync::Arc;

use log::info;
use nalgebra::Vector3;

use crate::config::{BLOCK_CENTER_OFFSET, CENTER_GRID};
use crate::symmetries::{build_transforms, SymmetrySpec, Transform};
use crate::world::{block_containing, BlockPos};

/// Snap a position to the nearest point of the half-integer grid (ties to even)
pub fn snap_center(position: &Vector3<f64>) -> Vector3<f64> {
    position.map(|c| CENTER_GRID * (c / CENTER_GRID).round_ties_even())
}

/// Immutable center and transform list for one session.
#[derive(Debug, Clone)]
pub struct Replicator {
    center: Vector3<f64>,
    transforms: Vec<Arc<Transform>>,
}

impl Replicator {
    /// Build the transform list of `spec` about an already snapped `center`
    pub fn new(center: Vector3<f64>, spec: &SymmetrySpec) -> Self {
        let transforms = build_transforms(center, spec);
        Self { center, transforms }
    }

    /// Center the symmetry on the player, snapped to the half-integer grid
    pub fn from_player_position(position: &Vector3<f64>, spec: &SymmetrySpec) -> Self {
        let center = snap_center(position);
        info!(
            "Center of symmetry at ({}, {}, {})",
            center.x, center.y, center.z
        );
        Self::new(center, spec)
    }

    pub fn center(&self) -> &Vector3<f64> {
        &self.center
    }

    pub fn transforms(&self) -> &[Arc<Transform>] {
        &self.transforms
    }

    /// Number of blocks drawn per edit, including the edit itself
    pub fn copy_count(&self) -> usize {
        1 + self.transforms.len()
    }

    /// Images of the block whose corner is `point`, evaluated at the block center
    pub fn replicate(&self, point: &Vector3<f64>) -> Vec<Vector3<f64>> {
        let centered = point.add_scalar(BLOCK_CENTER_OFFSET);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.transforms
                .par_iter()
                .map(|t| t.apply(&centered))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.transforms.iter().map(|t| t.apply(&centered)).collect()
        }
    }

    /// Blocks holding the symmetric copies of `block`
    pub fn replicate_block(&self, block: &BlockPos) -> Vec<BlockPos> {
        self.replicate(&block.map(f64::from))
            .iter()
            .map(block_containing)
            .collect()
    }
}
