// Transform values: point maps built from closure elements and translation repeats
// Composites share their parts through `Arc`, so a long fan-out list stays cheap to build.

use std::sync::Arc;

use nalgebra::{Matrix3, Vector3};

/// A point map on world coordinates.
///
/// Transforms are immutable once built and are evaluated recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// `p -> center + matrix * (p - center)`
    Linear {
        center: Vector3<f64>,
        matrix: Matrix3<i8>,
    },
    /// `p -> p + offset`
    Translate(Vector3<f64>),
    /// `p -> then(first(p))`
    Compose {
        first: Arc<Transform>,
        then: Arc<Transform>,
    },
}

impl Transform {
    pub fn linear(center: Vector3<f64>, matrix: Matrix3<i8>) -> Self {
        Transform::Linear { center, matrix }
    }

    pub fn translate(offset: Vector3<f64>) -> Self {
        Transform::Translate(offset)
    }

    /// Apply `first`, then `then`
    pub fn compose(first: Arc<Transform>, then: Arc<Transform>) -> Self {
        Transform::Compose { first, then }
    }

    /// Apply the transform to a point
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Transform::Linear { center, matrix } => {
                let matrix_f64 = matrix.map(f64::from);
                center + matrix_f64 * (point - center)
            }
            Transform::Translate(offset) => point + offset,
            Transform::Compose { first, then } => then.apply(&first.apply(point)),
        }
    }

    /// Sum of all translation offsets contained in this transform
    ///
    /// For the transforms built by the closure engine (a linear part followed by
    /// translations) this is exactly how far the center of symmetry is moved.
    pub fn translation_part(&self) -> Vector3<f64> {
        match self {
            Transform::Linear { .. } => Vector3::zeros(),
            Transform::Translate(offset) => *offset,
            Transform::Compose { first, then } => {
                first.translation_part() + then.translation_part()
            }
        }
    }

    /// Check whether this is an explicit identity matrix or a zero shift
    pub fn is_identity(&self) -> bool {
        match self {
            Transform::Linear { matrix, .. } => *matrix == Matrix3::identity(),
            Transform::Translate(offset) => offset.iter().all(|&c| c == 0.0),
            Transform::Compose { first, then } => first.is_identity() && then.is_identity(),
        }
    }
}
