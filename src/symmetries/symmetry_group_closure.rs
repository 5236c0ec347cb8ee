// Group closure engine: closes the matrix generators under multiplication and
// expands the result with translation repeats into the final transform list.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use nalgebra::{Matrix3, Vector3};

use crate::symmetries::symmetry_generators::{SymmetrySpec, TranslationSpec};
use crate::symmetries::symmetry_transforms::Transform;

/// Close a generator set under multiplication.
///
/// Starting from the generators plus the identity, the set is repeatedly replaced
/// by all pairwise products of its elements until its size stops growing. The
/// returned group always contains the identity and is sorted by entries.
pub fn close_group(generators: &[Matrix3<i8>]) -> Vec<Matrix3<i8>> {
    let mut current: HashSet<Matrix3<i8>> = generators.iter().copied().collect();
    current.insert(Matrix3::identity());

    let mut passes = 0;
    loop {
        let next: HashSet<Matrix3<i8>> = current
            .iter()
            .flat_map(|a| current.iter().map(move |b| a * b))
            .collect();
        passes += 1;
        // The identity is in `current`, so `next` is a superset of it
        if next.len() <= current.len() {
            break;
        }
        current = next;
    }
    debug!("Group closure stabilised at order {} after {} pass(es)", current.len(), passes);

    let mut group: Vec<Matrix3<i8>> = current.into_iter().collect();
    sort_matrices(&mut group);
    group
}

/// Closure of the generators with the identity removed
pub fn non_identity_elements(generators: &[Matrix3<i8>]) -> Vec<Matrix3<i8>> {
    let identity = Matrix3::identity();
    close_group(generators)
        .into_iter()
        .filter(|m| *m != identity)
        .collect()
}

/// Build every transform generated by `spec` about `center`.
///
/// Each non-identity closure element becomes a linear map about the center. Then,
/// for each translation repeat in order, the list grows by `count - 1` pure shifts
/// plus one shifted copy of every transform present before that repeat was processed.
pub fn build_transforms(center: Vector3<f64>, spec: &SymmetrySpec) -> Vec<Arc<Transform>> {
    let matrices = non_identity_elements(&spec.generator_matrices());
    info!(
        "Generators [{}] close to a group of order {}",
        spec.generators
            .iter()
            .map(|g| g.token())
            .collect::<Vec<_>>()
            .join(" "),
        matrices.len() + 1
    );

    let mut transforms: Vec<Arc<Transform>> = matrices
        .into_iter()
        .map(|matrix| Arc::new(Transform::linear(center, matrix)))
        .collect();

    for translation in &spec.translations {
        expand_translation(&mut transforms, translation);
    }

    info!("Built {} non-identity transform(s)", transforms.len());
    transforms
}

/// Append the repeats of one translation spec to `transforms`
pub fn expand_translation(transforms: &mut Vec<Arc<Transform>>, translation: &TranslationSpec) {
    let existing = transforms.len();
    let repeats = translation.count.saturating_sub(1) as usize;
    let mut added = Vec::with_capacity(repeats * (existing + 1));

    for k in 1..translation.count {
        let shift = Arc::new(Transform::translate(translation.offset(k)));
        added.push(Arc::clone(&shift));
        for base in &transforms[..existing] {
            added.push(Arc::new(Transform::compose(Arc::clone(base), Arc::clone(&shift))));
        }
    }

    debug!(
        "Translation x{} by ({}, {}, {}) added {} transform(s)",
        translation.count,
        translation.delta.x,
        translation.delta.y,
        translation.delta.z,
        added.len()
    );
    transforms.extend(added);
}

fn sort_matrices(matrices: &mut [Matrix3<i8>]) {
    matrices.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
}
