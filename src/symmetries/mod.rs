// Symmetries module: Contains the generator catalog, transform values and the group closure engine
// This module turns generator tokens into the full list of point transforms applied per block edit

// ======================== MODULE DECLARATIONS ========================
pub mod symmetry_generators;
pub mod symmetry_group_closure;
pub mod symmetry_transforms;


// ======================== GENERATOR PARSING ========================
pub use symmetry_generators::{
    Generator,           // enum - fixed catalog of mirror/rotation generators (n, e, u, nw, ne, 90, 180)
    SymmetrySpec,        // struct - deduplicated generator set + ordered translation repeats
    TranslationSpec,     // struct - repeat count and shift vector of one `t` group
    parse_symmetry_spec, // fn(tokens: &[S]) -> Result<SymmetrySpec> - parses command-line tokens
};

// Generator impl methods:
//   from_token(token: &str) -> Option<Self>                      - looks up a catalog entry by token
//   token(&self) -> &'static str                                 - returns the command-line token
//   matrix(&self) -> Matrix3<i8>                                 - returns the integer generator matrix

// SymmetrySpec impl methods:
//   default_mirrors() -> Self                                    - {n, e}, used when no tokens are given
//   generator_matrices(&self) -> Vec<Matrix3<i8>>                - matrices of the generator set

// ======================== TRANSFORMS ========================
pub use symmetry_transforms::Transform; // enum - Linear | Translate | Compose point map
// Transform impl methods:
//   apply(&self, point: &Vector3<f64>) -> Vector3<f64>           - evaluates the map recursively
//   translation_part(&self) -> Vector3<f64>                      - total shift carried by the transform
//   is_identity(&self) -> bool                                   - explicit identity matrix or zero shift

// ======================== GROUP CLOSURE ========================
pub use symmetry_group_closure::{
    build_transforms,      // fn(center, spec: &SymmetrySpec) -> Vec<Arc<Transform>> - final transform list
    close_group,           // fn(generators: &[Matrix3<i8>]) -> Vec<Matrix3<i8>> - closure incl. identity
    expand_translation,    // fn(transforms: &mut Vec<Arc<Transform>>, translation: &TranslationSpec) - fan-out
    non_identity_elements, // fn(generators: &[Matrix3<i8>]) -> Vec<Matrix3<i8>> - closure minus identity
};
