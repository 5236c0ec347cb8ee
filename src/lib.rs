//! Symmetric block drawing library
//!
//! This library turns a handful of user-chosen symmetry generators (mirror planes,
//! rotations and repeated translations) into the complete list of transforms they
//! generate, and replays every block edit observed in a game world through that list.

pub mod config;
pub mod error;
pub mod replication;
pub mod symmetries;
pub mod world;

pub use error::SymmetryError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
