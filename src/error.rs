//! Error types for symmetry construction and world access.

#[derive(Debug, thiserror::Error)]
pub enum SymmetryError {
    #[error("Invalid symmetry specification: {0}")]
    InvalidSpecification(String),

    #[error("World server unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("Malformed response from world server: {0}")]
    MalformedResponse(String),
}

impl From<std::io::Error> for SymmetryError {
    fn from(e: std::io::Error) -> Self {
        SymmetryError::CollaboratorUnavailable(e.to_string())
    }
}
