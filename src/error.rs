//! Crate error type

/// Errors raised while building actors or loading fixtures.
///
/// Simulation queries never fail; only construction from untrusted numbers
/// and the JSON loaders return these.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A position, size or speed component is unusable.
    #[error("invalid actor geometry: {what}")]
    InvalidGeometry { what: &'static str },

    /// Failed to read a fixture or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A level pack with no levels in it.
    #[error("level pack contains no levels")]
    EmptyPack,
}

pub type SimResult<T> = Result<T, SimError>;
