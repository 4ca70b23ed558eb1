use std::path::PathBuf;

/// Failures of the level and draw engines.
///
/// Both variants are local input errors: the caller corrects the input and
/// calls again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl EngineError {
    /// HTTP status an API layer should answer with.
    #[inline]
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::InvalidArgument(_) => 400,
            EngineError::NotFound(_) => 404,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateId(u32),

    #[error("card id {0} has an empty prompt text")]
    EmptyPrompt(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("invalid level curve step {0} in snapshot")]
    Step(u64),
}
