use thiserror::Error;

use jobdeck_core::StoreError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Store(StoreError::Api { .. }) => 3,
            Self::Store(StoreError::NotAuthenticated) => 2,
            Self::Store(StoreError::Session(_)) => 10,
            Self::Store(_) => 4,
            Self::Usage(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
