use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArcadeError>;

#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ArcadeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArcadeError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ArcadeError::Json {
            path: path.into(),
            source,
        }
    }
}
