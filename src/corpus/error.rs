use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a corpus from being scanned at all
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus directory '{}' not found", path.display())]
    Unavailable { path: PathBuf },

    #[error("Corpus path '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to list corpus directory '{}': {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl CorpusError {
    pub fn path(&self) -> &PathBuf {
        match self {
            CorpusError::Unavailable { path }
            | CorpusError::NotADirectory { path }
            | CorpusError::Listing { path, .. } => path,
        }
    }
}
