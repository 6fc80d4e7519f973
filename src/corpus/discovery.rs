use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use super::error::CorpusError;

/// Default extension of corpus shard files
pub const SHARD_EXTENSION: &str = "jsonl";

/// Find all shard files directly inside `corpus_dir` with the given extension
///
/// Only regular files are returned; symlinks and subdirectories are skipped.
/// The listing is sorted by file name so repeated scans visit shards in the
/// same order, although callers should not depend on any particular order.
///
/// # Errors
///
/// - [`CorpusError::Unavailable`] if the directory does not exist
/// - [`CorpusError::NotADirectory`] if the path exists but is not a directory
/// - [`CorpusError::Listing`] if the directory cannot be read
pub fn discover_shards(corpus_dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CorpusError> {
    if !corpus_dir.exists() {
        return Err(CorpusError::Unavailable { path: corpus_dir.to_path_buf() });
    }
    if !corpus_dir.is_dir() {
        return Err(CorpusError::NotADirectory { path: corpus_dir.to_path_buf() });
    }

    let mut shards = Vec::new();
    let walker = WalkDir::new(corpus_dir).min_depth(1).max_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself failing means nothing can be listed
            Err(e) if e.depth() == 0 => {
                return Err(CorpusError::Listing { path: corpus_dir.to_path_buf(), source: e });
            }
            Err(e) => {
                warn!("Skipping unreadable corpus entry: {}", e);
                continue;
            }
        };

        if !has_extension(entry.path(), extension) {
            continue;
        }

        if entry.path_is_symlink() {
            warn!("Skipping shard (symlink not allowed): {}", entry.path().display());
            continue;
        }

        if entry.file_type().is_file() {
            shards.push(entry.into_path());
        }
    }

    Ok(shards)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}
