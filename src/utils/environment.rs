use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the alert corpus directory
pub const CORPUS_DIR_ENV: &str = "CALLSCOPE_CORPUS_DIR";
/// Environment variable naming the call-detail record input directory
pub const CDR_DIR_ENV: &str = "CALLSCOPE_CDR_DIR";

pub const DEFAULT_CORPUS_DIR: &str = "jsonl_data";
pub const DEFAULT_CDR_DIR: &str = "created_json";
pub const DEFAULT_FLATTEN_OUTPUT: &str = "flattened_cdrs.jsonl";

/// Resolve the corpus directory: explicit flag, then `CALLSCOPE_CORPUS_DIR`, then `jsonl_data`
pub fn get_corpus_dir(flag: Option<&Path>) -> PathBuf {
    resolve_dir(flag, env::var(CORPUS_DIR_ENV).ok(), DEFAULT_CORPUS_DIR)
}

/// Resolve the call-detail record directory: explicit flag, then `CALLSCOPE_CDR_DIR`, then `created_json`
pub fn get_cdr_dir(flag: Option<&Path>) -> PathBuf {
    resolve_dir(flag, env::var(CDR_DIR_ENV).ok(), DEFAULT_CDR_DIR)
}

/// Internal helper with the environment value passed in (for testing)
pub(crate) fn resolve_dir(flag: Option<&Path>, env_value: Option<String>, default: &str) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
