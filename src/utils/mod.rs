pub mod environment;
pub mod paths;

pub use environment::{
    CDR_DIR_ENV, CORPUS_DIR_ENV, DEFAULT_CDR_DIR, DEFAULT_CORPUS_DIR, DEFAULT_FLATTEN_OUTPUT,
    get_cdr_dir, get_corpus_dir,
};
pub use paths::format_path_with_tilde;
