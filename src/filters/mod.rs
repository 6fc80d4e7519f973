pub mod severity;

pub use severity::{BAD_CALL_SEVERITIES, is_bad_call, retain_bad_calls};
