pub mod operations;
pub mod types;

// Re-export commonly used types
pub use operations::{build_row, build_rows, elapsed, format_elapsed_seconds, format_timestamp};
pub use types::{BuildId, BuildProcess, ProcessRow};
