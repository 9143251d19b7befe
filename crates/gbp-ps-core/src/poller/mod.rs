pub mod handler;
pub mod interval;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use handler::{poll_cycle, run_poll_loop};
pub use interval::{
    DEFAULT_UPDATE_INTERVAL_MS, IntervalSources, parse_update_interval, resolve_update_interval,
};
pub use types::{CycleError, CycleOutcome, MemoryTableBody, PollConfig, ProcessSource, TableBody};
