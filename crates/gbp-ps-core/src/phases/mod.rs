pub mod colors;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use colors::PhaseColors;
pub use operations::{fill_percent, phase_index, progress_for};
pub use types::{BuildPhase, PhaseProgress};
