use std::future::Future;
use std::time::Duration;

use crate::phases::PhaseColors;
use crate::processes::{BuildProcess, ProcessRow};

/// Failure of one poll cycle: network, HTTP status, decoding or GraphQL errors.
pub type CycleError = Box<dyn std::error::Error + Send + Sync>;

/// Settings for the poll loop, constructed once at startup.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between the end of one cycle and the start of the next
    pub interval: Duration,
    /// Phase colours built from the gradient sequence
    pub colors: PhaseColors,
}

/// Anything that can produce the current list of build processes.
pub trait ProcessSource {
    fn fetch_processes(
        &self,
    ) -> impl Future<Output = Result<Vec<BuildProcess>, CycleError>> + Send;
}

/// Destination for rendered rows. Every call replaces all previous rows.
pub trait TableBody {
    fn replace_rows(&mut self, rows: Vec<ProcessRow>) -> std::io::Result<()>;
}

/// Result of a single poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The table body was replaced with `rows` rows
    Rendered { rows: usize },
    /// The cycle failed; the table body was left untouched
    Failed,
}

/// In-memory [`TableBody`] holding the rows of the latest render.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableBody {
    rows: Vec<ProcessRow>,
    renders: usize,
}

impl MemoryTableBody {
    pub fn rows(&self) -> &[ProcessRow] {
        &self.rows
    }

    /// Number of times the rows have been replaced.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl TableBody for MemoryTableBody {
    fn replace_rows(&mut self, rows: Vec<ProcessRow>) -> std::io::Result<()> {
        self.rows = rows;
        self.renders += 1;
        Ok(())
    }
}
