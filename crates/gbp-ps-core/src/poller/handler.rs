use std::future::Future;

use chrono::Local;
use tracing::{debug, info};

use crate::poller::types::{CycleOutcome, PollConfig, ProcessSource, TableBody};
use crate::processes;

/// Run one poll cycle: fetch, derive rows, replace the table body.
///
/// Failures are swallowed: the table body is left as it was and the outcome
/// is [`CycleOutcome::Failed`]. They are only visible as debug log events.
pub async fn poll_cycle<S, B>(source: &S, body: &mut B, config: &PollConfig) -> CycleOutcome
where
    S: ProcessSource,
    B: TableBody,
{
    let processes = match source.fetch_processes().await {
        Ok(processes) => processes,
        Err(e) => {
            debug!(event = "core.poll.cycle_failed", stage = "fetch", error = %e);
            return CycleOutcome::Failed;
        }
    };

    // One "now" for every row of this cycle
    let now = Local::now();
    let rows = processes::build_rows(&processes, &now, &config.colors);
    let count = rows.len();

    match body.replace_rows(rows) {
        Ok(()) => {
            debug!(event = "core.poll.cycle_completed", rows = count);
            CycleOutcome::Rendered { rows: count }
        }
        Err(e) => {
            debug!(event = "core.poll.cycle_failed", stage = "render", error = %e);
            CycleOutcome::Failed
        }
    }
}

/// Poll → render → wait, until `shutdown` resolves.
///
/// The wait starts when a cycle completes, so the effective period is the
/// interval plus the request latency and at most one request is in flight.
/// Returns the number of completed cycles.
pub async fn run_poll_loop<S, B, F>(source: &S, body: &mut B, config: &PollConfig, shutdown: F) -> u64
where
    S: ProcessSource,
    B: TableBody,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut cycles = 0u64;

    info!(
        event = "core.poll.loop_started",
        interval_ms = config.interval.as_millis() as u64
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = poll_cycle(source, body, config) => {}
        }
        cycles += 1;

        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(config.interval) => {}
        }
    }

    info!(event = "core.poll.loop_stopped", cycles = cycles);

    cycles
}
