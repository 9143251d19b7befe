use crate::phases::colors::PhaseColors;
use crate::phases::types::{BuildPhase, PhaseProgress};

/// Position of `phase` in the phase table, or `None` for phases outside it.
pub fn phase_index(phase: &str) -> Option<usize> {
    BuildPhase::from_name(phase).map(|p| p.position())
}

/// Fill percentage for the phase at `index`: `floor(((index + 1) / COUNT) * 100)`.
pub fn fill_percent(index: usize) -> u8 {
    let percent = ((index + 1) * 100) / BuildPhase::COUNT;
    percent.min(100) as u8
}

/// Progress bar state for a raw phase name.
pub fn progress_for(phase: &str, colors: &PhaseColors) -> PhaseProgress {
    match BuildPhase::from_name(phase) {
        Some(known) => PhaseProgress {
            percent: fill_percent(known.position()),
            color: colors.color_for(known),
            indeterminate: false,
        },
        None => PhaseProgress {
            percent: 100,
            color: colors.fallback(),
            indeterminate: true,
        },
    }
}
