use std::path::Path;

use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::config::defaults::{DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START};
use crate::gradient::errors::GradientError;
use crate::gradient::operations;
use crate::gradient::types::Color;
use crate::phases::BuildPhase;

/// Load the gradient colour sequence used for the phase colours.
///
/// Resolution order:
/// 1. `inline` JSON payload (e.g. `--gradient-colors`)
/// 2. `file` containing the JSON payload (e.g. `--gradient-file`)
/// 3. `[display] gradient_colors` from the config
/// 4. A generated gradient from `gradient_start` to `gradient_end`, one colour per phase
pub fn resolve_gradient(
    inline: Option<&str>,
    file: Option<&Path>,
    display: &DisplayConfig,
) -> Result<Vec<Color>, GradientError> {
    if let Some(payload) = inline {
        let colors = operations::parse_gradient_payload(payload)?;
        debug!(
            event = "core.gradient.loaded",
            source = "inline",
            count = colors.len()
        );
        return Ok(colors);
    }

    if let Some(path) = file {
        let payload = std::fs::read_to_string(path).map_err(|source| GradientError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let colors = operations::parse_gradient_payload(&payload)?;
        debug!(
            event = "core.gradient.loaded",
            source = "file",
            path = %path.display(),
            count = colors.len()
        );
        return Ok(colors);
    }

    if let Some(raw) = &display.gradient_colors {
        let colors = operations::parse_colors(raw)?;
        debug!(
            event = "core.gradient.loaded",
            source = "config",
            count = colors.len()
        );
        return Ok(colors);
    }

    let start: Color = display
        .gradient_start
        .as_deref()
        .unwrap_or(DEFAULT_GRADIENT_START)
        .parse()?;
    let end: Color = display
        .gradient_end
        .as_deref()
        .unwrap_or(DEFAULT_GRADIENT_END)
        .parse()?;

    info!(
        event = "core.gradient.generated",
        start = %start,
        end = %end,
        count = BuildPhase::COUNT
    );

    Ok(operations::gradient_colors(start, end, BuildPhase::COUNT))
}
