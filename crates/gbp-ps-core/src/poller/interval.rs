use std::time::Duration;

use tracing::warn;
use url::Url;

/// Delay between poll cycles when no `update_interval` is given, in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 500;

/// Name of the interval parameter, both as URL query parameter and config key.
pub const UPDATE_INTERVAL_PARAM: &str = "update_interval";

/// Parse the leading integer of `value` (optional whitespace and sign, then digits).
///
/// `"1000"` → 1000, `"750ms"` → 750, `" 42"` → 42, `"abc"` → `None`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long digit runs instead of failing
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Turn a raw `update_interval` value into the delay between poll cycles.
///
/// Missing, empty or unparsable values fall back to
/// [`DEFAULT_UPDATE_INTERVAL_MS`]; negative values are clamped to zero.
pub fn parse_update_interval(value: Option<&str>) -> Duration {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS);
    };

    match parse_int_prefix(raw) {
        Some(ms) => Duration::from_millis(ms.max(0) as u64),
        None => {
            warn!(
                event = "core.poll.interval_parse_failed",
                value = raw,
                default_ms = DEFAULT_UPDATE_INTERVAL_MS
            );
            Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS)
        }
    }
}

/// The `update_interval` query parameter of `url`, if present.
pub fn update_interval_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == UPDATE_INTERVAL_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Where the poll interval comes from, highest precedence first.
#[derive(Debug, Clone, Default)]
pub struct IntervalSources<'a> {
    /// Explicit command-line value
    pub flag: Option<&'a str>,
    /// Server URL that may carry `?update_interval=`
    pub url: Option<&'a Url>,
    /// `GBP_PS_UPDATE_INTERVAL`
    pub env: Option<&'a str>,
    /// `[poll] update_interval` from the config file
    pub config: Option<u64>,
}

/// Resolve the poll interval: the first source that is present decides.
pub fn resolve_update_interval(sources: &IntervalSources<'_>) -> Duration {
    if let Some(flag) = sources.flag {
        return parse_update_interval(Some(flag));
    }

    if let Some(from_url) = sources.url.and_then(update_interval_from_url) {
        return parse_update_interval(Some(&from_url));
    }

    if let Some(env) = sources.env {
        return parse_update_interval(Some(env));
    }

    match sources.config {
        Some(ms) => Duration::from_millis(ms),
        None => Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS),
    }
}
