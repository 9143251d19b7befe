use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::phases::{PhaseColors, progress_for};
use crate::processes::types::{BuildProcess, ProcessRow};

/// Elapsed wall-clock time from `start` to `now` as `HH:MM:SS`.
///
/// Sub-second remainders are floored. A start time in the future (clock skew)
/// renders as `00:00:00`.
pub fn elapsed<Tz: TimeZone>(start: &DateTime<FixedOffset>, now: &DateTime<Tz>) -> String {
    let delta = now.with_timezone(&Utc) - start.with_timezone(&Utc);
    format_elapsed_seconds(delta.num_milliseconds().max(0) / 1000)
}

/// Format a number of seconds as zero-padded `HH:MM:SS`; hours may exceed two digits.
pub fn format_elapsed_seconds(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a start time: `HH:MM:SS` when it falls on `today`, `MonDD` otherwise.
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>, today: NaiveDate) -> String
where
    Tz::Offset: fmt::Display,
{
    if timestamp.date_naive() == today {
        timestamp.format("%H:%M:%S").to_string()
    } else {
        timestamp.format("%b%d").to_string()
    }
}

/// Derive the table row for one process.
///
/// `now` supplies both the reference instant for the elapsed column and the
/// time zone used for the start column.
pub fn build_row<Tz: TimeZone>(
    process: &BuildProcess,
    now: &DateTime<Tz>,
    colors: &PhaseColors,
) -> ProcessRow
where
    Tz::Offset: fmt::Display,
{
    let local_start = process.start_time.with_timezone(&now.timezone());

    ProcessRow {
        machine: process.machine.clone(),
        id: process.id.to_string(),
        package: process.package.clone(),
        elapsed: elapsed(&process.start_time, now),
        phase: process.phase.clone(),
        progress: progress_for(&process.phase, colors),
        build_host: process.build_host.clone(),
        start: format_timestamp(&local_start, now.date_naive()),
    }
}

/// Derive rows for every process, preserving the order received.
pub fn build_rows<Tz: TimeZone>(
    processes: &[BuildProcess],
    now: &DateTime<Tz>,
    colors: &PhaseColors,
) -> Vec<ProcessRow>
where
    Tz::Offset: fmt::Display,
{
    processes
        .iter()
        .map(|process| build_row(process, now, colors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Color;
    use crate::processes::types::BuildId;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn make_process(package: &str, phase: &str, start: &str) -> BuildProcess {
        BuildProcess {
            machine: "babette".to_string(),
            id: BuildId::Text("1031".to_string()),
            build_host: "jenkins".to_string(),
            package: package.to_string(),
            phase: phase.to_string(),
            start_time: ts(start),
        }
    }

    #[test]
    fn test_elapsed_minutes_and_seconds() {
        let start = ts("2024-02-07T20:10:37+00:00");
        let now = ts("2024-02-07T20:14:51+00:00");
        assert_eq!(elapsed(&start, &now), "00:04:14");
    }

    #[test]
    fn test_elapsed_floors_partial_seconds() {
        let start = ts("2024-02-07T20:10:37.900+00:00");
        let now = ts("2024-02-07T20:10:39.100+00:00");
        assert_eq!(elapsed(&start, &now), "00:00:01");
    }

    #[test]
    fn test_elapsed_across_offsets() {
        let start = ts("2024-02-07T20:00:00+00:00");
        let now = ts("2024-02-07T23:30:05+02:00");
        assert_eq!(elapsed(&start, &now), "01:30:05");
    }

    #[test]
    fn test_elapsed_zero() {
        let start = ts("2024-02-07T20:00:00+00:00");
        assert_eq!(elapsed(&start, &start), "00:00:00");
    }

    #[test]
    fn test_elapsed_future_start_clamps_to_zero() {
        let start = ts("2024-02-07T20:00:10+00:00");
        let now = ts("2024-02-07T20:00:00+00:00");
        assert_eq!(elapsed(&start, &now), "00:00:00");
    }

    #[test]
    fn test_format_elapsed_seconds_decomposition() {
        for total in [0i64, 59, 60, 61, 3599, 3600, 3661, 86399, 86400, 123456] {
            let formatted = format_elapsed_seconds(total);
            let parts: Vec<i64> = formatted.split(':').map(|p| p.parse().unwrap()).collect();

            assert_eq!(parts.len(), 3);
            assert!(formatted.split(':').all(|p| p.len() >= 2));
            assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], total);
            assert!(parts[1] < 60 && parts[2] < 60);
        }
    }

    #[test]
    fn test_format_elapsed_seconds_many_hours() {
        assert_eq!(format_elapsed_seconds(100 * 3600 + 5), "100:00:05");
        assert_eq!(format_elapsed_seconds(9 * 3600 + 9 * 60 + 9), "09:09:09");
    }

    #[test]
    fn test_format_timestamp_when_today() {
        let timestamp = ts("2024-02-07T20:10:00+00:00");
        let today = timestamp.date_naive();
        assert_eq!(format_timestamp(&timestamp, today), "20:10:00");
    }

    #[test]
    fn test_format_timestamp_when_not_today() {
        let timestamp = ts("2024-02-07T20:10:00+00:00");
        let today = NaiveDate::from_ymd_opt(2024, 2, 8).unwrap();
        assert_eq!(format_timestamp(&timestamp, today), "Feb07");
    }

    #[test]
    fn test_build_rows_preserves_order_and_fields() {
        let colors = PhaseColors::new(&[Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)]);
        let processes = vec![
            make_process("sys-apps/portage-3.0.51", "postinst", "2023-11-14T16:20:00+00:00"),
            make_process("sys-apps/shadow-4.14-r4", "setup", "2023-11-15T16:20:01+00:00"),
            make_process("net-misc/wget-1.21.4", "world", "2023-11-15T16:20:02+00:00"),
        ];
        let now = ts("2023-11-15T16:21:02+00:00");

        let rows = build_rows(&processes, &now, &colors);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].package, "sys-apps/portage-3.0.51");
        assert_eq!(rows[0].elapsed, "24:01:02");
        assert_eq!(rows[0].start, "Nov14");
        assert_eq!(rows[0].progress.percent, 100);
        assert!(!rows[0].progress.indeterminate);
        assert_eq!(rows[0].progress.color, None);

        assert_eq!(rows[1].package, "sys-apps/shadow-4.14-r4");
        assert_eq!(rows[1].elapsed, "00:01:01");
        assert_eq!(rows[1].start, "16:20:01");
        assert_eq!(rows[1].progress.percent, 16);
        assert_eq!(rows[1].progress.color, Some(Color::rgb(2, 2, 2)));

        assert_eq!(rows[2].phase, "world");
        assert!(rows[2].progress.indeterminate);
        assert_eq!(rows[2].progress.color, Some(Color::rgb(1, 1, 1)));

        assert!(rows.iter().all(|r| r.machine == "babette" && r.id == "1031"));
        assert!(rows.iter().all(|r| r.build_host == "jenkins"));
    }

    #[test]
    fn test_build_rows_empty() {
        let now = ts("2023-11-15T16:21:02+00:00");
        assert!(build_rows(&[], &now, &PhaseColors::default()).is_empty());
    }
}
