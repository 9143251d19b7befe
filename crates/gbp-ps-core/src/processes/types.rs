use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::phases::PhaseProgress;

/// Build number of a process. The server may send it as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildId::Number(n) => write!(f, "{}", n),
            BuildId::Text(s) => f.write_str(s),
        }
    }
}

/// A build process as reported by the `buildProcesses` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProcess {
    pub machine: String,
    pub id: BuildId,
    pub build_host: String,
    pub package: String,
    pub phase: String,
    pub start_time: DateTime<FixedOffset>,
}

/// One rendered table row, derived from a [`BuildProcess`] at a given "now".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRow {
    pub machine: String,
    pub id: String,
    pub package: String,
    /// Wall-clock time since the process started, `HH:MM:SS`
    pub elapsed: String,
    pub phase: String,
    pub progress: PhaseProgress,
    pub build_host: String,
    /// Local start time: `HH:MM:SS` today, `MonDD` otherwise
    pub start: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_numeric_id() {
        let json = r#"{
            "machine": "babette",
            "id": 1031,
            "buildHost": "jenkins",
            "package": "sys-apps/systemd-254.5-r1",
            "phase": "compile",
            "startTime": "2023-11-11T12:20:52+00:00"
        }"#;
        let process: BuildProcess = serde_json::from_str(json).unwrap();

        assert_eq!(process.id, BuildId::Number(1031));
        assert_eq!(process.id.to_string(), "1031");
        assert_eq!(process.build_host, "jenkins");
        assert_eq!(process.start_time.to_rfc3339(), "2023-11-11T12:20:52+00:00");
    }

    #[test]
    fn test_deserialize_with_string_id() {
        let json = r#"{
            "machine": "babette",
            "id": "1031",
            "buildHost": "jenkins",
            "package": "sys-apps/systemd-254.5-r1",
            "phase": "compile",
            "startTime": "2023-11-11T12:20:52.123456+00:00"
        }"#;
        let process: BuildProcess = serde_json::from_str(json).unwrap();

        assert_eq!(process.id, BuildId::Text("1031".to_string()));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{
            "machine": "babette",
            "id": "1031",
            "package": "sys-apps/systemd-254.5-r1",
            "phase": "compile",
            "startTime": "2023-11-11T12:20:52+00:00"
        }"#;
        assert!(serde_json::from_str::<BuildProcess>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = r#"{"machine":"babette","id":"1031","buildHost":"jenkins","package":"p","phase":"compile","startTime":"2023-11-11T12:20:52+00:00"}"#;
        let process: BuildProcess = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&process).unwrap();

        assert_eq!(value["buildHost"], "jenkins");
        assert_eq!(value["id"], "1031");

        let start = value["startTime"].as_str().unwrap();
        assert_eq!(
            DateTime::parse_from_rfc3339(start).unwrap(),
            process.start_time
        );
    }
}
