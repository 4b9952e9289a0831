use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance mark for one student in one class.
/// A student missing from the map is "not marked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

/// Student name → mark.
pub type AttendanceMap = BTreeMap<String, AttendanceStatus>;

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Excused => "excused",
        }
    }

    /// Parse user input; accepts full names and single-letter codes (p/a/l/e).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Some(Self::Present),
            "absent" | "a" => Some(Self::Absent),
            "late" | "l" => Some(Self::Late),
            "excused" | "e" => Some(Self::Excused),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `NAME=STATUS` pair as typed on the command line.
pub fn parse_mark(raw: &str) -> Result<(String, AttendanceStatus), ValidationError> {
    let (name, status) = raw
        .rsplit_once('=')
        .ok_or_else(|| ValidationError::InvalidStatus(raw.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidStatus(raw.to_string()));
    }

    let status = AttendanceStatus::from_input(status)
        .ok_or_else(|| ValidationError::InvalidStatus(status.trim().to_string()))?;

    Ok((name.to_string(), status))
}
