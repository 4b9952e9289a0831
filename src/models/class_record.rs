use super::attendance::{AttendanceMap, AttendanceStatus};
use super::class_status::ClassStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MIN_DURATION: u32 = 15;
pub const MAX_DURATION: u32 = 300;
pub const DEFAULT_DURATION: u32 = 60;

/// A scheduled (or already held) class.
///
/// Stored as one element of the JSON array under `teacher_classes`:
/// dates are `YYYY-MM-DD`, times `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: i64,
    pub subject: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration: u32,
    pub location: String,
    pub students: Vec<String>,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default)]
    pub attendance: AttendanceMap,
}

/// Per-class attendance tally (total enrolled, marked, present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceTally {
    pub total: usize,
    pub marked: usize,
    pub present: usize,
}

impl ClassRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn is_enrolled(&self, student: &str) -> bool {
        self.students.iter().any(|s| s == student)
    }

    pub fn mark_of(&self, student: &str) -> Option<AttendanceStatus> {
        self.attendance.get(student).copied()
    }

    /// Attendance transition: replaces the map wholesale and completes the class.
    ///
    /// Total: an empty map still completes the class. Callers validate
    /// the keys beforehand (see `ClassStore::save_attendance`).
    pub fn complete(mut self, attendance: AttendanceMap) -> ClassRecord {
        self.attendance = attendance;
        self.status = ClassStatus::Completed;
        self
    }

    /// Map with every enrolled student marked present.
    pub fn all_present(&self) -> AttendanceMap {
        self.students
            .iter()
            .map(|s| (s.clone(), AttendanceStatus::Present))
            .collect()
    }

    pub fn tally(&self) -> AttendanceTally {
        AttendanceTally {
            total: self.students.len(),
            marked: self.attendance.len(),
            present: self.attendance.values().filter(|s| s.is_present()).count(),
        }
    }
}

/// Initials of a display name ("Imran Mahmud" → "IM").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::time::parse_hhmm(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{raw}'")))
    }
}
