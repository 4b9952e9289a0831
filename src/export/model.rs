// src/export/model.rs

use crate::models::ClassRecord;
use serde::Serialize;

pub const NOT_MARKED: &str = "not-marked";

/// Flat row of the attendance report: one per enrolled student per class.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub class_id: i64,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub location: String,
    pub class_status: String,
    pub student: String,
    pub attendance: String,
}

/// Rows for every class, restricted to `student` when given.
pub fn build_rows(classes: &[ClassRecord], student: Option<&str>) -> Vec<AttendanceExport> {
    classes
        .iter()
        .flat_map(|c| {
            c.students
                .iter()
                .filter(move |s| student.is_none_or(|wanted| wanted == s.as_str()))
                .map(move |s| AttendanceExport {
                    class_id: c.id,
                    subject: c.subject.clone(),
                    date: c.date_str(),
                    time: c.time_str(),
                    duration: c.duration,
                    location: c.location.clone(),
                    class_status: c.status.as_str().to_string(),
                    student: s.clone(),
                    attendance: c
                        .mark_of(s)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_else(|| NOT_MARKED.to_string()),
                })
        })
        .collect()
}
