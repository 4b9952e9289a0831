//! Attendance aggregation over a list of classes.
//!
//! Everything here is a pure function of its arguments. Rates are integer
//! percentages rounded half up, and 0 whenever the denominator is 0.

use crate::models::{AttendanceStatus, ClassRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Student rates below this (and above 0) raise the attendance alert.
pub const LOW_ATTENDANCE_THRESHOLD: u32 = 75;

/// Alert rule of the student dashboard; a 0% rate does not alert.
pub fn is_low_attendance(rate: u32) -> bool {
    rate > 0 && rate < LOW_ATTENDANCE_THRESHOLD
}

/// round(100 * num / den), half up; 0 when `den == 0`.
pub fn percentage(num: usize, den: usize) -> u32 {
    if den == 0 {
        return 0;
    }
    let (num, den) = (num as u64, den as u64);
    ((200 * num + den) / (2 * den)) as u32
}

pub fn completed_classes(classes: &[ClassRecord]) -> impl Iterator<Item = &ClassRecord> {
    classes.iter().filter(|c| c.is_completed())
}

/// Attendance rate in percent.
///
/// With a student: classes where that student is `present` over all completed
/// classes in `classes`. Without: `present` entries over all entries of all
/// completed classes.
pub fn attendance_rate(classes: &[ClassRecord], student: Option<&str>) -> u32 {
    match student {
        Some(name) => {
            let completed = completed_classes(classes).count();
            let attended = completed_classes(classes)
                .filter(|c| c.mark_of(name) == Some(AttendanceStatus::Present))
                .count();
            percentage(attended, completed)
        }
        None => {
            let (present, total) = completed_classes(classes)
                .flat_map(|c| c.attendance.values())
                .fold((0, 0), |(p, t), s| (p + usize::from(s.is_present()), t + 1));
            percentage(present, total)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    pub not_marked: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused + self.not_marked
    }

    pub fn get(&self, status: Option<AttendanceStatus>) -> usize {
        match status {
            Some(AttendanceStatus::Present) => self.present,
            Some(AttendanceStatus::Absent) => self.absent,
            Some(AttendanceStatus::Late) => self.late,
            Some(AttendanceStatus::Excused) => self.excused,
            None => self.not_marked,
        }
    }
}

/// Marks of one student across the completed classes they are enrolled in.
pub fn counts_by_status(classes: &[ClassRecord], student: &str) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for class in completed_classes(classes).filter(|c| c.is_enrolled(student)) {
        match class.mark_of(student) {
            Some(AttendanceStatus::Present) => counts.present += 1,
            Some(AttendanceStatus::Absent) => counts.absent += 1,
            Some(AttendanceStatus::Late) => counts.late += 1,
            Some(AttendanceStatus::Excused) => counts.excused += 1,
            None => counts.not_marked += 1,
        }
    }
    counts
}

/// Distinct students across all rosters.
pub fn enrolled_student_count(classes: &[ClassRecord]) -> usize {
    classes
        .iter()
        .flat_map(|c| c.students.iter().map(String::as_str))
        .collect::<HashSet<&str>>()
        .len()
}

pub fn classes_on_date(classes: &[ClassRecord], date: NaiveDate) -> Vec<&ClassRecord> {
    classes.iter().filter(|c| c.date == date).collect()
}

/// Classes strictly after `after`; a class on that very day is not upcoming.
pub fn upcoming_classes(classes: &[ClassRecord], after: NaiveDate) -> Vec<&ClassRecord> {
    classes.iter().filter(|c| c.date > after).collect()
}

/// Classes strictly before `before`.
pub fn past_classes(classes: &[ClassRecord], before: NaiveDate) -> Vec<&ClassRecord> {
    classes.iter().filter(|c| c.date < before).collect()
}

/// Completed classes that actually carry marks (the teacher's attendance history).
pub fn classes_with_attendance(classes: &[ClassRecord]) -> Vec<&ClassRecord> {
    completed_classes(classes)
        .filter(|c| !c.attendance.is_empty())
        .collect()
}

/// Newest date first; classes on the same day keep their stored order.
pub fn sort_by_date_desc(classes: &mut [&ClassRecord]) {
    classes.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Figures shown on the teacher dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeacherSummary {
    pub total_classes: usize,
    pub completed_classes: usize,
    pub attendance_rate: u32,
    pub enrolled_students: usize,
    pub today_classes: usize,
}

impl TeacherSummary {
    pub fn compute(classes: &[ClassRecord], today: NaiveDate) -> Self {
        Self {
            total_classes: classes.len(),
            completed_classes: completed_classes(classes).count(),
            attendance_rate: attendance_rate(classes, None),
            enrolled_students: enrolled_student_count(classes),
            today_classes: classes_on_date(classes, today).len(),
        }
    }
}

/// Figures shown on a student's dashboard. `classes` is expected to be the
/// student's own classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub total_classes: usize,
    pub completed_classes: usize,
    pub attended: usize,
    pub missed: usize,
    pub attendance_rate: u32,
    pub today_classes: usize,
    pub upcoming_classes: usize,
}

impl StudentSummary {
    pub fn compute(classes: &[ClassRecord], student: &str, today: NaiveDate) -> Self {
        let marked = |status: AttendanceStatus| {
            completed_classes(classes)
                .filter(|c| c.mark_of(student) == Some(status))
                .count()
        };

        Self {
            total_classes: classes.len(),
            completed_classes: completed_classes(classes).count(),
            attended: marked(AttendanceStatus::Present),
            missed: marked(AttendanceStatus::Absent),
            attendance_rate: attendance_rate(classes, Some(student)),
            today_classes: classes_on_date(classes, today).len(),
            upcoming_classes: upcoming_classes(classes, today)
                .into_iter()
                .filter(|c| !c.is_completed())
                .count(),
        }
    }

    pub fn low_attendance(&self) -> bool {
        is_low_attendance(self.attendance_rate)
    }
}
