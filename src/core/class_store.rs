//! Authoritative collection of class records.
//!
//! Each mutation reads the stored collection, applies the change to a copy
//! and writes the whole collection back before returning. Nothing is cached,
//! so another view over the same storage sees the result on its next read.

use crate::core::enrollment::EnrollmentResolver;
use crate::core::events::{ClassCreated, ClassEventSink};
use crate::db::ClassRepository;
use crate::errors::{AppError, AppResult, Field, ValidationError};
use crate::models::class_record::{MAX_DURATION, MIN_DURATION};
use crate::models::{AttendanceMap, ClassDraft, ClassRecord, ClassStatus, StudentDirectory};
use crate::utils::date::{now_millis, parse_date};
use crate::utils::time::parse_hhmm;

pub struct ClassStore<R> {
    repo: R,
    directory: StudentDirectory,
    last_id: i64,
}

impl<R: ClassRepository> ClassStore<R> {
    pub fn new(repo: R, directory: StudentDirectory) -> Self {
        Self {
            repo,
            directory,
            last_id: 0,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn directory(&self) -> &StudentDirectory {
        &self.directory
    }

    /// Validate the draft, store a new `scheduled` class and tell `sink` about it.
    /// When the sink fails the previous collection is written back and the
    /// sink's error is returned.
    pub fn create<S>(&mut self, draft: &ClassDraft, sink: &mut S) -> AppResult<ClassRecord>
    where
        S: ClassEventSink + ?Sized,
    {
        let mut record = build_record(draft, &self.directory)?;
        let previous = self.repo.load_classes()?;

        record.id = self.next_id(&previous)?;
        let mut classes = previous.clone();
        classes.push(record.clone());
        self.repo.save_classes(&classes)?;

        // a class nobody was told about is not created: put the old collection back
        if let Err(e) = sink.class_created(&ClassCreated::from_record(&record)) {
            self.repo.save_classes(&previous)?;
            return Err(e);
        }
        Ok(record)
    }

    /// Remove a class. Students are not notified.
    pub fn delete(&mut self, id: i64) -> AppResult<ClassRecord> {
        let mut classes = self.repo.load_classes()?;
        let idx = position_of(&classes, id)?;

        let removed = classes.remove(idx);
        self.repo.save_classes(&classes)?;
        Ok(removed)
    }

    /// Replace the attendance of a class and mark it completed.
    ///
    /// Every key must be an enrolled student. An empty map is accepted and
    /// still completes the class.
    pub fn save_attendance(&mut self, id: i64, attendance: AttendanceMap) -> AppResult<ClassRecord> {
        let mut classes = self.repo.load_classes()?;
        let idx = position_of(&classes, id)?;

        if let Some(stranger) = attendance.keys().find(|name| !classes[idx].is_enrolled(name)) {
            return Err(ValidationError::UnknownStudent(stranger.clone()).into());
        }

        let updated = classes[idx].clone().complete(attendance);
        classes[idx] = updated.clone();
        self.repo.save_classes(&classes)?;
        Ok(updated)
    }

    /// All classes in stored order, or only those enrolling `student`.
    pub fn list(&self, student: Option<&str>) -> AppResult<Vec<ClassRecord>> {
        let classes = self.repo.load_classes()?;
        Ok(match student {
            Some(name) => classes.into_iter().filter(|c| c.is_enrolled(name)).collect(),
            None => classes,
        })
    }

    pub fn get(&self, id: i64) -> AppResult<ClassRecord> {
        self.repo
            .load_classes()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound(id))
    }

    /// The "mark all present" shortcut; nothing is saved.
    pub fn mark_all_present(&self, id: i64) -> AppResult<AttendanceMap> {
        Ok(self.get(id)?.all_present())
    }

    /// Creation-order id, strictly above anything issued or stored so far,
    /// including ids of classes deleted since.
    fn next_id(&mut self, existing: &[ClassRecord]) -> AppResult<i64> {
        let floor = existing
            .iter()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            .max(self.repo.highest_issued_id()?)
            .max(self.last_id);
        let id = now_millis().max(floor + 1);
        self.last_id = id;
        Ok(id)
    }
}

fn position_of(classes: &[ClassRecord], id: i64) -> AppResult<usize> {
    classes
        .iter()
        .position(|c| c.id == id)
        .ok_or(AppError::NotFound(id))
}

/// Checks run in this order: required fields, date and time format,
/// duration, roster. The id is assigned by the store.
fn build_record(
    draft: &ClassDraft,
    directory: &StudentDirectory,
) -> Result<ClassRecord, ValidationError> {
    let required = [
        (Field::Subject, &draft.subject),
        (Field::Date, &draft.date),
        (Field::Time, &draft.time),
        (Field::Location, &draft.location),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    let date = parse_date(&draft.date)
        .ok_or_else(|| ValidationError::InvalidDate(draft.date.trim().to_string()))?;
    let time = parse_hhmm(&draft.time)
        .ok_or_else(|| ValidationError::InvalidTime(draft.time.trim().to_string()))?;

    if !(MIN_DURATION..=MAX_DURATION).contains(&draft.duration) {
        return Err(ValidationError::InvalidDuration(draft.duration));
    }

    let students = EnrollmentResolver::new(directory).resolve(&draft.roster)?;
    if students.is_empty() {
        return Err(ValidationError::EmptyRoster);
    }

    Ok(ClassRecord {
        id: 0,
        subject: draft.subject.trim().to_string(),
        date,
        time,
        duration: draft.duration,
        location: draft.location.trim().to_string(),
        students,
        status: ClassStatus::Scheduled,
        attendance: AttendanceMap::new(),
    })
}
