//! Read side of the student dashboard.
//!
//! Reads the `student_classes` mirror and the notification log, and
//! re-reads them only when their storage revision moved.

use crate::core::notification_store::NotificationStore;
use crate::core::stats::{self, StatusCounts, StudentSummary};
use crate::db::{KeyValueStore, KvRepository, NotificationRepository};
use crate::errors::AppResult;
use crate::models::{ClassRecord, NotificationRecord};
use chrono::NaiveDate;

pub struct StudentView<S> {
    repo: KvRepository<S>,
    student: String,
    classes: Vec<ClassRecord>,
    notifications: Vec<NotificationRecord>,
    seen: (u64, u64),
}

impl<S: KeyValueStore> StudentView<S> {
    pub fn open(store: S, student: impl Into<String>) -> AppResult<Self> {
        let mut view = Self {
            repo: KvRepository::new(store),
            student: student.into(),
            classes: Vec::new(),
            notifications: Vec::new(),
            seen: (0, 0),
        };
        view.reload()?;
        Ok(view)
    }

    pub fn student(&self) -> &str {
        &self.student
    }

    /// Classes the student is enrolled in, in stored order.
    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Re-read if anything was written since the last read.
    /// Returns whether the view changed.
    pub fn refresh(&mut self) -> AppResult<bool> {
        if self.repo.student_revisions()? == self.seen {
            return Ok(false);
        }
        self.reload()?;
        Ok(true)
    }

    /// Acknowledge the whole notification list.
    pub fn mark_all_read(&mut self) -> AppResult<usize> {
        let flipped = NotificationStore::new(&mut self.repo).mark_all_read()?;
        self.reload()?;
        Ok(flipped)
    }

    pub fn attendance_rate(&self) -> u32 {
        stats::attendance_rate(&self.classes, Some(&self.student))
    }

    pub fn counts(&self) -> StatusCounts {
        stats::counts_by_status(&self.classes, &self.student)
    }

    pub fn summary(&self, today: NaiveDate) -> StudentSummary {
        StudentSummary::compute(&self.classes, &self.student, today)
    }

    fn reload(&mut self) -> AppResult<()> {
        let seen = self.repo.student_revisions()?;
        let student = self.student.as_str();
        self.classes = self
            .repo
            .load_student_classes()?
            .into_iter()
            .filter(|c| c.is_enrolled(student))
            .collect();
        self.notifications = self.repo.load_notifications()?;
        self.seen = seen;
        Ok(())
    }
}
