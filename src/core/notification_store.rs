use crate::core::events::{ClassCreated, ClassEventSink};
use crate::db::NotificationRepository;
use crate::errors::AppResult;
use crate::models::NotificationRecord;
use crate::utils::date::now_millis;
use chrono::{NaiveDate, NaiveTime, Utc};

/// Most-recent-first log of notifications for students.
///
/// The log is never truncated.
pub struct NotificationStore<R> {
    repo: R,
    last_id: i64,
}

pub fn new_class_message(subject: &str, date: NaiveDate, time: NaiveTime) -> String {
    format!(
        "New class added: \"{}\" on {} at {}.",
        subject,
        date.format("%Y-%m-%d"),
        time.format("%H:%M")
    )
}

impl<R: NotificationRepository> NotificationStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo, last_id: 0 }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Prepend `notification`.
    pub fn append(&mut self, notification: NotificationRecord) -> AppResult<()> {
        let mut all = self.repo.load_notifications()?;
        all.insert(0, notification);
        self.repo.save_notifications(&all)
    }

    pub fn list(&self) -> AppResult<Vec<NotificationRecord>> {
        self.repo.load_notifications()
    }

    /// Acknowledge everything currently stored. Returns how many flipped.
    pub fn mark_all_read(&mut self) -> AppResult<usize> {
        let mut all = self.repo.load_notifications()?;
        let unread = all.iter().filter(|n| !n.read).count();
        if unread == 0 {
            return Ok(0);
        }

        for n in all.iter_mut() {
            n.read = true;
        }
        self.repo.save_notifications(&all)?;
        Ok(unread)
    }

    pub fn unread_count(&self) -> AppResult<usize> {
        Ok(self
            .repo
            .load_notifications()?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    fn next_id(&mut self, existing: &[NotificationRecord]) -> i64 {
        let floor = existing
            .iter()
            .map(|n| n.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        let id = now_millis().max(floor + 1);
        self.last_id = id;
        id
    }
}

impl<R: NotificationRepository> ClassEventSink for NotificationStore<R> {
    fn class_created(&mut self, event: &ClassCreated) -> AppResult<()> {
        let existing = self.repo.load_notifications()?;
        let id = self.next_id(&existing);
        let record = NotificationRecord::new_class(
            id,
            new_class_message(&event.subject, event.date, event.time),
            Utc::now(),
        );
        self.append(record)
    }
}
