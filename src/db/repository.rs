//! Typed repositories over a `KeyValueStore`.

use crate::db::storage::{
    CLASS_ID_HIGH_WATER, KeyValueStore, STUDENT_CLASSES, STUDENT_NOTIFICATIONS, TEACHER_CLASSES,
};
use crate::errors::{AppError, AppResult};
use crate::models::{ClassRecord, NotificationRecord};
use serde::de::DeserializeOwned;

/// Source of truth for class records.
pub trait ClassRepository {
    fn load_classes(&self) -> AppResult<Vec<ClassRecord>>;

    /// Persist the whole collection; returns only once it is durable.
    fn save_classes(&mut self, classes: &[ClassRecord]) -> AppResult<()>;

    /// Highest id ever saved, deleted classes included; 0 when none.
    fn highest_issued_id(&self) -> AppResult<i64>;
}

pub trait NotificationRepository {
    fn load_notifications(&self) -> AppResult<Vec<NotificationRecord>>;

    fn save_notifications(&mut self, notifications: &[NotificationRecord]) -> AppResult<()>;
}

/// JSON documents under the well-known storage keys.
pub struct KvRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The copy the student side reads.
    pub fn load_student_classes(&self) -> AppResult<Vec<ClassRecord>> {
        read_classes(&self.store, STUDENT_CLASSES)
    }

    /// Revisions of (student classes, notifications).
    pub fn student_revisions(&self) -> AppResult<(u64, u64)> {
        Ok((
            self.store.revision(STUDENT_CLASSES)?,
            self.store.revision(STUDENT_NOTIFICATIONS)?,
        ))
    }
}

fn read_list<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> AppResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Class collections must only mark students they enroll.
fn read_classes<S: KeyValueStore>(store: &S, key: &str) -> AppResult<Vec<ClassRecord>> {
    let classes: Vec<ClassRecord> = read_list(store, key)?;
    for class in &classes {
        if let Some(stranger) = class.attendance.keys().find(|name| !class.is_enrolled(name)) {
            return Err(AppError::Persistence(format!(
                "{key}: class {} marks '{stranger}', who is not enrolled",
                class.id
            )));
        }
    }
    Ok(classes)
}

impl<S: KeyValueStore> ClassRepository for KvRepository<S> {
    fn load_classes(&self) -> AppResult<Vec<ClassRecord>> {
        read_classes(&self.store, TEACHER_CLASSES)
    }

    /// Writes the teacher collection, its student mirror and the id
    /// high-water mark together.
    fn save_classes(&mut self, classes: &[ClassRecord]) -> AppResult<()> {
        let json = serde_json::to_string(classes)?;
        let high_water = classes
            .iter()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            .max(self.highest_issued_id()?);

        self.store.set_many(&[
            (TEACHER_CLASSES, json.clone()),
            (STUDENT_CLASSES, json),
            (CLASS_ID_HIGH_WATER, high_water.to_string()),
        ])
    }

    fn highest_issued_id(&self) -> AppResult<i64> {
        match self.store.get(CLASS_ID_HIGH_WATER)? {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Persistence(format!("{CLASS_ID_HIGH_WATER}: not an id: '{raw}'"))
            }),
            None => Ok(0),
        }
    }
}

impl<S: KeyValueStore> NotificationRepository for KvRepository<S> {
    fn load_notifications(&self) -> AppResult<Vec<NotificationRecord>> {
        read_list(&self.store, STUDENT_NOTIFICATIONS)
    }

    fn save_notifications(&mut self, notifications: &[NotificationRecord]) -> AppResult<()> {
        let json = serde_json::to_string(notifications)?;
        self.store.set(STUDENT_NOTIFICATIONS, json)
    }
}

impl<T: NotificationRepository + ?Sized> NotificationRepository for &mut T {
    fn load_notifications(&self) -> AppResult<Vec<NotificationRecord>> {
        (**self).load_notifications()
    }

    fn save_notifications(&mut self, notifications: &[NotificationRecord]) -> AppResult<()> {
        (**self).save_notifications(notifications)
    }
}
