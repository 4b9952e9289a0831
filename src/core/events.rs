use crate::errors::AppResult;
use crate::models::ClassRecord;
use chrono::{NaiveDate, NaiveTime};

/// Raised by `ClassStore::create` once the new class is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCreated {
    pub class_id: i64,
    pub subject: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ClassCreated {
    pub fn from_record(record: &ClassRecord) -> Self {
        Self {
            class_id: record.id,
            subject: record.subject.clone(),
            date: record.date,
            time: record.time,
        }
    }
}

/// Consumer of class lifecycle events (the student notification log).
pub trait ClassEventSink {
    fn class_created(&mut self, event: &ClassCreated) -> AppResult<()>;
}

/// Collects events; handy when nobody needs to be notified.
impl ClassEventSink for Vec<ClassCreated> {
    fn class_created(&mut self, event: &ClassCreated) -> AppResult<()> {
        self.push(event.clone());
        Ok(())
    }
}
