//! Key-value storage: the local stand-in for the browser's storage area.
//!
//! Values are whole JSON documents. Writers always replace a value as a
//! whole, so a reader sees either the previous document or the next one.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TEACHER_CLASSES: &str = "teacher_classes";
pub const STUDENT_CLASSES: &str = "student_classes";
pub const STUDENT_NOTIFICATIONS: &str = "student_notifications";
/// Highest class id ever stored; outlives the deletion of that class.
pub const CLASS_ID_HIGH_WATER: &str = "teacher_class_seq";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write every entry or none of them.
    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()>;

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        self.set_many(&[(key, value)])
    }

    /// Number of writes ever made to `key`; 0 when never written.
    fn revision(&self, key: &str) -> AppResult<u64>;
}

/// SQLite-backed store (`storage` table).
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database file and make sure the schema is in place.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM storage WHERE key = ?1")?;
        let value = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(
                    "INSERT INTO storage (key, value, revision, updated_at)
                     VALUES (?1, ?2, 1, ?3)
                     ON CONFLICT(key) DO UPDATE SET
                        value = excluded.value,
                        revision = storage.revision + 1,
                        updated_at = excluded.updated_at",
                )?;
                for (key, value) in entries {
                    stmt.execute(params![key, value, now])?;
                }
            }
            tx.commit()
        })?;
        Ok(())
    }

    fn revision(&self, key: &str) -> AppResult<u64> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT revision FROM storage WHERE key = ?1")?;
        let rev: Option<i64> = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(rev.map(|r| r.max(0) as u64).unwrap_or(0))
    }
}

#[derive(Default)]
struct MemoryInner {
    values: HashMap<String, (String, u64)>,
    quota: Option<usize>,
}

impl MemoryInner {
    fn used_after(&self, entries: &[(&str, String)]) -> usize {
        let mut sizes: HashMap<&str, usize> = self
            .values
            .iter()
            .map(|(k, (v, _))| (k.as_str(), k.len() + v.len()))
            .collect();
        for (k, v) in entries {
            sizes.insert(*k, k.len() + v.len());
        }
        sizes.values().sum()
    }
}

/// In-memory store. Clones share the same data, the way two views of one
/// browser origin share its storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would take the store above `bytes` (keys + values).
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().quota = Some(bytes);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.inner.borrow().values.get(key).map(|(v, _)| v.clone()))
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();

        if let Some(quota) = inner.quota {
            let used = inner.used_after(entries);
            if used > quota {
                return Err(AppError::Persistence(format!(
                    "storage quota exceeded ({used} > {quota} bytes)"
                )));
            }
        }

        for (key, value) in entries {
            let entry = inner
                .values
                .entry((*key).to_string())
                .or_insert_with(|| (String::new(), 0));
            entry.0 = value.clone();
            entry.1 += 1;
        }
        Ok(())
    }

    fn revision(&self, key: &str) -> AppResult<u64> {
        Ok(self.inner.borrow().values.get(key).map(|(_, r)| *r).unwrap_or(0))
    }
}
