pub mod add;
pub mod attendance;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod notifications;
pub mod stats;
pub mod students;

use crate::config::Config;
use crate::core::{ClassStore, NotificationStore};
use crate::db::{KvRepository, SqliteStore};
use crate::errors::AppResult;

pub(crate) type TeacherStore = ClassStore<KvRepository<SqliteStore>>;
pub(crate) type Notifications = NotificationStore<KvRepository<SqliteStore>>;

/// Teacher-side class store over the configured database.
pub(crate) fn open_class_store(cfg: &Config) -> AppResult<TeacherStore> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(ClassStore::new(
        KvRepository::new(store),
        cfg.student_directory()?,
    ))
}

/// Notification log over its own connection to the same database.
pub(crate) fn open_notifications(cfg: &Config) -> AppResult<Notifications> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(NotificationStore::new(KvRepository::new(store)))
}

/// Write to the internal log without failing the command.
pub(crate) fn audit(store: &SqliteStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = crate::db::log::ttlog(store.conn(), operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {e}"));
    }
}
