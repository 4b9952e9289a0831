pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod repository;
pub mod storage;

pub use repository::{ClassRepository, KvRepository, NotificationRepository};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
