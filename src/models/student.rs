use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_DIRECTORY: &str = include_str!("../../data/students.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDirectoryEntry {
    pub name: String,
    pub roll: i64,
}

/// Read-only lookup table used for roll-range enrollment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDirectory {
    entries: Vec<StudentDirectoryEntry>,
}

impl StudentDirectory {
    pub fn new(entries: Vec<StudentDirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Directory shipped with the binary.
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_DIRECTORY)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let entries: Vec<StudentDirectoryEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "cannot read student directory {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn entries(&self) -> &[StudentDirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with `start <= roll <= end`, in directory order.
    pub fn in_roll_range(&self, start: i64, end: i64) -> impl Iterator<Item = &StudentDirectoryEntry> {
        self.entries
            .iter()
            .filter(move |e| e.roll >= start && e.roll <= end)
    }
}
