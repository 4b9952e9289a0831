use crate::errors::ValidationError;
use crate::models::{RosterSelection, StudentDirectory};

/// Turns a roster selection into the names enrolled in a new class.
pub struct EnrollmentResolver<'a> {
    directory: &'a StudentDirectory,
}

impl<'a> EnrollmentResolver<'a> {
    pub fn new(directory: &'a StudentDirectory) -> Self {
        Self { directory }
    }

    /// May return an empty list; rejecting an empty roster is up to the caller.
    pub fn resolve(&self, selection: &RosterSelection) -> Result<Vec<String>, ValidationError> {
        match selection {
            RosterSelection::Names(names) => Ok(dedup_names(names)),
            RosterSelection::RollRange { start, end } => self.resolve_range(start, end),
        }
    }

    fn resolve_range(&self, start: &str, end: &str) -> Result<Vec<String>, ValidationError> {
        let (Some(s), Some(e)) = (parse_roll(start), parse_roll(end)) else {
            return Err(ValidationError::InvalidRange(format!(
                "roll numbers must be integers (got '{}'..'{}')",
                start.trim(),
                end.trim()
            )));
        };

        if s > e {
            return Err(ValidationError::InvalidRange(format!(
                "start {s} is greater than end {e}"
            )));
        }

        Ok(self
            .directory
            .in_roll_range(s, e)
            .map(|entry| entry.name.clone())
            .collect())
    }
}

fn parse_roll(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Trim, drop blanks, keep the first occurrence of each name.
fn dedup_names(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if !name.is_empty() && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}
