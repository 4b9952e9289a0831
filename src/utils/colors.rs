/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::{AttendanceStatus, ClassStatus};

/// Color of an attendance mark; unmarked students are grey.
pub fn color_for_mark(mark: Option<AttendanceStatus>) -> &'static str {
    match mark {
        Some(AttendanceStatus::Present) => GREEN,
        Some(AttendanceStatus::Absent) => RED,
        Some(AttendanceStatus::Late) => YELLOW,
        Some(AttendanceStatus::Excused) => BLUE,
        None => GREY,
    }
}

pub fn color_for_status(status: ClassStatus) -> &'static str {
    match status {
        ClassStatus::Scheduled => CYAN,
        ClassStatus::Completed => GREEN,
    }
}

/// Rate color:
/// \>=75 → green
/// \>=50 → yellow
/// else → red
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 75 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
