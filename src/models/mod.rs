pub mod attendance;
pub mod class_record;
pub mod class_status;
pub mod draft;
pub mod notification;
pub mod roster;
pub mod student;

pub use attendance::{AttendanceMap, AttendanceStatus};
pub use class_record::{AttendanceTally, ClassRecord};
pub use class_status::ClassStatus;
pub use draft::ClassDraft;
pub use notification::{NotificationKind, NotificationRecord};
pub use roster::RosterSelection;
pub use student::{StudentDirectory, StudentDirectoryEntry};
