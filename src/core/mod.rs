pub mod backup;
pub mod class_store;
pub mod enrollment;
pub mod events;
pub mod log;
pub mod notification_store;
pub mod stats;
pub mod student_view;

pub use class_store::ClassStore;
pub use enrollment::EnrollmentResolver;
pub use events::{ClassCreated, ClassEventSink};
pub use notification_store::NotificationStore;
pub use student_view::StudentView;
