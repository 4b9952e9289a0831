use super::class_record::DEFAULT_DURATION;
use super::roster::RosterSelection;

/// Input of `ClassStore::create`: what the teacher typed, not yet validated.
/// Date and time stay raw so that a blank field can be told apart from a
/// malformed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDraft {
    pub subject: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub location: String,
    pub roster: RosterSelection,
}

impl Default for ClassDraft {
    fn default() -> Self {
        Self {
            subject: String::new(),
            date: String::new(),
            time: String::new(),
            duration: DEFAULT_DURATION,
            location: String::new(),
            roster: RosterSelection::Names(Vec::new()),
        }
    }
}

impl ClassDraft {
    pub fn new(
        subject: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
        roster: RosterSelection,
    ) -> Self {
        Self {
            subject: subject.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
            roster,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }
}
