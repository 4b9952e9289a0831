/// How the teacher picked the students of a new class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSelection {
    /// Names typed one by one.
    Names(Vec<String>),
    /// Inclusive roll-number range, raw as typed.
    RollRange { start: String, end: String },
}

impl RosterSelection {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RosterSelection::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        RosterSelection::RollRange {
            start: start.into(),
            end: end.into(),
        }
    }
}
