use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{ClassDraft, RosterSelection};
use crate::ui::messages::success;

use super::{audit, open_class_store, open_notifications};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        subject,
        date,
        time,
        location,
        duration,
        students,
        from,
        to,
    } = cmd
    {
        let roster = match (from, to) {
            (Some(start), Some(end)) => RosterSelection::range(start.as_str(), end.as_str()),
            _ => RosterSelection::names(students.iter().cloned()),
        };

        let draft = ClassDraft::new(
            subject.as_str(),
            date.as_str(),
            time.as_str(),
            location.as_str(),
            roster,
        )
        .with_duration(*duration);

        let mut classes = open_class_store(cfg)?;
        let mut notifications = open_notifications(cfg)?;

        let record = classes.create(&draft, &mut notifications)?;

        let store = classes.repository().store();
        audit(
            store,
            "add",
            &record.id.to_string(),
            &format!(
                "{} on {} at {} ({} students)",
                record.subject,
                record.date_str(),
                record.time_str(),
                record.students.len()
            ),
        );
        audit(store, "notify", &record.id.to_string(), "new_class");

        success(format!(
            "Class #{} \"{}\" scheduled on {} at {} for {} students. Students notified.",
            record.id,
            record.subject,
            record.date_str(),
            record.time_str(),
            record.students.len()
        ));
    }

    Ok(())
}
