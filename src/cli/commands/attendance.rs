use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::AttendanceMap;
use crate::models::attendance::parse_mark;
use crate::models::class_record::initials;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{color_for_mark, color_for_status, paint};

use super::{audit, open_class_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        id,
        marks,
        all_present,
    } = cmd
    {
        let mut classes = open_class_store(cfg)?;

        let mut sheet = if *all_present {
            classes.mark_all_present(*id)?
        } else {
            AttendanceMap::new()
        };
        for raw in marks {
            let (name, status) = parse_mark(raw)?;
            sheet.insert(name, status);
        }

        if sheet.is_empty() {
            warning("No marks given: the class will be completed with an empty attendance sheet.");
        }

        let record = classes.save_attendance(*id, sheet)?;
        let tally = record.tally();

        audit(
            classes.repository().store(),
            "attendance",
            &record.id.to_string(),
            &format!(
                "{} marked, {} present of {}",
                tally.marked, tally.present, tally.total
            ),
        );

        println!(
            "{} • {} at {} [{}]",
            record.subject,
            record.date_str(),
            record.time_str(),
            paint(record.status.as_str(), color_for_status(record.status))
        );
        for student in &record.students {
            let mark = record.mark_of(student);
            let label = mark.map(|m| m.as_str()).unwrap_or("not marked");
            println!(
                "  [{:<3}] {:<28} {}",
                initials(student),
                student,
                paint(label, color_for_mark(mark))
            );
        }

        success(format!(
            "Attendance saved: {} of {} marked, {} present.",
            tally.marked, tally.total, tally.present
        ));
    }

    Ok(())
}
