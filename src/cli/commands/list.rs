use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats;
use crate::errors::{AppResult, ValidationError};
use crate::models::ClassRecord;
use crate::utils::table::Table;
use crate::utils::date;
use crate::utils::time::format_duration;

use super::open_class_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        student,
        date: on_date,
        upcoming,
    } = cmd
    {
        let classes = open_class_store(cfg)?.list(student.as_deref())?;

        let mut selected: Vec<&ClassRecord> = match on_date {
            Some(raw) => {
                let d = date::parse_date(raw)
                    .ok_or_else(|| ValidationError::InvalidDate(raw.clone()))?;
                stats::classes_on_date(&classes, d)
            }
            None if *upcoming => stats::upcoming_classes(&classes, date::today()),
            None => classes.iter().collect(),
        };

        if selected.is_empty() {
            println!("No classes found.");
            return Ok(());
        }

        stats::sort_by_date_desc(&mut selected);
        print!("{}", render(&selected));
    }
    Ok(())
}

fn render(classes: &[&ClassRecord]) -> String {
    let mut table = Table::with_headers(&[
        "ID", "DATE", "TIME", "DURATION", "SUBJECT", "LOCATION", "STUDENTS", "MARKED", "STATUS",
    ]);

    for c in classes {
        let tally = c.tally();
        table.add_row(vec![
            c.id.to_string(),
            c.date_str(),
            c.time_str(),
            format_duration(c.duration),
            c.subject.clone(),
            c.location.clone(),
            tally.total.to_string(),
            format!("{}/{}", tally.marked, tally.total),
            c.status.as_str().to_string(),
        ]);
    }

    table.render()
}
