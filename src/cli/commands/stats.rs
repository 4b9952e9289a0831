use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{self, StudentSummary, TeacherSummary};
use crate::errors::AppResult;
use crate::models::AttendanceStatus;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_mark, color_for_rate, paint};
use crate::utils::date::today;

use super::open_class_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { student, all } = cmd {
        let store = open_class_store(cfg)?;

        let identity = if *all {
            None
        } else {
            student.clone().or_else(|| cfg.student_name.clone())
        };

        match identity {
            Some(name) => print_student(&store.list(Some(&name))?, &name),
            None => print_teacher(&store.list(None)?),
        }
    }
    Ok(())
}

fn rate(value: u32) -> String {
    paint(&format!("{value}%"), color_for_rate(value))
}

fn print_teacher(classes: &[crate::models::ClassRecord]) {
    let s = TeacherSummary::compute(classes, today());

    header("Teacher overview");
    println!("Total classes      : {}", s.total_classes);
    println!("Completed classes  : {}", s.completed_classes);
    println!("Enrolled students  : {}", s.enrolled_students);
    println!("Today's classes    : {}", s.today_classes);
    println!("Attendance rate    : {}", rate(s.attendance_rate));

    let history = stats::classes_with_attendance(classes);
    if !history.is_empty() {
        header("Attendance history");
        let mut history = history;
        stats::sort_by_date_desc(&mut history);
        for c in history {
            let tally = c.tally();
            println!(
                "{} {} • {}/{} present ({})",
                c.date_str(),
                c.subject,
                tally.present,
                tally.total,
                rate(stats::percentage(tally.present, tally.marked))
            );
        }
    }
}

fn print_student(classes: &[crate::models::ClassRecord], student: &str) {
    let s = StudentSummary::compute(classes, student, today());
    let counts = stats::counts_by_status(classes, student);

    header(format!("Attendance of {student}"));
    println!("Enrolled classes   : {}", s.total_classes);
    println!("Completed classes  : {}", s.completed_classes);
    println!("Attended           : {}", s.attended);
    println!("Missed             : {}", s.missed);
    println!("Today's classes    : {}", s.today_classes);
    println!("Upcoming classes   : {}", s.upcoming_classes);
    println!("Attendance rate    : {}", rate(s.attendance_rate));

    if s.low_attendance() {
        warning(format!(
            "Attendance alert: {}% is below the required {}%.",
            s.attendance_rate,
            stats::LOW_ATTENDANCE_THRESHOLD
        ));
    }

    header("Marks");
    for status in AttendanceStatus::ALL {
        println!(
            "{:<12}: {}",
            paint(status.as_str(), color_for_mark(Some(status))),
            counts.get(Some(status))
        );
    }
    println!("{:<12}: {}", paint("not marked", color_for_mark(None)), counts.not_marked);
}
