use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::NotificationRecord;
use crate::ui::messages::{info, success};
use chrono::Local;

use super::{audit, open_notifications};

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notifications { read } = cmd {
        let mut notifications = open_notifications(cfg)?;
        let all = notifications.list()?;

        if all.is_empty() {
            info("No notifications.");
            return Ok(());
        }

        for n in &all {
            print_notification(n);
        }

        let unread = all.iter().filter(|n| !n.read).count();
        println!("\n{} notifications, {} unread", all.len(), unread);

        if *read {
            let flipped = notifications.mark_all_read()?;
            audit(
                notifications.repository().store(),
                "read",
                "student_notifications",
                &format!("{flipped} notifications marked as read"),
            );
            success(format!("{flipped} notifications marked as read."));
        }
    }

    Ok(())
}

fn print_notification(n: &NotificationRecord) {
    let marker = if n.read { " " } else { "●" };
    let when = n
        .timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");

    let mut lines = textwrap::wrap(&n.message, WRAP_WIDTH).into_iter();
    if let Some(first) = lines.next() {
        println!("{marker} {when} [{}] {first}", n.kind.as_str());
    }
    for rest in lines {
        println!("{:>width$}{rest}", "", width = 33);
    }
}
