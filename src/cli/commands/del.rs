use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use super::{audit, open_class_store};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut classes = open_class_store(cfg)?;

        // fail on unknown ids before prompting
        let target = classes.get(*id)?;

        if !*yes {
            let prompt = format!(
                "Delete class #{} \"{}\" on {}? This action is irreversible.",
                target.id,
                target.subject,
                target.date_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = classes.delete(*id)?;
        audit(
            classes.repository().store(),
            "del",
            &removed.id.to_string(),
            &format!("{} on {}", removed.subject, removed.date_str()),
        );

        success(format!(
            "Class #{} \"{}\" has been removed from the schedule.",
            removed.id, removed.subject
        ));
    }

    Ok(())
}
