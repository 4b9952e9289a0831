use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::{audit, open_class_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        student,
        force,
    } = cmd
    {
        let store = open_class_store(cfg)?;
        let classes = store.list(student.as_deref())?;

        let rows = ExportLogic::export(&classes, *format, file, student.as_deref(), *force)?;

        if rows > 0 {
            audit(
                store.repository().store(),
                "export",
                file,
                &format!("{rows} rows as {}", format.as_str()),
            );
        }
    }

    Ok(())
}
