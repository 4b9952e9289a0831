use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, is_absolute};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        if !is_absolute(file) {
            return Err(AppError::Config(format!(
                "Backup path must be absolute: {file}"
            )));
        }
        let dest = expand_tilde(file);
        BackupLogic::backup(cfg, &dest.to_string_lossy(), *compress, *force)?;
    }

    Ok(())
}
