// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::models::ClassRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the attendance report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report for `classes` (optionally one student) to `file`,
    /// which must be an absolute path. Returns the number of rows written.
    pub fn export(
        classes: &[ClassRecord],
        format: ExportFormat,
        file: &str,
        student: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !crate::utils::path::is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        let path_buf = crate::utils::path::expand_tilde(file);
        let path = Path::new(&path_buf);

        ensure_writable(path, force)?;

        let rows = build_rows(classes, student);
        if rows.is_empty() {
            warning("No attendance rows to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
