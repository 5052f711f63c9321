use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::models::MusicFeedback;

pub const CSV_HEADER: &str = "Date,Mood Score,Feedback";
const ROW_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn export_filename(today: NaiveDate) -> String {
    format!("music-feedback-{}.csv", today.format("%Y-%m-%d"))
}

/// Render the feedback report. Rows follow the order of `records`.
pub fn to_csv(records: &[MusicFeedback]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for f in records {
        lines.push(format!(
            "{},{},{}",
            f.created_at.format(ROW_DATE_FORMAT),
            f.mood_score,
            escape_field(f.feedback_text.as_deref().unwrap_or_default()),
        ));
    }
    lines.join("\n")
}

/// Write the report into `dir` and return the full path.
pub fn write_report(dir: &Path, records: &[MusicFeedback], today: NaiveDate) -> AppResult<PathBuf> {
    let path = dir.join(export_filename(today));
    fs::write(&path, to_csv(records))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("write {}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), rows = records.len(), "Feedback report written");
    Ok(path)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
