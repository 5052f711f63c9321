use std::path::Path;

use chrono::Utc;
use serde_json::json;

use moodtunes::feedback::export::write_report;
use moodtunes::feedback::{average_score, sort_recent_first, stats, FeedbackFilter};
use moodtunes::ApiClient;

use super::Output;

pub async fn history(
    client: &ApiClient,
    filter: FeedbackFilter,
    export_dir: Option<&Path>,
    out: Output,
) -> anyhow::Result<()> {
    let mut records = client.get_music_feedback().await?;
    sort_recent_first(&mut records);

    // The report always covers every record, whatever the view filter.
    let report = match export_dir {
        Some(dir) => Some(write_report(dir, &records, Utc::now().date_naive())?),
        None => None,
    };

    let summary = stats(&records);
    let average = average_score(&records);
    let shown = filter.apply(&records);

    out.emit(
        &json!({
            "filter": filter.label(),
            "stats": summary,
            "average_score": average,
            "feedback": shown,
            "report": report.as_ref().map(|p| p.display().to_string()),
        }),
        || {
            let mut lines = vec![
                format!(
                    "{} feedback records, {} high scores, average {:.1}",
                    summary.total, summary.high_scores, average
                ),
                format!("Showing: {}", filter),
            ];
            for f in &shown {
                lines.push(format!(
                    "{}  {:>2}/10  {}",
                    f.created_at.format("%b %-d, %Y %-I:%M %p"),
                    f.mood_score,
                    f.feedback_text.as_deref().unwrap_or("")
                ));
            }
            if let Some(path) = &report {
                lines.push(format!("Report written to {}", path.display()));
            }
            lines.join("\n")
        },
    )
}
