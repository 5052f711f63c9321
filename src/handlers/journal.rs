use serde_json::json;

use moodtunes::models::{JournalEntry, MoodResult};
use moodtunes::trend::{summarize, Pager};
use moodtunes::ApiClient;

use super::Output;

pub async fn list(client: &ApiClient, out: Output) -> anyhow::Result<()> {
    let mut entries = client.get_journal_entries().await?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    out.emit(&entries, || {
        if entries.is_empty() {
            return "No journal entries yet".into();
        }
        entries
            .iter()
            .map(describe_entry)
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

pub async fn add(client: &ApiClient, text: &str, skip_analysis: bool, out: Output) -> anyhow::Result<()> {
    let mood = if skip_analysis {
        None
    } else {
        Some(client.analyze_mood(text).await?)
    };
    save(client, text, mood.as_ref(), out).await
}

pub async fn save(
    client: &ApiClient,
    text: &str,
    mood: Option<&MoodResult>,
    out: Output,
) -> anyhow::Result<()> {
    let entry = client.post_journal_entry(text, mood).await?;
    out.emit(&entry, || format!("Saved entry {}\n{}", entry.id, describe_entry(&entry)))
}

pub async fn trend(client: &ApiClient, page: usize, page_size: usize, out: Output) -> anyhow::Result<()> {
    let entries = client.get_journal_entries().await?;
    let pager = Pager::at(entries.len(), page_size, page);
    let points = pager.points(&entries);
    let summary = summarize(&points);

    out.emit(
        &json!({
            "page": pager.page(),
            "page_count": pager.page_count(),
            "has_older": pager.has_older(),
            "has_newer": pager.has_newer(),
            "points": points,
            "summary": summary,
        }),
        || {
            let mut lines = vec![format!("Page {} of {}", pager.page() + 1, pager.page_count())];
            for p in &points {
                lines.push(format!(
                    "{:<14} {:>2} {} {}",
                    p.formatted_date,
                    p.mood_score,
                    "#".repeat(usize::from(p.mood_score)),
                    p.primary_mood.as_deref().unwrap_or("")
                ));
            }
            lines.push(format!("Trend: {:?} ({})", summary.trend, summary.message));
            lines.join("\n")
        },
    )
}

fn describe_entry(entry: &JournalEntry) -> String {
    let when = entry.created_at.format("%Y-%m-%d %H:%M");
    match &entry.mood {
        Some(mood) if !mood.primary_mood.is_empty() => format!(
            "[{}] {} ({}%)\n{}",
            when, mood.primary_mood, mood.confidence, entry.content
        ),
        _ => format!("[{}]\n{}", when, entry.content),
    }
}
