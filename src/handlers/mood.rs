use serde_json::json;

use moodtunes::mood::playlist::{recommend, PlaylistKind};
use moodtunes::mood::score::score_for_label;
use moodtunes::ApiClient;

use super::Output;

pub async fn analyze(client: &ApiClient, text: &str, save: bool, out: Output) -> anyhow::Result<()> {
    let mood = client.analyze_mood(text).await?;
    let score = score_for_label(Some(&mood.primary_mood));
    let suggestion = recommend(&mood.primary_mood, PlaylistKind::Match);

    out.emit(
        &json!({ "mood": mood, "mood_score": score, "playlist": suggestion, "playlist_url": suggestion.embed_url() }),
        || {
            let mut lines = vec![
                format!("Primary mood: {}", mood.primary_mood),
                format!("Confidence:   {}%", mood.confidence),
                format!("Mood score:   {}/10", score),
            ];
            if !mood.emotions.is_empty() {
                lines.push(format!("Emotions:     {}", mood.emotions.join(", ")));
            }
            lines.push(format!("Listen:       {} ({})", suggestion.title, suggestion.embed_url()));
            lines.join("\n")
        },
    )?;

    if save {
        super::journal::save(client, text, Some(&mood), out).await?;
    }
    Ok(())
}

pub fn playlist(mood: &str, kind: PlaylistKind, out: Output) -> anyhow::Result<()> {
    let suggestion = recommend(mood, kind);
    out.emit(
        &json!({ "playlist": suggestion, "url": suggestion.embed_url() }),
        || format!("{} ({}): {}", suggestion.title, suggestion.mood, suggestion.embed_url()),
    )
}
