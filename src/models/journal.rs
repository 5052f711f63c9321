use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record_id::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: RecordId,
    pub content: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub mood: Option<MoodResult>,
}

impl JournalEntry {
    pub fn primary_mood(&self) -> Option<&str> {
        self.mood
            .as_ref()
            .map(|m| m.primary_mood.as_str())
            .filter(|label| !label.trim().is_empty())
    }
}

/// Classifier output attached to an entry.
///
/// Fields default when absent so that stored entries with partial mood data
/// still deserialize; run [`crate::mood::validate::validate_mood`] before
/// trusting one that came off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodResult {
    pub primary_mood: String,
    pub confidence: f64,
    pub emotions: Vec<String>,
}
