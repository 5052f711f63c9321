use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::JournalEntry;
use crate::mood::score_for;

pub const CHART_DATE_FORMAT: &str = "%b %-d, %Y";

/// One plotted point on the mood chart. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub mood_score: u8,
    #[serde(rename = "formattedDate")]
    pub formatted_date: String,
    pub primary_mood: Option<String>,
}

impl From<&JournalEntry> for ChartPoint {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            timestamp: entry.created_at,
            mood_score: score_for(entry),
            formatted_date: entry.created_at.format(CHART_DATE_FORMAT).to_string(),
            primary_mood: entry.primary_mood().map(str::to_string),
        }
    }
}
