use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::record_id::RecordId;

/// Rating left after listening to a mood playlist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MusicFeedback {
    pub id: RecordId,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[validate(range(min = 0, max = 10, message = "Mood score must be between 0 and 10"))]
    pub mood_score: i32,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

/// Scores at or above this count as "high" in feedback statistics.
pub const HIGH_SCORE_THRESHOLD: i32 = 8;

impl MusicFeedback {
    pub fn is_high_score(&self) -> bool {
        self.mood_score >= HIGH_SCORE_THRESHOLD
    }
}
