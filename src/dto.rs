//! # MoodTunes — Request/Response DTOs
//!
//! Wire shapes for the journal backend. Each struct maps 1:1 to a JSON body
//! sent to or received from one endpoint.
//!
//! Conventions:
//! - `*Request`  → serialized as the request body
//! - `*Response` → deserialized from the backend's success envelope
//! - Client-side preconditions are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::{JournalEntry, MoodResult, MusicFeedback};

// ============================================================================
// Mood analysis
// ============================================================================

/// POST /api/analyze-mood
#[derive(Debug, Serialize, Validate)]
pub struct AnalyzeMoodRequest {
    #[validate(custom(function = "not_blank", message = "Text is required for mood analysis"))]
    pub text: String,
}

// ============================================================================
// Journal
// ============================================================================

/// POST /api/journal
#[derive(Debug, Serialize, Validate)]
pub struct CreateJournalEntryRequest {
    #[validate(custom(function = "not_blank", message = "Journal content is required"))]
    pub content: String,

    /// Serialized as `null` when the entry is saved without analysis
    pub mood: Option<MoodResult>,
}

/// GET /api/journal
#[derive(Debug, Deserialize)]
pub struct JournalListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// POST /api/journal
#[derive(Debug, Deserialize)]
pub struct JournalCreateResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub entry: Option<JournalEntry>,
    #[serde(default)]
    pub error: Option<Value>,
}

// ============================================================================
// Music feedback
// ============================================================================

/// GET /api/music-feedback
#[derive(Debug, Deserialize)]
pub struct MusicFeedbackResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub feedback: Vec<MusicFeedback>,
    #[serde(default)]
    pub error: Option<Value>,
}

fn default_success() -> bool {
    true
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
