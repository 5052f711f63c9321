use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::MusicFeedback;

/// How many records the "recent" view shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackFilter {
    #[default]
    All,
    Recent,
    HighScores,
}

impl FeedbackFilter {
    /// All → Recent → HighScores → All.
    pub fn next(self) -> Self {
        match self {
            FeedbackFilter::All => FeedbackFilter::Recent,
            FeedbackFilter::Recent => FeedbackFilter::HighScores,
            FeedbackFilter::HighScores => FeedbackFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackFilter::All => "All Entries",
            FeedbackFilter::Recent => "Recent",
            FeedbackFilter::HighScores => "High Scores",
        }
    }

    /// Expects records sorted most recent first.
    pub fn apply(self, records: &[MusicFeedback]) -> Vec<&MusicFeedback> {
        match self {
            FeedbackFilter::All => records.iter().collect(),
            FeedbackFilter::Recent => records.iter().take(RECENT_LIMIT).collect(),
            FeedbackFilter::HighScores => records.iter().filter(|f| f.is_high_score()).collect(),
        }
    }
}

impl fmt::Display for FeedbackFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeedbackFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FeedbackFilter::All),
            "recent" => Ok(FeedbackFilter::Recent),
            "high-scores" | "high_scores" | "high" => Ok(FeedbackFilter::HighScores),
            other => Err(format!("unknown feedback filter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub high_scores: usize,
    pub recent: usize,
}

pub fn sort_recent_first(records: &mut [MusicFeedback]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Mean mood score rounded to one decimal; 0 for no records.
///
/// Ties round away from zero on the exact binary value, so 7.25 shows as 7.3.
pub fn average_score(records: &[MusicFeedback]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: i64 = records.iter().map(|f| i64::from(f.mood_score)).sum();
    let mean = sum as f64 / records.len() as f64;
    Decimal::from_f64_retain(mean)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(mean)
}

pub fn stats(records: &[MusicFeedback]) -> FeedbackStats {
    FeedbackStats {
        total: records.len(),
        high_scores: records.iter().filter(|f| f.is_high_score()).count(),
        recent: records.len().min(RECENT_LIMIT),
    }
}
