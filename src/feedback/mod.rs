pub mod export;
pub mod stats;

pub use stats::{average_score, sort_recent_first, stats, FeedbackFilter, FeedbackStats};
