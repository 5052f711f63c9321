pub mod playlist;
pub mod score;
pub mod validate;

pub use score::{score_for, MoodLabel, NEUTRAL_SCORE};
pub use validate::validate_mood;
