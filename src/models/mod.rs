pub mod feedback;
pub mod journal;
pub mod record_id;
pub mod timestamp;

pub use feedback::MusicFeedback;
pub use journal::{JournalEntry, MoodResult};
pub use record_id::RecordId;
