//! Mood label → 0–10 chart score.
//!
//! Labels arrive from the classifier with a decorative emoji suffix
//! (`"Happy 😊"`). Lookup goes through [`normalize_label`], so `"happy"`,
//! `"Happy"` and `" HAPPY😊 "` all resolve to the same entry.

use serde::{Deserialize, Serialize};

use crate::models::JournalEntry;

/// Score used for absent or unrecognised labels.
pub const NEUTRAL_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Excited,
    Happy,
    Grateful,
    Motivated,
    Calm,
    Hopeful,
    Neutral,
    Tired,
    Anxious,
    Lonely,
    Sad,
    Angry,
    Heartbroken,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 13] = [
        MoodLabel::Excited,
        MoodLabel::Happy,
        MoodLabel::Grateful,
        MoodLabel::Motivated,
        MoodLabel::Calm,
        MoodLabel::Hopeful,
        MoodLabel::Neutral,
        MoodLabel::Tired,
        MoodLabel::Anxious,
        MoodLabel::Lonely,
        MoodLabel::Sad,
        MoodLabel::Angry,
        MoodLabel::Heartbroken,
    ];

    /// The label as the classifier emits it, suffix included.
    pub fn label(self) -> &'static str {
        match self {
            MoodLabel::Excited => "Excited 🤩",
            MoodLabel::Happy => "Happy 😊",
            MoodLabel::Grateful => "Grateful 🙏",
            MoodLabel::Motivated => "Motivated 💪",
            MoodLabel::Calm => "Calm 😌",
            MoodLabel::Hopeful => "Hopeful 🌱",
            MoodLabel::Neutral => "Neutral 😐",
            MoodLabel::Tired => "Tired 😴",
            MoodLabel::Anxious => "Anxious 😰",
            MoodLabel::Lonely => "Lonely 🥺",
            MoodLabel::Sad => "Sad 😢",
            MoodLabel::Angry => "Angry 😠",
            MoodLabel::Heartbroken => "Heartbroken 💔",
        }
    }

    /// Bare name without the suffix.
    pub fn name(self) -> &'static str {
        match self.label().split_once(' ') {
            Some((name, _)) => name,
            None => self.label(),
        }
    }

    pub fn score(self) -> u8 {
        match self {
            MoodLabel::Excited => 9,
            MoodLabel::Happy | MoodLabel::Grateful | MoodLabel::Motivated => 8,
            MoodLabel::Calm | MoodLabel::Hopeful => 7,
            MoodLabel::Neutral => 5,
            MoodLabel::Tired => 4,
            MoodLabel::Anxious | MoodLabel::Lonely => 3,
            MoodLabel::Sad | MoodLabel::Angry => 2,
            MoodLabel::Heartbroken => 1,
        }
    }

    pub fn from_label(raw: &str) -> Option<MoodLabel> {
        let key = normalize_label(raw);
        if key.is_empty() {
            return None;
        }
        MoodLabel::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase() == key)
    }
}

/// Trim, strip trailing non-alphanumeric decoration, lowercase.
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .trim()
        .to_lowercase()
}

pub fn score_for_label(label: Option<&str>) -> u8 {
    label
        .and_then(MoodLabel::from_label)
        .map(MoodLabel::score)
        .unwrap_or(NEUTRAL_SCORE)
}

pub fn score_for(entry: &JournalEntry) -> u8 {
    score_for_label(entry.primary_mood())
}
