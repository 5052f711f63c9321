use serde::{Deserialize, Serialize};

use super::score::normalize_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistKind {
    /// Music that matches the detected mood.
    #[default]
    Match,
    /// Music meant to lift the listener out of it.
    Uplift,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub mood: &'static str,
    pub kind: PlaylistKind,
    pub id: &'static str,
    pub title: &'static str,
}

impl Playlist {
    pub fn embed_url(&self) -> String {
        format!(
            "https://open.spotify.com/embed/track/{}?utm_source=generator",
            self.id
        )
    }
}

struct MoodPlaylists {
    mood: &'static str,
    matching: (&'static str, &'static str),
    uplift: (&'static str, &'static str),
}

const PLAYLISTS: &[MoodPlaylists] = &[
    MoodPlaylists {
        mood: "Happy",
        matching: ("27670o0opGxJkHKAO1voLz", "Good Vibes"),
        uplift: ("7e6qTHVfRdaYsio90s1fHC", "Mood Booster"),
    },
    MoodPlaylists {
        mood: "Sad",
        matching: ("37i9dQZF1DX7qK8ma5wgG1", "Sad Songs"),
        uplift: ("37i9dQZF1DX3Ogo9pFvBkY", "Happy Beats"),
    },
    MoodPlaylists {
        mood: "Angry",
        matching: ("37i9dQZF1DX5q67ZpWyRrZ", "Anger Management"),
        uplift: ("37i9dQZF1DXdPec7aLTmlC", "Calm Vibes"),
    },
    MoodPlaylists {
        mood: "Calm",
        matching: ("37i9dQZF1DX3Ogo9pFvBkY", "Peaceful Piano"),
        uplift: ("37i9dQZF1DX3rxVfibe1L0", "Happy Hits"),
    },
    MoodPlaylists {
        mood: "Excited",
        matching: ("37i9dQZF1DX76Wlfdnj7AP", "Energy Boost"),
        uplift: ("37i9dQZF1DX3rxVfibe1L0", "Happy Hits"),
    },
    MoodPlaylists {
        mood: "Heartbroken",
        matching: ("37i9dQZF1DX7qK8ma5wgG1", "Sad Songs"),
        uplift: ("37i9dQZF1DX3rxVfibe1L0", "Happy Hits"),
    },
    MoodPlaylists {
        mood: "Motivated",
        matching: ("37i9dQZF1DX76Wlfdnj7AP", "Energy Boost"),
        uplift: ("37i9dQZF1DX3rxVfibe1L0", "Happy Hits"),
    },
];

/// Pick a playlist for a mood label such as `"Sad 😢"`.
///
/// Only the first word of the label is considered. Moods without their own
/// playlists get the Happy/match playlist regardless of `kind`.
pub fn recommend(mood_label: &str, kind: PlaylistKind) -> Playlist {
    let base = mood_label.split_whitespace().next().unwrap_or_default();
    let key = normalize_label(base);

    match PLAYLISTS.iter().find(|p| p.mood.to_lowercase() == key) {
        Some(entry) => {
            let (id, title) = match kind {
                PlaylistKind::Match => entry.matching,
                PlaylistKind::Uplift => entry.uplift,
            };
            Playlist {
                mood: entry.mood,
                kind,
                id,
                title,
            }
        }
        None => {
            tracing::debug!(mood = %mood_label, "No playlist for mood, using default");
            let fallback = &PLAYLISTS[0];
            Playlist {
                mood: fallback.mood,
                kind: PlaylistKind::Match,
                id: fallback.matching.0,
                title: fallback.matching.1,
            }
        }
    }
}
