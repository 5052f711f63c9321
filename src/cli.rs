use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use moodtunes::feedback::FeedbackFilter;
use moodtunes::mood::playlist::PlaylistKind;

/// Top-level CLI parser for the `moodtunes` binary.
#[derive(Debug, Parser)]
#[command(name = "moodtunes", version, about = "Mood journal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the mood of a piece of text
    Analyze {
        text: String,
        /// Also save the text as a journal entry with the result attached
        #[arg(long)]
        save: bool,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Mood chart for one page of history, with trend summary
    Trend {
        /// 0 is the most recent page; larger values go further back
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Music feedback history
    Feedback {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Write a CSV report into this directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Playlist suggestion for a mood label
    Playlist {
        mood: String,
        /// Suggest music to lift the mood instead of matching it
        #[arg(long)]
        uplift: bool,
    },
    /// Stored credentials
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum JournalCommands {
    /// List saved entries, most recent first
    List,
    /// Save a new entry (analyzed first unless --skip-analysis)
    Add {
        text: String,
        #[arg(long)]
        skip_analysis: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TokenCommands {
    /// Store a bearer token obtained from the login flow
    Set { token: String },
    /// Forget the stored token
    Clear,
    /// Show who the stored token belongs to
    Status,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FilterArg {
    All,
    Recent,
    HighScores,
}

impl From<FilterArg> for FeedbackFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FeedbackFilter::All,
            FilterArg::Recent => FeedbackFilter::Recent,
            FilterArg::HighScores => FeedbackFilter::HighScores,
        }
    }
}

pub fn playlist_kind(uplift: bool) -> PlaylistKind {
    if uplift {
        PlaylistKind::Uplift
    } else {
        PlaylistKind::Match
    }
}
