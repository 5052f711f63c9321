//! Client core for the MoodTunes journal service.
//!
//! Talks to the journal backend (mood analysis, journal entries, music
//! feedback), validates what the classifier sends back, and turns the entry
//! history into paged chart points with a short trend summary.

pub mod api;
pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod feedback;
pub mod models;
pub mod mood;
pub mod trend;

pub use api::ApiClient;
pub use auth::{Session, TokenStore};
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind, ValidationError};
