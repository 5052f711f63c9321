use chrono::Utc;

use super::claims::{self, CurrentUser};
use super::token_store::TokenStore;
use crate::error::{AppError, AppResult};

/// Authentication context handed to the API client.
///
/// Owns the token store; every accessor goes back to storage so the session
/// never serves a token that was cleared after it was created.
#[derive(Debug, Clone)]
pub struct Session {
    store: TokenStore,
}

impl Session {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// The stored token, or [`AppError::Unauthenticated`] when there is none.
    pub fn bearer(&self) -> AppResult<String> {
        self.token().ok_or(AppError::Unauthenticated)
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.token()
            .and_then(|token| claims::current_user(&token, Utc::now()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn sign_in(&self, token: &str) -> AppResult<Option<CurrentUser>> {
        self.store.store(token)?;
        let user = claims::current_user(token, Utc::now());
        match &user {
            Some(u) => tracing::info!(user_id = %u.id, "Signed in"),
            None => tracing::warn!("Stored a token whose claims could not be read"),
        }
        Ok(user)
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.store.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }
}
