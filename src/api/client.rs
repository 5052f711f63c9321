use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use validator::Validate;

use super::in_flight::{Action, InFlight, InFlightGuard};
use super::response::{check_response, message_from_value};
use crate::auth::Session;
use crate::config::Config;
use crate::dto::{
    AnalyzeMoodRequest, CreateJournalEntryRequest, JournalCreateResponse, JournalListResponse,
    MusicFeedbackResponse,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{JournalEntry, MoodResult, MusicFeedback};
use crate::mood::validate_mood;

/// Gateway to the journal backend.
///
/// Every call is a single attempt: no retries, no backoff. The bearer token is
/// read from the session right before each request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    in_flight: InFlight,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            in_flight: InFlight::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/journal
    pub async fn get_journal_entries(&self) -> AppResult<Vec<JournalEntry>> {
        let resp = self.send(self.request(Method::GET, "/api/journal")?).await?;
        let body: JournalListResponse = resp.json().await?;
        envelope_ok(body.success, body.error.as_ref())?;

        tracing::debug!(count = body.entries.len(), "Fetched journal entries");
        Ok(body.entries)
    }

    /// POST /api/journal
    ///
    /// Content and any attached mood are validated first; nothing is sent if
    /// either is rejected.
    pub async fn post_journal_entry(
        &self,
        content: &str,
        mood: Option<&MoodResult>,
    ) -> AppResult<JournalEntry> {
        let mood = mood.map(MoodResult::validated).transpose()?;
        let req = CreateJournalEntryRequest {
            content: content.to_string(),
            mood,
        };
        req.validate().map_err(ValidationError::from)?;

        let _guard = self.begin(Action::SaveEntry)?;
        let resp = self
            .send(self.request(Method::POST, "/api/journal")?.json(&req))
            .await?;
        let body: JournalCreateResponse = resp.json().await?;
        envelope_ok(body.success, body.error.as_ref())?;

        let entry = body
            .entry
            .ok_or_else(|| AppError::RequestFailed("Response did not include the saved entry".into()))?;
        tracing::info!(entry_id = %entry.id, has_mood = entry.mood.is_some(), "Journal entry saved");
        Ok(entry)
    }

    /// POST /api/analyze-mood
    ///
    /// The classifier's answer goes through [`validate_mood`] before it is
    /// returned.
    pub async fn analyze_mood(&self, text: &str) -> AppResult<MoodResult> {
        let req = AnalyzeMoodRequest {
            text: text.to_string(),
        };
        req.validate().map_err(ValidationError::from)?;

        let _guard = self.begin(Action::AnalyzeMood)?;
        let resp = self
            .send(self.request(Method::POST, "/api/analyze-mood")?.json(&req))
            .await?;
        let raw: Value = resp.json().await?;
        let mood = validate_mood(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Classifier returned invalid mood data");
            e
        })?;

        tracing::info!(
            primary_mood = %mood.primary_mood,
            confidence = mood.confidence,
            "Mood analyzed"
        );
        Ok(mood)
    }

    /// GET /api/music-feedback
    pub async fn get_music_feedback(&self) -> AppResult<Vec<MusicFeedback>> {
        let resp = self
            .send(self.request(Method::GET, "/api/music-feedback")?)
            .await?;
        let body: MusicFeedbackResponse = resp.json().await?;
        envelope_ok(body.success, body.error.as_ref())?;

        for record in &body.feedback {
            record.validate().map_err(ValidationError::from)?;
        }
        tracing::debug!(count = body.feedback.len(), "Fetched music feedback");
        Ok(body.feedback)
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let token = self.session.bearer()?;
        Ok(self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json"))
    }

    async fn send(&self, req: RequestBuilder) -> AppResult<reqwest::Response> {
        let resp = req.send().await?;
        check_response(resp).await
    }

    fn begin(&self, action: Action) -> AppResult<InFlightGuard> {
        self.in_flight.try_begin(action).ok_or(AppError::Busy(action))
    }
}

/// A 2xx response can still report `success: false` in its envelope.
fn envelope_ok(success: bool, error: Option<&Value>) -> AppResult<()> {
    if success {
        return Ok(());
    }
    let message = error
        .and_then(|e| match e {
            Value::String(s) => Some(s.clone()),
            other => message_from_value(other),
        })
        .unwrap_or_else(|| "Request was not successful".into());
    Err(AppError::RequestFailed(message))
}
