//! Status-code classification for backend responses.
//!
//! Keeps the per-endpoint code in [`super::client`] down to request
//! construction and body mapping.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Pass successful responses through; turn everything else into an [`AppError`].
///
/// - **401** → [`AppError::SessionExpired`]
/// - **422** → [`AppError::Rejected`] with the body verbatim
/// - **5xx** → [`AppError::Server`] with the backend's message
/// - anything else non-success → [`AppError::RequestFailed`]
pub async fn check_response(resp: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "Failed to read error body");
            String::new()
        }
    };
    let err = classify(status, &body);
    tracing::warn!(status = status.as_u16(), error = %err, "Backend returned an error");
    Err(err)
}

pub fn classify(status: StatusCode, body: &str) -> AppError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    match status {
        StatusCode::UNAUTHORIZED => AppError::SessionExpired,
        StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::Rejected(parsed.unwrap_or_else(|| Value::String(body.to_string())))
        }
        s if s.is_server_error() => AppError::Server {
            status: s.as_u16(),
            message: best_message(parsed.as_ref(), body, s),
        },
        s => AppError::RequestFailed(best_message(parsed.as_ref(), body, s)),
    }
}

/// Human-readable message from an error payload.
///
/// Looks at `error` (string or `{message}`), then `message`, then `detail`,
/// then the raw text, then the status line.
fn best_message(parsed: Option<&Value>, body: &str, status: StatusCode) -> String {
    if let Some(msg) = parsed.and_then(message_from_value) {
        return msg;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && parsed.is_none() {
        return trimmed.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

pub(crate) fn message_from_value(value: &Value) -> Option<String> {
    for key in ["error", "message", "detail"] {
        match value.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(nested @ Value::Object(_)) => {
                if let Some(msg) = message_from_value(nested) {
                    return Some(msg);
                }
            }
            _ => {}
        }
    }
    None
}
