use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Claims issued by the journal backend's login endpoint.
///
/// `sub` is whatever identity the backend chose (numeric id or object id
/// string), so it is kept as a raw JSON value.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Value,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
}

/// Signed-in user as far as the client can tell from the stored token.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    pub fn user_id(&self) -> Option<String> {
        match &self.sub {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

/// Read the claims of a bearer token without checking its signature.
///
/// The client never holds the signing secret; the backend stays the authority
/// on validity. This only exposes who the token says we are and when it lapses.
pub fn decode_unverified(token: &str) -> AppResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| AppError::TokenStore(format!("Unreadable token: {}", e)))
}

/// `None` when the token is unreadable, carries no subject, or has expired.
pub fn current_user(token: &str, now: DateTime<Utc>) -> Option<CurrentUser> {
    let claims = match decode_unverified(token) {
        Ok(data) => data.claims,
        Err(e) => {
            tracing::debug!(error = %e, "Stored token could not be decoded");
            return None;
        }
    };

    if claims.is_expired_at(now) {
        tracing::info!("Stored token has expired");
        return None;
    }

    Some(CurrentUser {
        id: claims.user_id()?,
        expires_at: claims.expires_at(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    pub(crate) fn make_token(sub: Value, exp: i64) -> String {
        let claims = Claims {
            sub,
            exp: Some(exp),
            iat: Some(Utc::now().timestamp()),
            token_type: Some("access".into()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"backend-only-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_current_user_from_string_subject() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = make_token(json!("665f1c2e"), exp);
        let user = current_user(&token, Utc::now()).unwrap();
        assert_eq!(user.id, "665f1c2e");
        assert_eq!(user.expires_at.unwrap().timestamp(), exp);
    }

    #[test]
    fn test_current_user_from_numeric_subject() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = make_token(json!(42), exp);
        assert_eq!(current_user(&token, Utc::now()).unwrap().id, "42");
    }

    #[test]
    fn test_expired_token_has_no_current_user() {
        let exp = (Utc::now() - Duration::minutes(5)).timestamp();
        let token = make_token(json!("u1"), exp);
        assert!(current_user(&token, Utc::now()).is_none());
    }

    #[test]
    fn test_garbage_token_has_no_current_user() {
        assert!(current_user("not-a-jwt", Utc::now()).is_none());
        assert!(decode_unverified("not-a-jwt").is_err());
    }
}
