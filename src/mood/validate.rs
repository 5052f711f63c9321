//! Boundary check between the remote classifier and persisted state.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::MoodResult;

/// Validate and normalize untrusted mood data.
///
/// Rules are applied in order and the first failure wins: object shape,
/// primary mood, confidence, emotions. The result has a trimmed primary mood,
/// confidence rounded to two decimals and emotions with blanks dropped.
pub fn validate_mood(value: &Value) -> Result<MoodResult, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let primary_mood = primary_mood(obj)?;
    let confidence = confidence(obj)?;
    let emotions = emotions(obj)?;

    Ok(MoodResult {
        primary_mood,
        confidence,
        emotions,
    })
}

impl MoodResult {
    /// Re-run [`validate_mood`] on an already typed value.
    pub fn validated(&self) -> Result<MoodResult, ValidationError> {
        let value = serde_json::to_value(self).map_err(|_| ValidationError::NotAnObject)?;
        validate_mood(&value)
    }
}

fn primary_mood(obj: &Map<String, Value>) -> Result<String, ValidationError> {
    obj.get("primary_mood")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::EmptyPrimaryMood)
}

fn confidence(obj: &Map<String, Value>) -> Result<f64, ValidationError> {
    let raw = match obj.get("confidence") {
        None | Some(Value::Null) => return Err(ValidationError::MissingConfidence),
        Some(raw) => raw,
    };

    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| ValidationError::InvalidConfidence(raw.to_string()))?;

    if value <= 0.0 || value > 100.0 {
        return Err(ValidationError::ConfidenceOutOfRange(value));
    }

    let rounded = round2(value);
    if rounded <= 0.0 {
        return Err(ValidationError::ConfidenceOutOfRange(value));
    }
    Ok(rounded)
}

fn emotions(obj: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
    let items = match obj.get("emotions") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::EmotionsNotArray),
    };

    let mut cleaned = Vec::with_capacity(items.len());
    for item in items {
        let text = match item {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return Err(ValidationError::EmotionNotString),
        };
        if !text.is_empty() {
            cleaned.push(text);
        }
    }
    Ok(cleaned)
}

/// Round to two decimals on the exact decimal expansion of the float, so a
/// value stored just below a midpoint (57.005 → 57.00499…) rounds down.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_normalizes_valid_result() {
        let result = validate_mood(&json!({
            "primary_mood": "Happy 😊",
            "confidence": 57.005,
            "emotions": ["Joy", "", " calm "]
        }))
        .unwrap();
        assert_eq!(
            result,
            MoodResult {
                primary_mood: "Happy 😊".into(),
                confidence: 57.0,
                emotions: vec!["Joy".into(), "calm".into()],
            }
        );
    }

    #[test]
    fn test_empty_primary_mood_rejected() {
        let err = validate_mood(&json!({"primary_mood": "", "confidence": 50, "emotions": []}))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyPrimaryMood);
        assert!(err.to_string().contains("Primary mood"));
    }

    #[test]
    fn test_whitespace_primary_mood_rejected() {
        let err = validate_mood(&json!({"primary_mood": "   ", "confidence": 50})).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPrimaryMood);
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(validate_mood(&json!(null)).unwrap_err(), ValidationError::NotAnObject);
        assert_eq!(validate_mood(&json!(["Happy"])).unwrap_err(), ValidationError::NotAnObject);
    }

    #[test]
    fn test_primary_mood_checked_before_confidence() {
        let err = validate_mood(&json!({"primary_mood": 3})).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPrimaryMood);
    }

    #[test]
    fn test_missing_confidence() {
        let err = validate_mood(&json!({"primary_mood": "Calm 😌"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingConfidence);
        let err = validate_mood(&json!({"primary_mood": "Calm 😌", "confidence": null})).unwrap_err();
        assert_eq!(err, ValidationError::MissingConfidence);
    }

    #[test]
    fn test_confidence_string_is_coerced() {
        let result = validate_mood(&json!({"primary_mood": "Calm", "confidence": " 88.456 "})).unwrap();
        assert_eq!(result.confidence, 88.46);
    }

    #[test]
    fn test_confidence_not_numeric() {
        let err = validate_mood(&json!({"primary_mood": "Calm", "confidence": "high"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidConfidence(_)));
        let err = validate_mood(&json!({"primary_mood": "Calm", "confidence": true})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidConfidence(_)));
    }

    #[test]
    fn test_confidence_bounds() {
        for bad in [0.0, -1.0, 100.01] {
            let err = validate_mood(&json!({"primary_mood": "Calm", "confidence": bad})).unwrap_err();
            assert!(matches!(err, ValidationError::ConfidenceOutOfRange(_)), "{}", bad);
        }
        let ok = validate_mood(&json!({"primary_mood": "Calm", "confidence": 100})).unwrap();
        assert_eq!(ok.confidence, 100.0);
    }

    #[test]
    fn test_confidence_rounding_to_zero_rejected() {
        let err = validate_mood(&json!({"primary_mood": "Calm", "confidence": 0.001})).unwrap_err();
        assert!(matches!(err, ValidationError::ConfidenceOutOfRange(_)));
    }

    #[test]
    fn test_missing_emotions_defaults_empty() {
        let result = validate_mood(&json!({"primary_mood": "Calm", "confidence": 70})).unwrap();
        assert!(result.emotions.is_empty());
    }

    #[test]
    fn test_emotions_must_be_array() {
        let err = validate_mood(&json!({"primary_mood": "Calm", "confidence": 70, "emotions": "joy"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmotionsNotArray);
    }

    #[test]
    fn test_emotion_elements_coerced_or_rejected() {
        let result = validate_mood(&json!({
            "primary_mood": "Calm",
            "confidence": 70,
            "emotions": ["peace", 7, "  "]
        }))
        .unwrap();
        assert_eq!(result.emotions, vec!["peace".to_string(), "7".to_string()]);

        let err = validate_mood(&json!({
            "primary_mood": "Calm",
            "confidence": 70,
            "emotions": [{"name": "peace"}]
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::EmotionNotString);
    }

    #[test]
    fn test_validated_on_typed_value() {
        let mood = MoodResult {
            primary_mood: " Sad 😢 ".into(),
            confidence: 42.123,
            emotions: vec!["grief".into(), " ".into()],
        };
        let clean = mood.validated().unwrap();
        assert_eq!(clean.primary_mood, "Sad 😢");
        assert_eq!(clean.confidence, 42.12);
        assert_eq!(clean.emotions, vec!["grief".to_string()]);
    }
}
