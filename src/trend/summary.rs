use serde::{Deserialize, Serialize};

use super::chart::ChartPoint;

/// Points needed before a direction is reported.
pub const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Stable,
    Improving,
    Declining,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSummary {
    pub message: String,
    pub trend: Trend,
}

/// Classify the direction of the last three scores.
///
/// `delta = last - first` over the window; no smoothing.
pub fn summarize(points: &[ChartPoint]) -> TrendSummary {
    if points.len() < TREND_WINDOW {
        return TrendSummary {
            message: "not enough data".into(),
            trend: Trend::Neutral,
        };
    }

    let window = &points[points.len() - TREND_WINDOW..];
    let delta = i32::from(window[TREND_WINDOW - 1].mood_score) - i32::from(window[0].mood_score);

    let (trend, message) = if delta.abs() < 1 {
        (Trend::Stable, "Your mood has been steady lately".to_string())
    } else if delta > 0 {
        (
            Trend::Improving,
            format!("Your mood is improving (+{} over the last {} entries)", delta, TREND_WINDOW),
        )
    } else {
        (
            Trend::Declining,
            format!("Your mood is declining ({} over the last {} entries)", delta, TREND_WINDOW),
        )
    };

    tracing::debug!(?trend, delta, "Trend summarized");
    TrendSummary { message, trend }
}
