//! Companion response - final output structure.
//!
//! Everything the external service layer needs to build its reply envelope:
//! the composed message plus the structured analysis behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::concern::AnalysisResult;
use super::resources::ResourceBundle;
use super::sentiment::SentimentAnalysis;

/// Disclaimer attached by the service layer to every reply envelope
pub const SAFETY_NOTE: &str = "This system provides resource guidance, not medical treatment. \
     Always consult healthcare professionals for medical concerns.";

/// Template branch that produced the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Greeting,
    HappySupport,
    DepressionSupport,
    AnxietySupport,
    LonelinessSupport,
    AngerSupport,
    GratitudeSupport,
    HopeSupport,
    DreamAnalysis,
    TraumaSupport,
    GeneralSupport,
}

impl ResponseKind {
    /// Returns the wire label for the response kind
    pub fn label(&self) -> &'static str {
        match self {
            ResponseKind::Greeting => "greeting",
            ResponseKind::HappySupport => "happy_support",
            ResponseKind::DepressionSupport => "depression_support",
            ResponseKind::AnxietySupport => "anxiety_support",
            ResponseKind::LonelinessSupport => "loneliness_support",
            ResponseKind::AngerSupport => "anger_support",
            ResponseKind::GratitudeSupport => "gratitude_support",
            ResponseKind::HopeSupport => "hope_support",
            ResponseKind::DreamAnalysis => "dream_analysis",
            ResponseKind::TraumaSupport => "trauma_support",
            ResponseKind::GeneralSupport => "general_support",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete response for one message
#[derive(Debug, Clone, Serialize)]
pub struct CompanionResponse {
    /// Template branch that produced the message
    pub response_type: ResponseKind,

    /// Composed reply text
    pub message: String,

    /// Concern classification behind the reply
    pub analysis: AnalysisResult,

    /// Resource categories selected for the reply
    pub resources: ResourceBundle,

    /// Sympathy estimate behind the reply
    pub sentiment: SentimentAnalysis,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of composition
    pub timestamp: DateTime<Utc>,
}

impl CompanionResponse {
    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Response: {} | urgency: {} | concerns: {} | resources: {} | sympathy: {} ({:.3}) | {}ms",
            self.response_type,
            self.analysis.highest_urgency,
            self.analysis.detected_concerns.len(),
            self.resources.len(),
            self.sentiment.sympathy_level,
            self.sentiment.sympathy_score,
            self.processing_time_ms,
        )
    }
}
