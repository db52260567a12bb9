//! Sentiment boundary and sympathy scoring.
//!
//! The sentiment primitive is an external capability: anything that can turn
//! a text into polarity/subjectivity floats. It sits behind [`SentimentModel`]
//! so the pipeline stays testable with deterministic fake scores. A failing
//! model degrades to neutral sentiment; the fault never leaves the core.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Raw output of the sentiment primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (very negative) .. +1.0 (very positive)
    pub polarity: f64,
    /// 0.0 (objective) .. 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Create a score, clamping both floats to their documented ranges
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// The neutral fallback score
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Errors a sentiment model may surface at the trait boundary
#[derive(Debug, Clone, Error)]
pub enum SentimentError {
    /// The model could not be reached or is not loaded
    #[error("sentiment model unavailable: {0}")]
    Unavailable(String),

    /// The model did not answer in time
    #[error("sentiment scoring timed out")]
    Timeout,
}

/// External sentiment capability, one synchronous call per message
pub trait SentimentModel: Send + Sync {
    /// Score a text. Implementations must accept any string, including empty.
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError>;
}

/// How much empathetic framing the reply should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SympathyLevel {
    Low,
    Moderate,
    High,
}

impl SympathyLevel {
    /// Returns the wire label for the sympathy level
    pub fn label(&self) -> &'static str {
        match self {
            SympathyLevel::Low => "low",
            SympathyLevel::Moderate => "moderate",
            SympathyLevel::High => "high",
        }
    }
}

impl fmt::Display for SympathyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sympathy estimate derived from one sentiment score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Reported polarity, rounded to 3 decimals
    pub polarity: f64,
    /// Reported subjectivity, rounded to 3 decimals
    pub subjectivity: f64,
    /// Sympathy need in [0, 1], rounded to 3 decimals
    pub sympathy_score: f64,
    /// Banded sympathy level
    pub sympathy_level: SympathyLevel,
}

impl SentimentAnalysis {
    /// Derive the sympathy estimate.
    ///
    /// Negative polarity increases sympathy need; subjectivity amplifies it.
    /// The raw product is normalized into [0, 1] by dividing by 1.5 and
    /// capping at 1. The level bands are applied before rounding.
    pub fn from_score(score: SentimentScore) -> Self {
        let negative_factor = (-score.polarity).max(0.0);
        let raw_score = negative_factor * (1.0 + score.subjectivity);
        let sympathy_score = (raw_score / 1.5).min(1.0);

        let sympathy_level = if sympathy_score >= 0.66 {
            SympathyLevel::High
        } else if sympathy_score >= 0.33 {
            SympathyLevel::Moderate
        } else {
            SympathyLevel::Low
        };

        Self {
            polarity: round3(score.polarity),
            subjectivity: round3(score.subjectivity),
            sympathy_score: round3(sympathy_score),
            sympathy_level,
        }
    }

    /// Neutral analysis, used when the primitive is skipped or degraded
    pub fn neutral() -> Self {
        Self::from_score(SentimentScore::neutral())
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Model that always reports neutral sentiment
pub struct NeutralSentiment;

impl SentimentModel for NeutralSentiment {
    fn score(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
        Ok(SentimentScore::neutral())
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joyful", "joy", "glad", "content", "cheerful", "delighted", "pleased", "excited",
    "grateful", "thankful", "blessed", "hopeful", "optimistic", "encouraged", "love", "loved",
    "great", "wonderful", "amazing", "awesome", "good", "better", "calm", "peaceful", "proud",
    "relieved", "safe",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "depressed", "hopeless", "worthless", "empty", "miserable", "anxious", "worried",
    "scared", "afraid", "terrified", "panic", "panicky", "stressed", "overwhelmed", "nervous",
    "tense", "lonely", "isolated", "abandoned", "angry", "frustrated", "irritated", "hurt",
    "pain", "painful", "crying", "tired", "exhausted", "numb", "awful", "terrible", "horrible",
    "bad", "worse", "worst", "hate", "broken",
];

/// Word-list sentiment stand-in.
///
/// Polarity is the signed balance of positive vs negative word hits;
/// subjectivity is the fraction of words carrying any emotional charge.
/// A stand-in for a real sentiment model, good enough to drive the demo.
pub struct LexiconSentiment {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentiment {
    /// Create the scorer with the built-in word lists
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl SentimentModel for LexiconSentiment {
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(SentimentScore::neutral());
        }

        let positive_hits = words.iter().filter(|w| self.positive.contains(*w)).count();
        let negative_hits = words.iter().filter(|w| self.negative.contains(*w)).count();
        let charged = positive_hits + negative_hits;

        if charged == 0 {
            return Ok(SentimentScore::neutral());
        }

        let polarity = (positive_hits as f64 - negative_hits as f64) / charged as f64;
        let subjectivity = charged as f64 / words.len() as f64;

        Ok(SentimentScore::new(polarity, subjectivity))
    }
}
