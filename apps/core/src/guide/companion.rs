//! Companion orchestrator - wires the pipeline together.
//!
//! Coordinates concern classification, resource selection, sentiment
//! scoring, and response composition. One synchronous pass per message,
//! no state carried between calls.

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use super::composer::ResponseComposer;
use super::concern::ConcernClassifier;
use super::response::CompanionResponse;
use super::sentiment::{LexiconSentiment, SentimentAnalysis, SentimentModel, SentimentScore};

/// Main companion pipeline, generic over the sentiment capability
pub struct Companion<S = LexiconSentiment> {
    classifier: ConcernClassifier,
    composer: ResponseComposer,
    sentiment: S,
}

impl Companion<LexiconSentiment> {
    /// Create a companion backed by the built-in lexicon scorer
    pub fn new() -> Self {
        Self::with_model(LexiconSentiment::new())
    }
}

impl Default for Companion<LexiconSentiment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentModel> Companion<S> {
    /// Create a companion with a custom sentiment model
    pub fn with_model(sentiment: S) -> Self {
        Self {
            classifier: ConcernClassifier::new(),
            composer: ResponseComposer::new(),
            sentiment,
        }
    }

    /// Produce the full response for one message.
    ///
    /// Never fails: any string input is valid, and a failing sentiment model
    /// degrades to neutral instead of propagating the fault.
    pub fn respond(&self, text: &str) -> CompanionResponse {
        let start = Instant::now();

        let analysis = self.classifier.analyze(text);
        let resources = self.composer.select_resources(&analysis);

        let score = if text.trim().is_empty() {
            // Nothing to score; skip the primitive entirely.
            SentimentScore::neutral()
        } else {
            self.sentiment.score(text).unwrap_or_else(|err| {
                warn!("sentiment degraded to neutral: {err}");
                SentimentScore::neutral()
            })
        };
        let sentiment = SentimentAnalysis::from_score(score);

        let (response_type, message) = self
            .composer
            .compose(text, &analysis, &resources, &sentiment);

        let response = CompanionResponse {
            response_type,
            message,
            analysis,
            resources,
            sentiment,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        info!("{}", response.summary());
        response
    }
}
