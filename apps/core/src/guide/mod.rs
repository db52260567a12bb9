//! # Guide Module
//!
//! Rule-based resource guidance pipeline for the companion.
//! Classifies a message BEFORE any reply is written, then assembles the
//! reply deterministically from fixed templates and canned resource lists.
//!
//! ## Components
//! - `concern`: concern classification using regex patterns
//! - `resources`: fixed resource catalog and per-request bundle
//! - `sentiment`: sentiment boundary and sympathy scoring
//! - `composer`: template branches and text assembly
//! - `response`: output data structure
//! - `companion`: main orchestrator

pub mod companion;
pub mod composer;
pub mod concern;
pub mod resources;
pub mod response;
pub mod sentiment;

// Re-export main types for convenience
pub use companion::Companion;
pub use composer::ResponseComposer;
pub use concern::{
    AnalysisResult, Concern, ConcernClassifier, DetectedConcern, ResponseLevel, Urgency,
};
pub use resources::{catalog, ResourceBundle, ResourceCategory, ResourceKind};
pub use response::{CompanionResponse, ResponseKind, SAFETY_NOTE};
pub use sentiment::{
    LexiconSentiment, NeutralSentiment, SentimentAnalysis, SentimentError, SentimentModel,
    SentimentScore, SympathyLevel,
};
