//! Concern classification using regex patterns.
//!
//! Fast pattern-based detection of mental-health concern signals.
//! No ML model required - pure Rust regex matching over the lower-cased
//! message.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Ordinal urgency signal attached to a concern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Moderate,
    High,
    Immediate,
}

impl Urgency {
    /// Returns the wire label for the urgency level
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Moderate => "moderate",
            Urgency::High => "high",
            Urgency::Immediate => "immediate",
        }
    }

    /// Precedence reduction: `other` replaces `self` only when it strictly
    /// outranks it (immediate > high > moderate > low). Order-independent
    /// over any sequence of escalations.
    pub(crate) fn escalate(self, other: Urgency) -> Urgency {
        match other {
            Urgency::Immediate => Urgency::Immediate,
            Urgency::High if self != Urgency::Immediate => Urgency::High,
            Urgency::Moderate if !matches!(self, Urgency::Immediate | Urgency::High) => {
                Urgency::Moderate
            }
            _ => self,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Escalation tier a concern category routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLevel {
    General,
    Professional,
    Crisis,
}

/// Concern category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    CrisisImmediate,
    DepressionSigns,
    AnxietySigns,
    TraumaSigns,
}

impl Concern {
    /// Returns the wire label for the concern category
    pub fn label(&self) -> &'static str {
        match self {
            Concern::CrisisImmediate => "crisis_immediate",
            Concern::DepressionSigns => "depression_signs",
            Concern::AnxietySigns => "anxiety_signs",
            Concern::TraumaSigns => "trauma_signs",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One concern match recorded by an analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedConcern {
    /// Matched category
    #[serde(rename = "type")]
    pub concern: Concern,
    /// Urgency attached to the category
    pub urgency: Urgency,
    /// Response tier attached to the category
    pub response_level: ResponseLevel,
}

/// Result of a single classification pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Matched concerns in category declaration order (not severity order)
    pub detected_concerns: Vec<DetectedConcern>,
    /// Maximum urgency over all matched categories
    pub highest_urgency: Urgency,
    /// highest_urgency == immediate
    pub needs_immediate_help: bool,
    /// highest_urgency is immediate or high
    pub needs_professional_help: bool,
}

impl AnalysisResult {
    /// Whether a specific concern category was detected
    pub fn has(&self, concern: Concern) -> bool {
        self.detected_concerns.iter().any(|c| c.concern == concern)
    }
}

/// Pattern definition for one concern category
struct ConcernCategory {
    concern: Concern,
    patterns: Vec<Regex>,
    urgency: Urgency,
    response_level: ResponseLevel,
}

// Compile patterns once at startup. Patterns match the lower-cased message,
// so they are written in lower case.
static CRISIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(suicide|kill myself|end my life|want to die|better off dead)")
            .expect("Invalid regex: crisis keywords"),
        Regex::new(r"(going to hurt myself|self harm|cutting|self injury)")
            .expect("Invalid regex: self-harm keywords"),
        Regex::new(r"(no reason to live|can't go on|end it all)")
            .expect("Invalid regex: despair keywords"),
    ]
});

static DEPRESSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(depressed|clinical depression|major depression)")
            .expect("Invalid regex: depression keywords"),
        Regex::new(r"(hopeless|worthless|empty inside)")
            .expect("Invalid regex: hopelessness keywords"),
        Regex::new(r"(can't get out of bed|no energy|no motivation)")
            .expect("Invalid regex: low-energy keywords"),
        Regex::new(r"(losing interest|don't enjoy anything)")
            .expect("Invalid regex: anhedonia keywords"),
        Regex::new(r"(crying every day|constant sadness)")
            .expect("Invalid regex: sadness keywords"),
        Regex::new(r"(sleeping too much|too little|appetite changes)")
            .expect("Invalid regex: sleep-appetite keywords"),
        Regex::new(r"(thoughts of death|suicidal thoughts)")
            .expect("Invalid regex: ideation keywords"),
    ]
});

static ANXIETY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(panic attack|anxiety attack)").expect("Invalid regex: panic keywords"),
        Regex::new(r"(constant worry|can't stop worrying)")
            .expect("Invalid regex: worry keywords"),
        Regex::new(r"(heart racing|can't breathe|chest tight)")
            .expect("Invalid regex: somatic anxiety keywords"),
        Regex::new(r"(avoiding situations|too anxious to)")
            .expect("Invalid regex: avoidance keywords"),
        Regex::new(r"(obsessive thoughts|compulsive behaviors)")
            .expect("Invalid regex: obsessive keywords"),
    ]
});

static TRAUMA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(flashbacks|nightmares|ptsd)").expect("Invalid regex: ptsd keywords"),
        Regex::new(r"(traumatic memory|childhood trauma)")
            .expect("Invalid regex: trauma-memory keywords"),
        Regex::new(r"(triggered|reminded of trauma)").expect("Invalid regex: trigger keywords"),
        Regex::new(r"(dissociating|feeling numb)").expect("Invalid regex: dissociation keywords"),
    ]
});

/// Concern classifier over the fixed category table
pub struct ConcernClassifier {
    categories: Vec<ConcernCategory>,
}

impl Default for ConcernClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcernClassifier {
    /// Create a new classifier with all concern categories
    pub fn new() -> Self {
        let categories = vec![
            ConcernCategory {
                concern: Concern::CrisisImmediate,
                patterns: CRISIS_PATTERNS.clone(),
                urgency: Urgency::Immediate,
                response_level: ResponseLevel::Crisis,
            },
            ConcernCategory {
                concern: Concern::DepressionSigns,
                patterns: DEPRESSION_PATTERNS.clone(),
                urgency: Urgency::High,
                response_level: ResponseLevel::Professional,
            },
            ConcernCategory {
                concern: Concern::AnxietySigns,
                patterns: ANXIETY_PATTERNS.clone(),
                urgency: Urgency::Moderate,
                response_level: ResponseLevel::Professional,
            },
            ConcernCategory {
                concern: Concern::TraumaSigns,
                patterns: TRAUMA_PATTERNS.clone(),
                urgency: Urgency::High,
                response_level: ResponseLevel::Professional,
            },
        ];

        Self { categories }
    }

    /// Classify the concerns present in a message.
    ///
    /// At most one [`DetectedConcern`] is recorded per category: the first
    /// matching pattern wins and the remaining patterns of that category are
    /// skipped. Categories are independent, so overlapping matches across
    /// categories are all recorded.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let text = text.to_lowercase();

        let mut detected_concerns = Vec::new();
        let mut highest_urgency = Urgency::Low;

        for category in &self.categories {
            for pattern in &category.patterns {
                if pattern.is_match(&text) {
                    debug!(concern = %category.concern, urgency = %category.urgency, "concern pattern matched");
                    detected_concerns.push(DetectedConcern {
                        concern: category.concern,
                        urgency: category.urgency,
                        response_level: category.response_level,
                    });
                    highest_urgency = highest_urgency.escalate(category.urgency);
                    break;
                }
            }
        }

        AnalysisResult {
            needs_immediate_help: highest_urgency == Urgency::Immediate,
            needs_professional_help: matches!(
                highest_urgency,
                Urgency::Immediate | Urgency::High
            ),
            highest_urgency,
            detected_concerns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_detection() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("I want to die");
        assert_eq!(result.highest_urgency, Urgency::Immediate);
        assert!(result.needs_immediate_help);
        assert!(result.needs_professional_help);
        assert!(result.has(Concern::CrisisImmediate));
    }

    #[test]
    fn test_anxiety_only_is_moderate() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("I'm having a panic attack");
        assert_eq!(result.highest_urgency, Urgency::Moderate);
        assert!(!result.needs_immediate_help);
        assert!(!result.needs_professional_help);
        assert!(result.has(Concern::AnxietySigns));
    }

    #[test]
    fn test_one_hit_per_category() {
        let classifier = ConcernClassifier::new();

        // Two depression patterns match but only one concern is recorded
        let result = classifier.analyze("I feel depressed and hopeless");
        let depression_hits = result
            .detected_concerns
            .iter()
            .filter(|c| c.concern == Concern::DepressionSigns)
            .count();
        assert_eq!(depression_hits, 1);
    }

    #[test]
    fn test_crisis_not_downgraded_by_later_match() {
        let classifier = ConcernClassifier::new();

        // Crisis plus anxiety: immediate must survive the moderate match
        let result = classifier.analyze("I want to die and I can't stop worrying");
        assert_eq!(result.highest_urgency, Urgency::Immediate);
        assert!(result.has(Concern::AnxietySigns));
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("PANIC ATTACK");
        assert!(result.has(Concern::AnxietySigns));
    }

    #[test]
    fn test_empty_text() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("");
        assert!(result.detected_concerns.is_empty());
        assert_eq!(result.highest_urgency, Urgency::Low);
        assert!(!result.needs_immediate_help);
        assert!(!result.needs_professional_help);
    }

    #[test]
    fn test_escalate_never_downgrades() {
        assert_eq!(Urgency::Immediate.escalate(Urgency::Low), Urgency::Immediate);
        assert_eq!(Urgency::High.escalate(Urgency::Moderate), Urgency::High);
        assert_eq!(Urgency::Moderate.escalate(Urgency::Low), Urgency::Moderate);
        assert_eq!(Urgency::Low.escalate(Urgency::High), Urgency::High);
        assert_eq!(Urgency::High.escalate(Urgency::Immediate), Urgency::Immediate);
    }
}
