//! Response composition - template branches and final text assembly.
//!
//! Deterministic assembly: a fixed base template chosen by branch priority
//! (greeting, positive mood, then first-match-wins topic groups), an empathy
//! preface driven by sympathy level, and a resource section tiered by
//! urgency. No generated text anywhere.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::concern::{AnalysisResult, Concern};
use super::resources::{ResourceBundle, ResourceKind};
use super::response::ResponseKind;
use super::sentiment::{SentimentAnalysis, SympathyLevel};

// Greeting and positive-mood checks are exact word membership (word-boundary
// match), so "hi" inside "this" or "happy" inside "unhappy" do not trigger.
static GREETING_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(hi|hello|hey|greetings|good morning|good afternoon|good evening)\b")
        .expect("Invalid regex: greeting vocabulary")
});

static POSITIVE_MOOD_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(happy|joyful|joy|glad|content|cheerful|delighted|pleased|excited)\b")
        .expect("Invalid regex: positive-mood vocabulary")
});

const GREETING_TEMPLATE: &str = "Hello! It's so nice to connect with you. How are you feeling today? \
     You can share anything on your mind, and I'm here to listen with care.";

const HAPPY_TEMPLATE: &str = "It's wonderful to hear that you're feeling happy! Celebrating these moments \
     of joy is so important. May your days be filled with many more such moments.";

const GENERAL_TEMPLATE: &str = "Thank you for sharing with me. I'm here to hold space for your journey \
     and help you find the support that suits your needs.";

const EMPATHY_HIGH: &str =
    "I want you to know I'm truly sorry you're going through this. You are not alone.\n\n";

const EMPATHY_MODERATE: &str =
    "I can hear that this is tough for you, and I'm here to support you.\n\n";

/// One topic branch: substring keywords and the fixed template they select
struct MoodBranch {
    kind: ResponseKind,
    keywords: &'static [&'static str],
    template: &'static str,
}

// Evaluated top to bottom; the first branch with any keyword hit wins.
// Keyword checks are substring matches against the lower-cased message.
const MOOD_BRANCHES: &[MoodBranch] = &[
    MoodBranch {
        kind: ResponseKind::DepressionSupport,
        keywords: &[
            "sad",
            "depressed",
            "hopeless",
            "empty",
            "can't get out of bed",
            "blue",
            "down",
        ],
        template: "I hear the profound sadness in your words. Remember, even in dark moments, \
             there is hope for renewal. Your feelings are valid and you are not alone.",
    },
    MoodBranch {
        kind: ResponseKind::AnxietySupport,
        keywords: &[
            "anxious",
            "worried",
            "panic",
            "overwhelmed",
            "stress",
            "nervous",
            "tense",
        ],
        template: "Anxiety can feel overwhelming, but you're showing strength by speaking about it. \
             Sometimes, just acknowledging these feelings is the first step to calming your mind.",
    },
    MoodBranch {
        kind: ResponseKind::LonelinessSupport,
        keywords: &["lonely", "isolated", "alone", "abandoned"],
        template: "Feeling alone is tough. Remember, connection is possible and you are valued. \
             Reaching out takes courage, and I'm here to listen.",
    },
    MoodBranch {
        kind: ResponseKind::AngerSupport,
        keywords: &["angry", "frustrated", "mad", "irritated"],
        template: "Anger is a natural emotion. It can be a signal that something important needs \
             attention. It's okay to feel this way, and expressing it can help bring clarity and relief.",
    },
    MoodBranch {
        kind: ResponseKind::GratitudeSupport,
        keywords: &["grateful", "thankful", "blessed"],
        template: "Gratitude brings light into our lives. Thank you for sharing your positive \
             feelings; celebrating these moments is an important part of well-being.",
    },
    MoodBranch {
        kind: ResponseKind::HopeSupport,
        keywords: &["hopeful", "optimistic", "encouraged"],
        template: "It's wonderful to sense your hope and optimism. These feelings can be a guiding \
             light on your path toward healing and growth.",
    },
    MoodBranch {
        kind: ResponseKind::DreamAnalysis,
        keywords: &["dream", "dreamt", "dreamed", "nightmare"],
        template: "Dreams are voices from your unconscious. In Jungian psychology, exploring them \
             can open new ways to understand your inner self.",
    },
    MoodBranch {
        kind: ResponseKind::TraumaSupport,
        keywords: &["trauma", "flashback", "ptsd", "nightmare"],
        template: "What you've experienced is deeply impactful. Healing takes time and support, \
             and Jung believed in the psyche's capacity to mend itself.",
    },
];

/// Composes the final reply from an analysis, a resource bundle, and a
/// sympathy estimate
pub struct ResponseComposer;

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseComposer {
    /// Create a new composer
    pub fn new() -> Self {
        Self
    }

    /// Select the resource categories for an analysis.
    ///
    /// Union semantics: every applicable rule contributes, duplicates are
    /// absorbed by the bundle, insertion order is the rule order below.
    pub fn select_resources(&self, analysis: &AnalysisResult) -> ResourceBundle {
        let mut bundle = ResourceBundle::default();

        if analysis.needs_immediate_help {
            bundle.insert(ResourceKind::ImmediateCrisis);
        }
        if analysis.needs_professional_help {
            bundle.insert(ResourceKind::TherapyServices);
        }

        for detected in &analysis.detected_concerns {
            match detected.concern {
                Concern::DepressionSigns => bundle.insert(ResourceKind::DepressionSupport),
                Concern::AnxietySigns => bundle.insert(ResourceKind::AnxietySupport),
                // Trauma routes to therapy; the bundle dedupes the re-add.
                Concern::TraumaSigns => bundle.insert(ResourceKind::TherapyServices),
                Concern::CrisisImmediate => {}
            }
        }

        bundle
    }

    /// Compose the reply text and its branch tag.
    ///
    /// Greeting and positive-mood branches return the bare template: no
    /// empathy preface and no resource section. Every other branch gets the
    /// full assembly in fixed order: preface, base template, blank line,
    /// urgency-tiered resource section.
    pub fn compose(
        &self,
        text: &str,
        analysis: &AnalysisResult,
        resources: &ResourceBundle,
        sentiment: &SentimentAnalysis,
    ) -> (ResponseKind, String) {
        let lower = text.to_lowercase();

        if GREETING_WORDS.is_match(&lower) {
            debug!("greeting vocabulary matched, short-circuiting composition");
            return (ResponseKind::Greeting, GREETING_TEMPLATE.to_string());
        }

        if POSITIVE_MOOD_WORDS.is_match(&lower) {
            debug!("positive-mood vocabulary matched, short-circuiting composition");
            return (ResponseKind::HappySupport, HAPPY_TEMPLATE.to_string());
        }

        let (kind, base) = MOOD_BRANCHES
            .iter()
            .find(|branch| branch.keywords.iter().any(|kw| lower.contains(kw)))
            .map(|branch| (branch.kind, branch.template))
            .unwrap_or((ResponseKind::GeneralSupport, GENERAL_TEMPLATE));

        let mut message = String::new();
        match sentiment.sympathy_level {
            SympathyLevel::High => message.push_str(EMPATHY_HIGH),
            SympathyLevel::Moderate => message.push_str(EMPATHY_MODERATE),
            SympathyLevel::Low => {}
        }
        message.push_str(base);
        message.push_str("\n\n");
        message.push_str(&self.resource_text(analysis, resources));

        (kind, message)
    }

    /// Render the urgency-tiered resource section.
    fn resource_text(&self, analysis: &AnalysisResult, resources: &ResourceBundle) -> String {
        if analysis.needs_immediate_help {
            let mut out = String::from("I'm deeply concerned about your safety.\n\n");
            out.push_str(
                "What you're describing sounds incredibly painful, and your safety is the most \
                 important thing right now.\n\n",
            );
            out.push_str("Please reach out to these crisis services immediately:\n");
            if let Some(crisis) = resources.get(ResourceKind::ImmediateCrisis) {
                for line in crisis.resources {
                    out.push_str(&format!("• {line}\n"));
                }
            }
            out.push_str(
                "\nYou don't have to face this alone - there are trained professionals available \
                 right now who want to help you.",
            );
            out
        } else if analysis.needs_professional_help {
            let mut out = String::from("Thank you for sharing this with me.\n\n");
            out.push_str(
                "What you're experiencing sounds really challenging, and it takes courage to talk \
                 about it. These feelings deserve proper professional support.\n\n",
            );
            out.push_str("I strongly recommend connecting with these resources:\n");
            for entry in resources.iter() {
                if entry.kind == ResourceKind::ImmediateCrisis {
                    continue;
                }
                out.push_str(&format!("\n{} - {}:\n", entry.name, entry.description));
                for line in entry.resources {
                    out.push_str(&format!("• {line}\n"));
                }
            }
            out.push_str(
                "\nA mental health professional can provide the proper assessment and support \
                 you deserve.",
            );
            out
        } else {
            let mut out = String::from("I hear you.\n\n");
            out.push_str(
                "It sounds like you're going through a difficult time. While I'm here to listen \
                 and offer perspectives, these resources might be helpful for additional support:\n",
            );
            for entry in resources.iter() {
                out.push_str(&format!("\n{}:\n", entry.name));
                for line in entry.resources.iter().take(2) {
                    out.push_str(&format!("• {line}\n"));
                }
            }
            out.push_str("\nRemember that seeking support is a sign of strength, not weakness.");
            out
        }
    }
}
