//! Guide Module Tests
//!
//! Property-style tests for concern classification, urgency precedence,
//! resource selection, and sympathy scoring.

use crate::guide::{
    AnalysisResult, Concern, ConcernClassifier, ResourceKind, ResponseComposer, SentimentAnalysis,
    SentimentScore, SympathyLevel, Urgency,
};

mod urgency_precedence {
    use super::*;

    fn permutations(items: &[Urgency]) -> Vec<Vec<Urgency>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (i, head) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, *head);
                out.push(tail);
            }
        }
        out
    }

    fn reduce(sequence: &[Urgency]) -> Urgency {
        sequence
            .iter()
            .fold(Urgency::Low, |acc, urgency| acc.escalate(*urgency))
    }

    #[test]
    fn test_order_independent_over_all_permutations() {
        let cases: &[(&[Urgency], Urgency)] = &[
            (
                &[Urgency::Immediate, Urgency::High, Urgency::Moderate, Urgency::Low],
                Urgency::Immediate,
            ),
            (&[Urgency::High, Urgency::Moderate, Urgency::Low], Urgency::High),
            (&[Urgency::Moderate, Urgency::Low], Urgency::Moderate),
            (&[Urgency::High, Urgency::High, Urgency::Moderate], Urgency::High),
            (&[Urgency::Low, Urgency::Low], Urgency::Low),
        ];

        for (matched, expected) in cases {
            for perm in permutations(matched) {
                assert_eq!(
                    reduce(&perm),
                    *expected,
                    "permutation {perm:?} should reduce to {expected:?}"
                );
            }
        }
    }

    #[test]
    fn test_high_before_immediate_still_escalates() {
        // Depression (high) is declared before crisis would be re-checked;
        // feed both orders through real text to be sure.
        let classifier = ConcernClassifier::new();

        let a = classifier.analyze("I'm depressed and I want to die");
        let b = classifier.analyze("I want to die and I'm depressed");
        assert_eq!(a.highest_urgency, Urgency::Immediate);
        assert_eq!(b.highest_urgency, Urgency::Immediate);
    }
}

mod classifier {
    use super::*;

    #[test]
    fn test_crisis_overrides_lower_urgency_matches() {
        let classifier = ConcernClassifier::new();

        let result = classifier
            .analyze("I'm depressed, I keep having flashbacks, and I want to die");
        assert!(result.needs_immediate_help);
        assert_eq!(result.highest_urgency, Urgency::Immediate);
        // All overlapping categories are still recorded independently
        assert!(result.has(Concern::CrisisImmediate));
        assert!(result.has(Concern::DepressionSigns));
        assert!(result.has(Concern::TraumaSigns));
    }

    #[test]
    fn test_concerns_follow_declaration_order() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("panic attack after childhood trauma while depressed");
        let order: Vec<Concern> = result.detected_concerns.iter().map(|c| c.concern).collect();
        assert_eq!(
            order,
            vec![
                Concern::DepressionSigns,
                Concern::AnxietySigns,
                Concern::TraumaSigns
            ]
        );
    }

    #[test]
    fn test_whitespace_only_input() {
        let classifier = ConcernClassifier::new();

        let result = classifier.analyze("   \n\t  ");
        assert!(result.detected_concerns.is_empty());
        assert_eq!(result.highest_urgency, Urgency::Low);
    }
}

mod resource_selection {
    use super::*;

    fn analyze(text: &str) -> AnalysisResult {
        ConcernClassifier::new().analyze(text)
    }

    #[test]
    fn test_immediate_crisis_iff_immediate_help() {
        let composer = ResponseComposer::new();

        let crisis = composer.select_resources(&analyze("I want to end my life"));
        assert!(crisis.contains(ResourceKind::ImmediateCrisis));

        for text in [
            "I'm depressed",
            "panic attack",
            "flashbacks again",
            "just a normal day",
            "",
        ] {
            let bundle = composer.select_resources(&analyze(text));
            assert!(
                !bundle.contains(ResourceKind::ImmediateCrisis),
                "no crisis resources expected for {text:?}"
            );
        }
    }

    #[test]
    fn test_union_of_all_applicable_rules() {
        let composer = ResponseComposer::new();

        let bundle =
            composer.select_resources(&analyze("I'm depressed and I had a panic attack"));
        assert!(bundle.contains(ResourceKind::TherapyServices));
        assert!(bundle.contains(ResourceKind::DepressionSupport));
        assert!(bundle.contains(ResourceKind::AnxietySupport));
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_therapy_deduped_across_rules() {
        let composer = ResponseComposer::new();

        // trauma adds therapy_services on top of the professional-help rule
        let bundle = composer.select_resources(&analyze("ptsd and I feel worthless"));
        let therapy_entries = bundle
            .iter()
            .filter(|c| c.kind == ResourceKind::TherapyServices)
            .count();
        assert_eq!(therapy_entries, 1);
    }

    #[test]
    fn test_empty_analysis_selects_nothing() {
        let composer = ResponseComposer::new();

        let bundle = composer.select_resources(&analyze("nice weather outside"));
        assert!(bundle.is_empty());
    }
}

mod sympathy {
    use super::*;

    const STEPS: i32 = 20;

    #[test]
    fn test_monotone_in_negative_polarity() {
        for s in 0..=STEPS {
            let subjectivity = f64::from(s) / f64::from(STEPS);
            let mut previous = -1.0f64;
            for p in 0..=STEPS {
                // polarity sweeps from +1 down to -1
                let polarity = 1.0 - 2.0 * f64::from(p) / f64::from(STEPS);
                let analysis =
                    SentimentAnalysis::from_score(SentimentScore::new(polarity, subjectivity));
                assert!(
                    analysis.sympathy_score + 1e-9 >= previous,
                    "sympathy dropped at polarity {polarity}, subjectivity {subjectivity}"
                );
                previous = analysis.sympathy_score;
            }
        }
    }

    #[test]
    fn test_monotone_in_subjectivity() {
        for p in 0..=STEPS {
            let polarity = -f64::from(p) / f64::from(STEPS);
            let mut previous = -1.0f64;
            for s in 0..=STEPS {
                let subjectivity = f64::from(s) / f64::from(STEPS);
                let analysis =
                    SentimentAnalysis::from_score(SentimentScore::new(polarity, subjectivity));
                assert!(
                    analysis.sympathy_score + 1e-9 >= previous,
                    "sympathy dropped at polarity {polarity}, subjectivity {subjectivity}"
                );
                previous = analysis.sympathy_score;
            }
        }
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        for p in -STEPS..=STEPS {
            for s in 0..=STEPS {
                let polarity = f64::from(p) / f64::from(STEPS);
                let subjectivity = f64::from(s) / f64::from(STEPS);
                let analysis =
                    SentimentAnalysis::from_score(SentimentScore::new(polarity, subjectivity));
                assert!((0.0..=1.0).contains(&analysis.sympathy_score));
            }
        }
    }

    #[test]
    fn test_neutral_is_low() {
        let analysis = SentimentAnalysis::neutral();
        assert_eq!(analysis.sympathy_score, 0.0);
        assert_eq!(analysis.sympathy_level, SympathyLevel::Low);
    }
}
