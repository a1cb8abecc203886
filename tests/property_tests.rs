mod common;

use proptest::prelude::*;
use std::sync::OnceLock;
use swipe_engine::SwipeEngine;

const VOCAB: &[(&str, f64)] = &[
    ("the", 5000.0),
    ("that", 2100.0),
    ("this", 1900.0),
    ("there", 900.0),
    ("then", 800.0),
    ("quick", 120.0),
    ("quiet", 80.0),
    ("brown", 60.0),
    ("fox", 45.0),
    ("jumps", 30.0),
    ("over", 700.0),
    ("lazy", 25.0),
    ("dog", 210.0),
    ("door", 150.0),
    ("keyboard", 12.0),
    ("swipe", 9.0),
    ("street", 40.0),
    ("letter", 55.0),
];

fn engine() -> &'static SwipeEngine {
    static ENGINE: OnceLock<SwipeEngine> = OnceLock::new();
    ENGINE.get_or_init(|| common::engine_with(VOCAB))
}

proptest! {
    #[test]
    fn prop_predictions_are_bounded_and_sorted(trace in "[a-z]{0,20}", limit in 0usize..12) {
        let preds = engine().predict(&trace, limit);
        prop_assert!(preds.len() <= limit);
        for p in &preds {
            prop_assert!(p.score > 0.0 && p.score <= 1.0, "score out of range: {:?}", p);
            prop_assert!(p.frequency > 0.0);
        }
        for pair in preds.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_arbitrary_input_never_panics(trace in "\\PC{0,40}") {
        let _ = engine().predict(&trace, 5);
    }

    #[test]
    fn prop_every_word_is_retrievable(idx in 0..VOCAB.len(), linger in 1usize..4) {
        let (word, _) = VOCAB[idx];
        let trace: String = word
            .chars()
            .flat_map(|c| std::iter::repeat(c).take(linger))
            .collect();
        let preds = engine().predict(&trace, VOCAB.len());
        prop_assert!(
            preds.iter().any(|p| p.word == word),
            "'{}' missing for trace '{}'",
            word,
            trace
        );
    }
}
