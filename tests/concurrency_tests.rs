mod common;

use common::dict_text;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use swipe_engine::SwipeEngine;

const GEN_A: &[(&str, f64)] = &[
    ("cat", 50.0),
    ("car", 40.0),
    ("cab", 30.0),
    ("can", 20.0),
    ("cap", 10.0),
];
const GEN_B: &[(&str, f64)] = &[
    ("cot", 50.0),
    ("cut", 40.0),
    ("cup", 30.0),
    ("cog", 20.0),
    ("cod", 10.0),
];

fn word_set(entries: &[(&str, f64)]) -> HashSet<String> {
    entries.iter().map(|(w, _)| w.to_string()).collect()
}

#[test]
fn test_readers_never_observe_a_mixed_snapshot() {
    let engine = Arc::new(SwipeEngine::new());
    let text_a = dict_text(GEN_A);
    let text_b = dict_text(GEN_B);
    engine.load_str(&text_a).unwrap();

    let set_a = word_set(GEN_A);
    let set_b = word_set(GEN_B);
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let stop = Arc::clone(&stop);
            let (set_a, set_b) = (set_a.clone(), set_b.clone());
            thread::spawn(move || {
                let mut observed = 0usize;
                while !stop.load(Ordering::Relaxed) {
                    let preds = engine.predict("cat", 5);
                    assert!(!preds.is_empty(), "a loaded engine returned nothing");
                    let words: HashSet<String> = preds.into_iter().map(|p| p.word).collect();
                    assert!(
                        words.is_subset(&set_a) || words.is_subset(&set_b),
                        "mixed generations: {:?}",
                        words
                    );

                    // Generation 1 and every odd reload hold A; even generations hold B.
                    let snap = engine.snapshot().expect("snapshot vanished");
                    let tagged = if snap.generation() % 2 == 1 { &set_a } else { &set_b };
                    for p in engine.predict_with(&snap, "cat", 5) {
                        assert!(
                            tagged.contains(&p.word),
                            "'{}' not in generation {}",
                            p.word,
                            snap.generation()
                        );
                        assert!(snap.contains(&p.word));
                    }
                    observed += 1;
                }
                observed
            })
        })
        .collect();

    for i in 0..200 {
        let text = if i % 2 == 0 { &text_b } else { &text_a };
        assert_eq!(engine.load_str(text).unwrap(), 5);
    }
    stop.store(true, Ordering::Relaxed);

    for handle in readers {
        let observed = handle.join().expect("reader panicked");
        assert!(observed > 0);
    }
}

#[test]
fn test_concurrent_loads_serialise() {
    let engine = Arc::new(SwipeEngine::new());
    let text_a = Arc::new(dict_text(GEN_A));
    let text_b = Arc::new(dict_text(GEN_B));

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let text = if i % 2 == 0 {
                Arc::clone(&text_a)
            } else {
                Arc::clone(&text_b)
            };
            thread::spawn(move || {
                for _ in 0..25 {
                    engine.load_str(&text).unwrap();
                }
            })
        })
        .collect();
    for handle in writers {
        handle.join().expect("writer panicked");
    }

    // 100 successful loads, generations handed out from 1.
    assert_eq!(engine.generation(), 100);
    assert_eq!(engine.word_count(), 5);

    let final_set: HashSet<String> = engine
        .snapshot()
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.word().to_string())
        .collect();
    assert!(final_set == word_set(GEN_A) || final_set == word_set(GEN_B));
}

#[test]
fn test_snapshot_outlives_replacement() {
    let engine = SwipeEngine::new();
    engine.load_str(&dict_text(GEN_A)).unwrap();
    let old = engine.snapshot().unwrap();

    engine.load_str(&dict_text(GEN_B)).unwrap();
    assert!(old.contains("cat"));
    assert!(!old.contains("cot"));

    let preds = engine.predict_with(&old, "cat", 1);
    assert_eq!(preds[0].word, "cat");
    assert!(engine.generation() > old.generation());
}
