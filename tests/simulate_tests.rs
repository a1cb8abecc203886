mod common;

use common::engine_with;
use std::io::Write;
use swipe_engine::geometry::KeyboardGeometry;
use swipe_engine::normalize::{collapse_runs, normalize};
use swipe_engine::simulate::{
    evaluate, load_labeled_samples, synthesize_trace, synthetic_samples, LabeledSample,
    SynthesisParams,
};
use tempfile::NamedTempFile;

const VOCAB: &[(&str, f64)] = &[
    ("hello", 400.0),
    ("world", 300.0),
    ("keyboard", 50.0),
    ("gesture", 20.0),
    ("typing", 80.0),
    ("quick", 60.0),
    ("brown", 40.0),
    ("zebra", 5.0),
];

#[test]
fn test_clean_trace_collapses_to_word() {
    let geom = KeyboardGeometry::qwerty();
    let params = SynthesisParams {
        linger_max: 4,
        drift_probability: 0.0,
    };
    let mut rng = fastrand::Rng::with_seed(7);
    for (word, _) in VOCAB {
        let trace = synthesize_trace(word, &geom, &params, &mut rng);
        assert!(trace.len() >= word.len());
        assert_eq!(normalize(&trace).as_str(), collapse_runs(word));
    }
}

#[test]
fn test_synthetic_samples_are_deterministic() {
    let engine = engine_with(VOCAB);
    let geom = KeyboardGeometry::qwerty();
    let params = SynthesisParams::default();

    let a = synthetic_samples(&engine, &geom, &params, 50, 42);
    let b = synthetic_samples(&engine, &geom, &params, 50, 42);
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
    assert!(a.iter().all(|s| VOCAB.iter().any(|(w, _)| *w == s.expected)));
}

#[test]
fn test_no_dictionary_no_samples() {
    let engine = swipe_engine::SwipeEngine::new();
    let samples = synthetic_samples(
        &engine,
        &KeyboardGeometry::qwerty(),
        &SynthesisParams::default(),
        10,
        1,
    );
    assert!(samples.is_empty());
}

#[test]
fn test_clean_traces_decode_top1() {
    let engine = engine_with(VOCAB);
    let params = SynthesisParams {
        linger_max: 3,
        drift_probability: 0.0,
    };
    let samples = synthetic_samples(&engine, &KeyboardGeometry::qwerty(), &params, 100, 3);
    let summary = evaluate(&engine, &samples, 3);

    assert_eq!(summary.samples, 100);
    assert_eq!(summary.top1, 100);
    assert_eq!(summary.top_k, 100);
    assert_eq!(summary.out_of_vocabulary, 0);
    assert_eq!(summary.top1_rate(), 1.0);
}

#[test]
fn test_evaluate_tallies_misses() {
    let engine = engine_with(VOCAB);
    let samples = vec![
        LabeledSample {
            trace: "heeelllooo".to_string(),
            expected: "hello".to_string(),
        },
        LabeledSample {
            trace: "xylophone".to_string(),
            expected: "xylophone".to_string(),
        },
        LabeledSample {
            trace: "123".to_string(),
            expected: "world".to_string(),
        },
    ];
    let summary = evaluate(&engine, &samples, 5);

    assert_eq!(summary.samples, 3);
    assert_eq!(summary.k, 5);
    assert_eq!(summary.top1, 1);
    assert_eq!(summary.out_of_vocabulary, 1);
    assert_eq!(summary.empty, 2);
}

#[test]
fn test_labeled_samples_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# trace\texpected").unwrap();
    writeln!(file, "heelllo\tHello").unwrap();
    writeln!(file, "orphan").unwrap();
    writeln!(file, "wworld\tworld").unwrap();
    file.flush().unwrap();

    let samples = load_labeled_samples(file.path()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].expected, "hello");
    assert_eq!(samples[1].trace, "wworld");
}

#[test]
fn test_empty_labeled_file_rejected() {
    let file = NamedTempFile::new().unwrap();
    assert!(load_labeled_samples(file.path()).is_err());
}
