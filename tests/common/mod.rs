#![allow(dead_code)] // Not every test binary uses every helper

use std::io::Write;
use swipe_engine::SwipeEngine;
use tempfile::NamedTempFile;

/// Writes `(word, frequency)` pairs as a tab-separated dictionary file.
pub fn dict_file(entries: &[(&str, f64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (word, freq) in entries {
        writeln!(file, "{}\t{}", word, freq).unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn dict_text(entries: &[(&str, f64)]) -> String {
    entries
        .iter()
        .map(|(w, f)| format!("{}\t{}\n", w, f))
        .collect()
}

pub fn engine_with(entries: &[(&str, f64)]) -> SwipeEngine {
    let engine = SwipeEngine::new();
    engine.load_str(&dict_text(entries)).unwrap();
    engine
}

pub fn words(predictions: &[swipe_engine::Prediction]) -> Vec<&str> {
    predictions.iter().map(|p| p.word.as_str()).collect()
}
