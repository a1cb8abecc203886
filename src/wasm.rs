//! Browser boundary. Mirrors the C boundary over its own process-wide engine,
//! with plain strings and numbers in place of raw pointers.

use crate::config::{Config, DecoderParams};
use crate::engine::SwipeEngine;
use crate::geometry::KeyboardGeometry;
use std::sync::OnceLock;
use tracing::warn;
use wasm_bindgen::prelude::*;

static ENGINE: OnceLock<SwipeEngine> = OnceLock::new();

fn engine() -> &'static SwipeEngine {
    ENGINE.get_or_init(|| {
        // wasm32 has no thread pool to hand rayon; always score sequentially.
        let config = Config {
            decoder: DecoderParams {
                parallel_threshold: usize::MAX,
                ..Default::default()
            },
            ..Default::default()
        };
        SwipeEngine::with_config(&KeyboardGeometry::qwerty(), &config).unwrap_or_else(|e| {
            warn!("falling back to default engine: {}", e);
            SwipeEngine::new()
        })
    })
}

/// Replaces the dictionary with `text` (`word<TAB>frequency` lines).
/// Returns the entry count, or 0 when nothing valid was loaded.
#[wasm_bindgen]
pub fn init_dictionary(text: &str) -> usize {
    match engine().load_str(text) {
        Ok(count) => count,
        Err(e) => {
            warn!("dictionary rejected: {}", e);
            0
        }
    }
}

/// Ranked predictions as a JSON array of `{word, score, freq}` records.
#[wasm_bindgen]
pub fn predict_wasm(input: &str, limit: usize) -> String {
    engine().predict_json(input, limit)
}

#[wasm_bindgen]
pub fn word_count_wasm() -> usize {
    engine().word_count()
}

#[wasm_bindgen]
pub fn set_pop_weight_wasm(weight: f64) {
    engine().set_popularity_weight(weight);
}
