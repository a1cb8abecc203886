use crate::config::{Config, DecoderParams, ScoringWeights};
use crate::dictionary::{loader, Dictionary};
use crate::error::{LoadError, SwResult};
use crate::geometry::KeyboardGeometry;
use crate::normalize::GestureNormalizer;
use crate::pruner;
use crate::ranker;
use crate::scorer::{Prediction, ProximityModel, Scorer};
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Owns the current dictionary snapshot and serves predictions against it.
///
/// Publication is a pointer swap under a short write lock. Predictions clone
/// the `Arc` under a read lock and release it before scoring, so an in-flight
/// prediction keeps its snapshot alive and never sees a partial replacement.
/// Loads are serialised with each other through `load_lock`.
pub struct SwipeEngine {
    proximity: ProximityModel,
    normalizer: GestureNormalizer,
    decoder: DecoderParams,
    separator: u8,
    weights: RwLock<ScoringWeights>,
    current: RwLock<Option<Arc<Dictionary>>>,
    load_lock: Mutex<()>,
    next_generation: AtomicU64,
}

impl SwipeEngine {
    /// QWERTY layout with default configuration.
    pub fn new() -> Self {
        let config = Config::default();
        Self::build(&KeyboardGeometry::qwerty(), &config, b'\t')
    }

    pub fn with_config(geometry: &KeyboardGeometry, config: &Config) -> SwResult<Self> {
        config.validate()?;
        geometry.validate()?;
        let separator = config.loader.separator_byte()?;
        Ok(Self::build(geometry, config, separator))
    }

    fn build(geometry: &KeyboardGeometry, config: &Config, separator: u8) -> Self {
        let proximity = ProximityModel::new(geometry);
        let normalizer = GestureNormalizer::for_layout(&proximity, config.decoder.max_query_len);
        Self {
            proximity,
            normalizer,
            decoder: config.decoder,
            separator,
            weights: RwLock::new(config.weights),
            current: RwLock::new(None),
            load_lock: Mutex::new(()),
            next_generation: AtomicU64::new(1),
        }
    }

    // --- Loading ---

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<usize, LoadError> {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let parsed = loader::parse_file(path, self.separator)?;
        self.publish(parsed)
    }

    pub fn load_str(&self, content: &str) -> Result<usize, LoadError> {
        self.load_reader(content.as_bytes())
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<usize, LoadError> {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let parsed = loader::parse_reader(reader, self.separator)?;
        self.publish(parsed)
    }

    // Caller holds `load_lock`.
    fn publish(&self, parsed: loader::ParsedSource) -> Result<usize, LoadError> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let dictionary = Dictionary::from_entries(parsed.entries, generation).map_err(|e| {
            warn!(
                "❌ Dictionary load rejected after {} lines: {}",
                parsed.lines_read, e
            );
            e
        })?;
        let count = dictionary.len();

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(dictionary));
        drop(slot);

        info!(
            "📚 Published dictionary generation {} ({} entries)",
            generation, count
        );
        Ok(count)
    }

    // --- Status ---

    /// The snapshot predictions currently run against.
    pub fn snapshot(&self) -> Option<Arc<Dictionary>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    pub fn word_count(&self) -> usize {
        self.snapshot().map_or(0, |d| d.len())
    }

    /// Generation of the current snapshot, 0 before the first successful load.
    pub fn generation(&self) -> u64 {
        self.snapshot().map_or(0, |d| d.generation())
    }

    // --- Tuning ---

    pub fn weights(&self) -> ScoringWeights {
        *self.weights.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_weights(&self, weights: ScoringWeights) -> SwResult<()> {
        weights.validate()?;
        *self.weights.write().unwrap_or_else(PoisonError::into_inner) = weights;
        Ok(())
    }

    /// Sets the share of the score taken by word frequency (`1 - alpha`).
    pub fn set_popularity_weight(&self, weight: f64) {
        if !weight.is_finite() {
            return;
        }
        let mut w = self.weights.write().unwrap_or_else(PoisonError::into_inner);
        *w = w.with_popularity_weight(weight);
    }

    pub fn decoder(&self) -> &DecoderParams {
        &self.decoder
    }

    pub fn proximity(&self) -> &ProximityModel {
        &self.proximity
    }

    pub fn normalizer(&self) -> &GestureNormalizer {
        &self.normalizer
    }

    // --- Prediction ---

    /// Ranked predictions for a raw trace. Never fails: no dictionary, an
    /// empty query or no candidates all yield an empty list.
    pub fn predict(&self, trace: &str, limit: usize) -> Vec<Prediction> {
        match self.snapshot() {
            Some(dictionary) => self.predict_with(&dictionary, trace, limit),
            None => {
                debug!("predict called before any dictionary was loaded");
                Vec::new()
            }
        }
    }

    /// Same as [`predict`](Self::predict) against an explicit snapshot.
    pub fn predict_with(&self, dictionary: &Dictionary, trace: &str, limit: usize) -> Vec<Prediction> {
        if limit == 0 {
            return Vec::new();
        }
        let query = self.normalizer.normalize(trace);
        let pool = pruner::candidates(&query, dictionary, self.decoder.length_window);
        if pool.is_empty() {
            return Vec::new();
        }

        let scorer = Scorer::new(&self.proximity, self.weights());
        let scored = scorer.score_all(
            &query,
            &pool,
            dictionary.max_frequency(),
            self.decoder.parallel_threshold,
        );
        debug!(
            "query '{}' scored {} candidates (generation {})",
            query.as_str(),
            scored.len(),
            dictionary.generation()
        );

        ranker::rank(scored, limit)
            .iter()
            .map(Prediction::from)
            .collect()
    }

    /// Predictions serialised as a JSON array of `{word, score, freq}` records.
    pub fn predict_json(&self, trace: &str, limit: usize) -> String {
        let predictions = self.predict(trace, limit);
        serde_json::to_string(&predictions).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for SwipeEngine {
    fn default() -> Self {
        Self::new()
    }
}
