pub mod align;
pub mod proximity;
pub mod types;

pub use self::align::Aligner;
pub use self::proximity::ProximityModel;
pub use self::types::{Candidate, Prediction};
use crate::config::ScoringWeights;
use crate::dictionary::WordEntry;
use rayon::prelude::*;

/// Combines path fidelity and prior frequency into a single score.
///
/// `score = S^alpha * (frequency / max_frequency)^(1 - alpha)` with
/// `S = exp(-distance / similarity_scale)`.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'m> {
    pub proximity: &'m ProximityModel,
    pub weights: ScoringWeights,
}

impl<'m> Scorer<'m> {
    pub fn new(proximity: &'m ProximityModel, weights: ScoringWeights) -> Self {
        Self { proximity, weights }
    }

    #[inline(always)]
    pub fn similarity(&self, distance: f64) -> f64 {
        (-distance / self.weights.similarity_scale).exp()
    }

    /// Geometric blend, evaluated in log space.
    #[inline(always)]
    pub fn blend(&self, distance: f64, frequency: f64, max_frequency: f64) -> f64 {
        let alpha = self.weights.blend_alpha;
        // ln(f / max_f) taken as a difference so tiny ratios do not underflow to 0.
        let log_f = if frequency > 0.0 && max_frequency > 0.0 {
            (frequency.ln() - max_frequency.ln()).min(0.0)
        } else {
            0.0
        };
        let log_s = -distance / self.weights.similarity_scale;
        (alpha * log_s + (1.0 - alpha) * log_f).exp()
    }

    pub fn score<'a>(
        &self,
        aligner: &mut Aligner,
        query: &[u8],
        entry: &'a WordEntry,
        max_frequency: f64,
    ) -> Candidate<'a> {
        let distance = aligner.distance(
            query,
            entry.canonical_bytes(),
            self.proximity,
            &self.weights,
        );
        Candidate {
            word: entry.word(),
            distance,
            frequency: entry.frequency(),
            score: self.blend(distance, entry.frequency(), max_frequency),
        }
    }

    /// Scores every entry. Large candidate sets are split across the rayon
    /// pool with one aligner table per worker.
    pub fn score_all<'a>(
        &self,
        query: &[u8],
        entries: &[&'a WordEntry],
        max_frequency: f64,
        parallel_threshold: usize,
    ) -> Vec<Candidate<'a>> {
        let max_word = entries
            .iter()
            .map(|e| e.canonical_bytes().len())
            .max()
            .unwrap_or(0);

        if entries.len() < parallel_threshold {
            let mut aligner = Aligner::with_capacity(query.len(), max_word);
            return entries
                .iter()
                .map(|e| self.score(&mut aligner, query, e, max_frequency))
                .collect();
        }

        entries
            .par_iter()
            .map_init(
                || Aligner::with_capacity(query.len(), max_word),
                |aligner, e| self.score(aligner, query, e, max_frequency),
            )
            .collect()
    }
}
