use crate::engine::SwipeEngine;
use crate::error::{SwResult, SwipeError};
use crate::geometry::KeyboardGeometry;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Noise model for synthetic gestures.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisParams {
    /// Each intended key is sampled 1..=linger_max times.
    pub linger_max: usize,
    /// Chance of grazing an extra key on the way between two intended keys.
    pub drift_probability: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            linger_max: 3,
            drift_probability: 0.3,
        }
    }
}

/// Builds a plausible raw trace for `word`: intended keys repeat while the
/// pointer lingers, and drift letters are taken from the key nearest a random
/// point on the straight path between consecutive keys.
pub fn synthesize_trace(
    word: &str,
    geometry: &KeyboardGeometry,
    params: &SynthesisParams,
    rng: &mut fastrand::Rng,
) -> String {
    let keys: Vec<(u8, (f32, f32))> = word
        .bytes()
        .filter_map(|b| geometry.position(b).map(|p| (b.to_ascii_lowercase(), p)))
        .collect();

    let mut trace = String::with_capacity(keys.len() * params.linger_max.max(1) * 2);
    for (i, &(letter, from)) in keys.iter().enumerate() {
        let repeats = rng.usize(1..=params.linger_max.max(1));
        for _ in 0..repeats {
            trace.push(letter as char);
        }

        if let Some(&(_, to)) = keys.get(i + 1) {
            if rng.f64() < params.drift_probability {
                let t = 0.2 + 0.6 * rng.f32();
                let x = from.0 + (to.0 - from.0) * t;
                let y = from.1 + (to.1 - from.1) * t;
                if let Some(drift) = geometry.nearest_letter(x, y) {
                    trace.push(drift as char);
                }
            }
        }
    }
    trace
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSample {
    pub trace: String,
    pub expected: String,
}

/// Reads `trace<TAB>expected_word` lines. Lines with fewer than two fields are skipped.
pub fn load_labeled_samples<P: AsRef<Path>>(path: P) -> SwResult<Vec<LabeledSample>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.len() < 2 || rec[0].is_empty() || rec[1].is_empty() {
            continue;
        }
        samples.push(LabeledSample {
            trace: rec[0].to_string(),
            expected: rec[1].to_ascii_lowercase(),
        });
    }

    if samples.is_empty() {
        return Err(SwipeError::Validation(
            "Labelled sample file contained no samples".to_string(),
        ));
    }
    Ok(samples)
}

/// Synthesises `count` samples from the current dictionary, drawing words
/// uniformly. Deterministic for a given seed.
pub fn synthetic_samples(
    engine: &SwipeEngine,
    geometry: &KeyboardGeometry,
    params: &SynthesisParams,
    count: usize,
    seed: u64,
) -> Vec<LabeledSample> {
    let Some(dictionary) = engine.snapshot() else {
        return Vec::new();
    };
    let entries = dictionary.entries();
    let mut rng = fastrand::Rng::with_seed(seed);

    (0..count)
        .map(|_| {
            let entry = &entries[rng.usize(..entries.len())];
            LabeledSample {
                trace: synthesize_trace(entry.word(), geometry, params, &mut rng),
                expected: entry.word().to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvalSummary {
    pub samples: usize,
    pub top1: usize,
    pub top_k: usize,
    pub k: usize,
    /// Samples whose expected word is not in the dictionary at all.
    pub out_of_vocabulary: usize,
    /// Samples that produced no predictions.
    pub empty: usize,
}

impl EvalSummary {
    pub fn top1_rate(&self) -> f64 {
        ratio(self.top1, self.samples)
    }

    pub fn top_k_rate(&self) -> f64 {
        ratio(self.top_k, self.samples)
    }
}

fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 {
        0.0
    } else {
        n as f64 / d as f64
    }
}

/// Runs every sample through `engine` in parallel and tallies accuracy.
pub fn evaluate(engine: &SwipeEngine, samples: &[LabeledSample], k: usize) -> EvalSummary {
    let k = k.max(1);
    let snapshot = engine.snapshot();

    samples
        .par_iter()
        .map(|s| {
            let mut one = EvalSummary {
                samples: 1,
                k,
                ..Default::default()
            };
            let known = snapshot
                .as_ref()
                .is_some_and(|d| d.contains(&s.expected));
            if !known {
                one.out_of_vocabulary = 1;
            }
            let predictions = match &snapshot {
                Some(d) => engine.predict_with(d, &s.trace, k),
                None => Vec::new(),
            };
            if predictions.is_empty() {
                one.empty = 1;
            }
            if predictions.first().is_some_and(|p| p.word == s.expected) {
                one.top1 = 1;
            }
            if predictions.iter().any(|p| p.word == s.expected) {
                one.top_k = 1;
            }
            one
        })
        .reduce(
            || EvalSummary {
                k,
                ..Default::default()
            },
            |a, b| EvalSummary {
                samples: a.samples + b.samples,
                top1: a.top1 + b.top1,
                top_k: a.top_k + b.top_k,
                k,
                out_of_vocabulary: a.out_of_vocabulary + b.out_of_vocabulary,
                empty: a.empty + b.empty,
            },
        )
}
