use crate::error::{SwResult, SwipeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub decoder: DecoderParams,
    #[command(flatten)]
    pub loader: LoaderParams,
}

/// Tunable constants of the alignment scorer.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === ALIGNMENT ===
    // Extra query letter (gesture grazed an unintended key)
    #[arg(long, default_value_t = 0.4)]
    pub insertion_penalty: f64,
    // Word letter never sampled (gesture skipped an intended key)
    #[arg(long, default_value_t = 0.8)]
    pub deletion_penalty: f64,

    // === BLEND ===
    #[arg(long, default_value_t = 1.0)]
    pub similarity_scale: f64,
    #[arg(long, default_value_t = 0.75)]
    pub blend_alpha: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            insertion_penalty: 0.4,
            deletion_penalty: 0.8,
            similarity_scale: 1.0,
            blend_alpha: 0.75,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderParams {
    #[arg(long, default_value_t = 64)]
    pub max_query_len: usize,
    #[arg(long, default_value_t = 2)]
    pub length_window: usize,
    // Candidate sets at least this large are scored on the rayon pool
    #[arg(long, default_value_t = 512)]
    pub parallel_threshold: usize,
    #[arg(long, default_value_t = 5)]
    pub default_limit: usize,
}

impl Default for DecoderParams {
    fn default() -> Self {
        Self {
            max_query_len: 64,
            length_window: 2,
            parallel_threshold: 512,
            default_limit: 5,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderParams {
    #[arg(long = "dict-separator", default_value = "\t")]
    pub separator: String,
}

impl Default for LoaderParams {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
        }
    }
}

impl LoaderParams {
    pub fn separator_byte(&self) -> SwResult<u8> {
        match self.separator.as_bytes() {
            [b] if matches!(b, b'\t' | b',' | b';' | b' ' | b'|') => Ok(*b),
            _ => Err(SwipeError::Config(format!(
                "Unsupported dictionary separator {:?}",
                self.separator
            ))),
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SwResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> SwResult<()> {
        if !(self.blend_alpha > 0.0 && self.blend_alpha < 1.0) {
            return Err(SwipeError::Config(format!(
                "blend_alpha must lie in (0, 1), got {}",
                self.blend_alpha
            )));
        }
        if !(self.similarity_scale.is_finite() && self.similarity_scale > 0.0) {
            return Err(SwipeError::Config(format!(
                "similarity_scale must be positive, got {}",
                self.similarity_scale
            )));
        }
        if !(self.insertion_penalty.is_finite() && self.insertion_penalty > 0.0) {
            return Err(SwipeError::Config(format!(
                "insertion_penalty must be positive, got {}",
                self.insertion_penalty
            )));
        }
        if !(self.deletion_penalty.is_finite() && self.deletion_penalty > self.insertion_penalty)
        {
            return Err(SwipeError::Config(format!(
                "deletion_penalty ({}) must exceed insertion_penalty ({})",
                self.deletion_penalty, self.insertion_penalty
            )));
        }
        Ok(())
    }

    /// Popularity weight as exposed to GUI callers: the share of the score taken by frequency.
    pub fn popularity_weight(&self) -> f64 {
        1.0 - self.blend_alpha
    }

    pub fn with_popularity_weight(mut self, weight: f64) -> Self {
        self.blend_alpha = (1.0 - weight).clamp(0.01, 0.99);
        self
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(insertion_penalty, "insertion_penalty");
        update_if_present!(deletion_penalty, "deletion_penalty");
        update_if_present!(similarity_scale, "similarity_scale");
        update_if_present!(blend_alpha, "blend_alpha");
    }
}

impl DecoderParams {
    pub fn validate(&self) -> SwResult<()> {
        if self.max_query_len == 0 {
            return Err(SwipeError::Config(
                "max_query_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> SwResult<()> {
        self.weights.validate()?;
        self.decoder.validate()?;
        self.loader.separator_byte()?;
        Ok(())
    }
}
