pub mod loader;

use crate::error::{LoadError, SwResult, SwipeError};
use crate::normalize::collapse_runs;
use std::collections::HashMap;

/// One dictionary word with its prior frequency and the letter path a
/// gesture can actually distinguish.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    word: String,
    frequency: f64,
    canonical: String,
}

impl WordEntry {
    /// Lowercases `word` and validates both fields. Only ASCII letters are accepted.
    pub fn new(word: &str, frequency: f64) -> SwResult<Self> {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() {
            return Err(SwipeError::Validation("Word is empty".to_string()));
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SwipeError::Validation(format!(
                "Word '{}' contains non-letter characters",
                word
            )));
        }
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(SwipeError::Validation(format!(
                "Frequency for '{}' must be positive, got {}",
                word, frequency
            )));
        }
        let canonical = collapse_runs(&word);
        Ok(Self {
            word,
            frequency,
            canonical,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[inline(always)]
    pub fn canonical_bytes(&self) -> &[u8] {
        self.canonical.as_bytes()
    }

    #[inline(always)]
    pub fn first_letter(&self) -> u8 {
        // Non-empty by construction.
        self.canonical.as_bytes()[0]
    }
}

/// Immutable snapshot of entries plus the (first letter, canonical length) index
/// used for pruning. Never mutated after construction; replaced wholesale.
#[derive(Debug)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
    by_word: HashMap<String, usize>,
    buckets: HashMap<(u8, usize), Vec<usize>>,
    max_frequency: f64,
    max_canonical_len: usize,
    generation: u64,
}

impl Dictionary {
    /// Builds a snapshot. Repeated words keep their highest frequency.
    pub fn from_entries<I>(entries: I, generation: u64) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut merged: HashMap<String, WordEntry> = HashMap::new();
        for entry in entries {
            match merged.get_mut(entry.word()) {
                Some(existing) if existing.frequency >= entry.frequency => {}
                Some(existing) => *existing = entry,
                None => {
                    merged.insert(entry.word.clone(), entry);
                }
            }
        }

        if merged.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut entries: Vec<WordEntry> = merged.into_values().collect();
        entries.sort_by(|a, b| a.word.cmp(&b.word));

        let mut by_word = HashMap::with_capacity(entries.len());
        let mut buckets: HashMap<(u8, usize), Vec<usize>> = HashMap::new();
        let mut max_frequency = 0.0f64;
        let mut max_canonical_len = 0;

        for (idx, entry) in entries.iter().enumerate() {
            by_word.insert(entry.word.clone(), idx);
            buckets
                .entry((entry.first_letter(), entry.canonical.len()))
                .or_default()
                .push(idx);
            max_frequency = max_frequency.max(entry.frequency);
            max_canonical_len = max_canonical_len.max(entry.canonical.len());
        }

        Ok(Self {
            entries,
            by_word,
            buckets,
            max_frequency,
            max_canonical_len,
            generation,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.by_word.get(word).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    pub fn max_canonical_len(&self) -> usize {
        self.max_canonical_len
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entries starting with `first` whose canonical sequence has exactly `len` letters.
    pub fn bucket(&self, first: u8, len: usize) -> impl Iterator<Item = &WordEntry> + '_ {
        self.buckets
            .get(&(first, len))
            .into_iter()
            .flatten()
            .map(move |&idx| &self.entries[idx])
    }

    /// Bucket sizes keyed by (first letter, canonical length), sorted by key.
    pub fn bucket_histogram(&self) -> Vec<((char, usize), usize)> {
        let mut hist: Vec<((char, usize), usize)> = self
            .buckets
            .iter()
            .map(|(&(first, len), idxs)| ((first as char, len), idxs.len()))
            .collect();
        hist.sort_by(|a, b| a.0.cmp(&b.0));
        hist
    }
}
