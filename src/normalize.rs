use crate::geometry::{letter_slot, ALPHABET_SIZE};
use crate::scorer::proximity::ProximityModel;
use std::ops::Deref;

/// Default cap on query length. Longer traces are truncated.
pub const DEFAULT_MAX_QUERY_LEN: usize = 64;

/// A gesture trace reduced to lowercase layout letters with runs collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedQuery {
    letters: Vec<u8>,
    truncated: bool,
}

impl NormalizedQuery {
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    pub fn first(&self) -> Option<u8> {
        self.letters.first().copied()
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII lowercase letters are ever pushed.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// True when the trace had more letters than the length cap kept.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Deref for NormalizedQuery {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.letters
    }
}

#[derive(Debug, Clone)]
pub struct GestureNormalizer {
    alphabet: [bool; ALPHABET_SIZE],
    max_len: usize,
}

impl GestureNormalizer {
    /// Accepts every letter `a..=z`.
    pub fn new(max_len: usize) -> Self {
        Self {
            alphabet: [true; ALPHABET_SIZE],
            max_len,
        }
    }

    /// Accepts only letters that have a key on the proximity model's layout.
    pub fn for_layout(model: &ProximityModel, max_len: usize) -> Self {
        let mut alphabet = [false; ALPHABET_SIZE];
        for (slot, allowed) in alphabet.iter_mut().enumerate() {
            *allowed = model.contains(b'a' + slot as u8);
        }
        Self { alphabet, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn normalize(&self, trace: &str) -> NormalizedQuery {
        let mut out = Vec::with_capacity(trace.len().min(self.max_len));
        let mut truncated = false;
        for b in trace.bytes() {
            let Some(slot) = letter_slot(b) else {
                continue;
            };
            if !self.alphabet[slot] {
                continue;
            }
            let lower = b.to_ascii_lowercase();
            if out.last() == Some(&lower) {
                continue;
            }
            if out.len() >= self.max_len {
                truncated = true;
                break;
            }
            out.push(lower);
        }
        NormalizedQuery {
            letters: out,
            truncated,
        }
    }
}

impl Default for GestureNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUERY_LEN)
    }
}

/// Normalises against the full `a..=z` alphabet with the default length cap.
pub fn normalize(trace: &str) -> NormalizedQuery {
    GestureNormalizer::default().normalize(trace)
}

/// Collapses consecutive duplicate letters ("hello" -> "helo").
pub fn collapse_runs(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut last = None;
    for c in word.chars() {
        if last != Some(c) {
            out.push(c);
            last = Some(c);
        }
    }
    out
}
