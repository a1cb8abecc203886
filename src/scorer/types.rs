use serde::{Deserialize, Serialize};

/// A scored dictionary entry. Borrows the word from the snapshot it was scored against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub distance: f64,
    pub frequency: f64,
    pub score: f64,
}

/// Owned ranking result, as serialised across the C boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub word: String,
    pub score: f64,
    #[serde(rename = "freq")]
    pub frequency: f64,
}

impl From<&Candidate<'_>> for Prediction {
    fn from(c: &Candidate<'_>) -> Self {
        Self {
            word: c.word.to_string(),
            score: c.score,
            frequency: c.frequency,
        }
    }
}
