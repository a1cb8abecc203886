use super::proximity::ProximityModel;
use crate::config::ScoringWeights;

/// Weighted edit-distance aligner between a normalised query and a canonical
/// word sequence.
///
/// The `(m + 1) x (n + 1)` table is a flat row-major buffer that only ever
/// grows, so repeated calls from one thread do not allocate once warmed up.
#[derive(Debug, Default)]
pub struct Aligner {
    table: Vec<f64>,
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the table for queries up to `max_query` and words up to `max_word` letters.
    pub fn with_capacity(max_query: usize, max_word: usize) -> Self {
        Self {
            table: Vec::with_capacity((max_query + 1) * (max_word + 1)),
        }
    }

    /// Minimum total cost to align `query` (rows) with `word` (columns).
    ///
    /// * diagonal: substitution, `proximity.cost(q, w)` (0 on a match)
    /// * down: the query has an extra letter (insertion)
    /// * right: the word has a letter the gesture never sampled (deletion)
    pub fn distance(
        &mut self,
        query: &[u8],
        word: &[u8],
        proximity: &ProximityModel,
        weights: &ScoringWeights,
    ) -> f64 {
        let rows = query.len() + 1;
        let cols = word.len() + 1;
        let ins = weights.insertion_penalty;
        let del = weights.deletion_penalty;

        if self.table.len() < rows * cols {
            self.table.resize(rows * cols, 0.0);
        }
        let t = &mut self.table[..rows * cols];

        for i in 0..rows {
            t[i * cols] = i as f64 * ins;
        }
        for j in 0..cols {
            t[j] = j as f64 * del;
        }

        for i in 1..rows {
            let q = query[i - 1];
            let row = i * cols;
            let prev = (i - 1) * cols;
            for j in 1..cols {
                let sub = t[prev + j - 1] + proximity.cost(q, word[j - 1]);
                let insert = t[prev + j] + ins;
                let delete = t[row + j - 1] + del;
                t[row + j] = sub.min(insert).min(delete);
            }
        }

        t[rows * cols - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(q: &str, w: &str) -> f64 {
        let model = ProximityModel::default();
        let weights = ScoringWeights::default();
        Aligner::new().distance(q.as_bytes(), w.as_bytes(), &model, &weights)
    }

    #[test]
    fn identical_sequences_cost_nothing() {
        assert_eq!(run("helo", "helo"), 0.0);
    }

    #[test]
    fn boundary_rows_are_cumulative_penalties() {
        let w = ScoringWeights::default();
        assert!((run("abc", "") - 3.0 * w.insertion_penalty).abs() < 1e-12);
        assert!((run("", "abc") - 3.0 * w.deletion_penalty).abs() < 1e-12);
    }

    #[test]
    fn drift_letter_costs_one_insertion() {
        let w = ScoringWeights::default();
        // 'x' grazed between 'c' and 'a'
        assert!((run("cxat", "cat") - w.insertion_penalty).abs() < 1e-12);
    }

    #[test]
    fn near_substitution_is_cheaper_than_far() {
        assert!(run("cat", "car") < run("cat", "cap"));
    }

    #[test]
    fn reused_table_gives_same_answer() {
        let model = ProximityModel::default();
        let weights = ScoringWeights::default();
        let mut aligner = Aligner::new();
        let long = aligner.distance(b"abcdefghij", b"abcdefg", &model, &weights);
        let short = aligner.distance(b"cat", b"car", &model, &weights);
        assert_eq!(short, run("cat", "car"));
        assert_eq!(long, run("abcdefghij", "abcdefg"));
    }
}
