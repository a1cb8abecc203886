use crate::scorer::Candidate;
use std::cmp::Ordering;

/// Total order used for ranking: score desc, frequency desc, word asc.
pub fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.frequency.total_cmp(&a.frequency))
        .then_with(|| a.word.cmp(b.word))
}

/// Orders candidates and keeps at most `limit`. A zero limit yields nothing.
pub fn rank<'a>(mut candidates: Vec<Candidate<'a>>, limit: usize) -> Vec<Candidate<'a>> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    if candidates.len() > limit {
        candidates.select_nth_unstable_by(limit - 1, compare);
        candidates.truncate(limit);
    }
    candidates.sort_unstable_by(compare);
    candidates
}

/// Converts a boundary-level signed limit; anything at or below zero ranks nothing.
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
