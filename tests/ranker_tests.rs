use rstest::rstest;
use swipe_engine::ranker::{clamp_limit, compare, rank};
use swipe_engine::scorer::Candidate;

fn cand(word: &str, score: f64, frequency: f64) -> Candidate<'_> {
    Candidate {
        word,
        distance: 0.0,
        frequency,
        score,
    }
}

fn order<'a>(ranked: &[Candidate<'a>]) -> Vec<&'a str> {
    ranked.iter().map(|c| c.word).collect()
}

#[test]
fn test_score_dominates() {
    let ranked = rank(
        vec![cand("low", 0.2, 900.0), cand("high", 0.9, 1.0), cand("mid", 0.5, 5.0)],
        10,
    );
    assert_eq!(order(&ranked), vec!["high", "mid", "low"]);
}

#[test]
fn test_frequency_then_word_break_ties() {
    let ranked = rank(
        vec![
            cand("zeta", 0.5, 10.0),
            cand("beta", 0.5, 10.0),
            cand("alpha", 0.5, 20.0),
        ],
        10,
    );
    assert_eq!(order(&ranked), vec!["alpha", "beta", "zeta"]);
}

#[test]
fn test_partial_selection_matches_full_sort() {
    let words: Vec<String> = (0..200).map(|i| format!("w{:03}", i)).collect();
    let pool: Vec<Candidate> = words
        .iter()
        .enumerate()
        .map(|(i, w)| cand(w, ((i * 37) % 101) as f64 / 100.0, (i % 7) as f64 + 1.0))
        .collect();

    let mut full = pool.clone();
    full.sort_by(compare);

    let top = rank(pool, 15);
    assert_eq!(order(&top), order(&full[..15]));
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(3, 3)]
#[case(10, 5)]
fn test_limit_bounds_output(#[case] limit: usize, #[case] expected: usize) {
    let pool = vec![
        cand("a", 0.1, 1.0),
        cand("b", 0.2, 1.0),
        cand("c", 0.3, 1.0),
        cand("d", 0.4, 1.0),
        cand("e", 0.5, 1.0),
    ];
    assert_eq!(rank(pool, limit).len(), expected);
}

#[test]
fn test_empty_pool() {
    assert!(rank(Vec::new(), 5).is_empty());
}

#[rstest]
#[case(-5, 0)]
#[case(-1, 0)]
#[case(0, 0)]
#[case(7, 7)]
fn test_clamp_limit(#[case] raw: i64, #[case] expected: usize) {
    assert_eq!(clamp_limit(raw), expected);
}
