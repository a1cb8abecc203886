use proptest::prelude::*;
use rstest::rstest;
use swipe_engine::normalize::{normalize, GestureNormalizer, DEFAULT_MAX_QUERY_LEN};
use swipe_engine::scorer::ProximityModel;

#[rstest]
#[case("caaat", "cat")]
#[case("hhheeelllooo", "helo")]
#[case("HeLLo", "helo")]
#[case("c a t", "cat")]
#[case("q-w-e", "qwe")]
#[case("", "")]
#[case("1234 !?", "")]
#[case("\u{e9}t\u{e9}", "t")]
fn test_normalize_cases(#[case] trace: &str, #[case] expected: &str) {
    assert_eq!(normalize(trace).as_str(), expected);
}

#[test]
fn test_default_cap_truncates_trailing_letters() {
    let trace: String = "ab".repeat(100);
    let q = normalize(&trace);
    assert_eq!(q.len(), DEFAULT_MAX_QUERY_LEN);
    assert_eq!(&q.as_str()[..4], "abab");
    assert!(q.is_truncated());
    assert!(!normalize("abab").is_truncated());
}

#[test]
fn test_layout_normalizer_drops_letters_without_keys() {
    let mut geom = swipe_engine::geometry::KeyboardGeometry::qwerty();
    geom.keys.retain(|k| k.letter != 'x');
    let model = ProximityModel::new(&geom);
    let n = GestureNormalizer::for_layout(&model, 64);
    // Removing 'x' joins the two runs of 'a'.
    assert_eq!(n.normalize("caxat").as_str(), "cat");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_normalize_is_idempotent(trace in "[a-zA-Z0-9 .,'!-]{0,120}") {
        let once = normalize(&trace);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalized_output_has_no_runs(trace in "\\PC{0,100}") {
        let q = normalize(&trace);
        prop_assert!(q.len() <= DEFAULT_MAX_QUERY_LEN);
        prop_assert!(q.iter().all(|b| b.is_ascii_lowercase()));
        prop_assert!(q.windows(2).all(|w| w[0] != w[1]));
    }
}
