use super::*;

#[test]
fn test_blank_and_sentinels_become_placeholder() {
    let normalizer = ValueNormalizer::default();
    for raw in ["", "   ", "\t", "NaN", "nan", "None", " None "] {
        assert_eq!(normalizer.normalize(raw), PLACEHOLDER, "{raw:?} should be missing");
    }
}

#[test]
fn test_values_are_trimmed_and_case_sensitive() {
    let normalizer = ValueNormalizer::default();
    assert_eq!(normalizer.normalize("  Seoul U "), "Seoul U");
    assert_eq!(normalizer.normalize("NONE"), "NONE");
    assert_eq!(normalizer.normalize("nAn"), "nAn");
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = ValueNormalizer::default();
    for raw in ["", "nan", " x ", "Seoul U", PLACEHOLDER] {
        let once = normalizer.normalize(raw);
        assert_eq!(normalizer.normalize(&once), once);
    }
}

#[test]
fn test_custom_placeholder_and_sentinels() {
    let normalizer = ValueNormalizer::new("(none)", ["-", "N/A"]);
    assert_eq!(normalizer.normalize("-"), "(none)");
    assert_eq!(normalizer.normalize("N/A"), "(none)");
    assert_eq!(normalizer.normalize(""), "(none)");
    assert_eq!(normalizer.normalize("nan"), "nan");
    assert!(normalizer.is_absent("(none)"));
}

#[test]
fn test_normalize_all_preserves_order() {
    let normalizer = ValueNormalizer::default();
    let out = normalizer.normalize_all(["b", "", "a"]);
    assert_eq!(out, ["b", PLACEHOLDER, "a"]);
}
