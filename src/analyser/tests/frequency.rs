use super::*;

#[test]
fn test_single_file_tie_break_follows_first_appearance() {
    let normalizer = ValueNormalizer::default();
    let values = normalizer.normalize_all(["Seoul U", "Seoul U", "", "Busan U"]);
    let counts = count_values(&values);
    assert_eq!(
        counts.as_pairs(),
        [("Seoul U", 2), (PLACEHOLDER, 1), ("Busan U", 1)]
    );
}

#[test]
fn test_merge_over_concatenated_stream() {
    let merged = merge_counts(&[vec!["X", "Y"], vec!["Y", "Y"]]);
    assert_eq!(merged.as_pairs(), [("Y", 3), ("X", 1)]);
}

#[test]
fn test_merge_tie_break_uses_whole_stream() {
    // File B alone would rank "q" first, but "p" appears earlier in the stream.
    let merged = merge_counts(&[vec!["p"], vec!["q", "p", "q"]]);
    assert_eq!(merged.as_pairs(), [("p", 2), ("q", 2)]);
}

#[test]
fn test_merge_counts_do_not_depend_on_arrival_order() {
    let a = vec!["x", "y", "z", "y"];
    let b = vec!["z", "z", "w"];
    let forward = merge_counts(&[a.clone(), b.clone()]);
    let backward = merge_counts(&[b, a]);

    assert_eq!(forward.len(), backward.len());
    for entry in &forward {
        assert_eq!(backward.get(&entry.category), Some(entry.count));
    }
}

#[test]
fn test_total_matches_counted_values() {
    let sequences = vec![vec!["a", "b", "a"], vec![], vec!["c"]];
    let merged = merge_counts(&sequences);
    assert_eq!(merged.total(), 4);
}

#[test]
fn test_aggregate_without_values_is_empty_dataset() {
    let none: Vec<Vec<String>> = Vec::new();
    assert!(matches!(aggregate(&none), Err(crate::error::TallyError::EmptyDataset)));

    let only_empty: Vec<Vec<String>> = vec![Vec::new(), Vec::new()];
    assert!(matches!(
        aggregate(&only_empty),
        Err(crate::error::TallyError::EmptyDataset)
    ));
}

#[test]
fn test_counter_streaming_matches_batch_count() {
    let mut counter = FrequencyCounter::new();
    counter.add("a");
    counter.extend(["b", "a"]);
    assert_eq!(counter.total(), 3);
    assert_eq!(counter.finish(), count_values(&["a", "b", "a"]));
}
