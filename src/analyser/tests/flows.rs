use super::*;
use crate::config::PipelineConfig;
use crate::error::TallyError;

fn row(name: &str, note: &str, univ: &str) -> [String; 7] {
    ["1", name, "2025", "3", "6", note, univ].map(str::to_owned)
}

fn table(source: &str, rows: &[[String; 7]]) -> Table {
    let header = ["no", "name", "year", "grade", "class", "note", "univ"]
        .map(str::to_owned)
        .to_vec();
    Table::new(source, header, rows.iter().map(|r| r.to_vec()).collect())
}

#[test]
fn test_single_file_scenario() {
    let files = vec![loaded(table(
        "3-6.xlsx",
        &[
            row("a", "", "Seoul U"),
            row("b", "", "Seoul U"),
            row("c", "", ""),
            row("d", "", "Busan U"),
        ],
    ))];
    let report = run_batch(files, &PipelineConfig::default()).unwrap();

    assert_eq!(report.column.name, "univ");
    assert_eq!(
        report.merged.as_pairs(),
        [("Seoul U", 2), (PLACEHOLDER, 1), ("Busan U", 1)]
    );
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.per_file.len(), 1);
    assert!(report.title.starts_with("2025 3 a "));
}

#[test]
fn test_two_file_merge_scenario() {
    let files = vec![
        loaded(table("a.csv", &[row("a", "", "X"), row("b", "", "Y")])),
        loaded(table("b.csv", &[row("c", "", "Y"), row("d", "", "Y")])),
    ];
    let report = run_batch(files, &PipelineConfig::default()).unwrap();

    assert_eq!(report.merged.as_pairs(), [("Y", 3), ("X", 1)]);
    assert_eq!(report.per_file[0].counts.as_pairs(), [("X", 1), ("Y", 1)]);
    assert_eq!(report.per_file[1].counts.as_pairs(), [("Y", 2)]);
    assert_eq!(
        report.total_rows,
        report.per_file.iter().map(|f| f.counts.total()).sum::<usize>()
    );
}

#[test]
fn test_exclusion_drops_rows_everywhere() {
    let files = vec![
        loaded(table(
            "a.csv",
            &[row("a", "resend requested", "X"), row("b", "", "Y")],
        )),
        loaded(table("b.csv", &[row("c", "", "X")])),
    ];
    let config = PipelineConfig {
        exclusion: "resend".to_owned(),
        ..Default::default()
    };
    let report = run_batch(files, &config).unwrap();

    assert_eq!(report.per_file[0].rows_dropped, 1);
    assert_eq!(report.per_file[0].counts.as_pairs(), [("Y", 1)]);
    assert_eq!(report.merged.as_pairs(), [("Y", 1), ("X", 1)]);
    assert_eq!(report.total_rows, 2);
}

#[test]
fn test_bad_files_are_skipped_not_fatal() {
    let files = vec![
        LoadedFile {
            label: "broken.xlsx".to_owned(),
            path: "broken.xlsx".into(),
            outcome: Err(TallyError::load("broken.xlsx", "not a workbook")),
        },
        loaded(table("empty.csv", &[])),
        loaded(Table::new(
            "other.csv",
            vec!["x".to_owned()],
            vec![vec!["1".to_owned()]],
        )),
        loaded(table("good.csv", &[row("a", "", "X")])),
    ];
    let config = PipelineConfig {
        column: ColumnAddress::Name("univ".to_owned()),
        ..Default::default()
    };
    let report = run_batch(files, &config).unwrap();

    let kinds: Vec<(&str, SkipKind)> = report
        .skipped
        .iter()
        .map(|s| (s.file.as_str(), s.kind))
        .collect();
    assert_eq!(
        kinds,
        [
            ("broken.xlsx", SkipKind::Unreadable),
            ("empty.csv", SkipKind::Empty),
            ("other.csv", SkipKind::ColumnMissing),
        ]
    );
    assert_eq!(report.merged.as_pairs(), [("X", 1)]);
}

#[test]
fn test_column_resolved_once_by_name_across_reordered_tables() {
    let first = table("a.csv", &[row("a", "", "X")]);
    let reordered = Table::new(
        "b.csv",
        ["univ", "no"].map(str::to_owned).to_vec(),
        vec![["X", "2"].map(str::to_owned).to_vec()],
    );
    let report = run_batch(vec![loaded(first), loaded(reordered)], &PipelineConfig::default())
        .unwrap();

    assert_eq!(report.column.name, "univ");
    assert_eq!(report.merged.as_pairs(), [("X", 2)]);
}

#[test]
fn test_letter_fallback_is_reported() {
    let narrow = Table::new(
        "n.csv",
        ["first", "second"].map(str::to_owned).to_vec(),
        vec![["a", "b"].map(str::to_owned).to_vec()],
    );
    let report = run_batch(vec![loaded(narrow)], &PipelineConfig::default()).unwrap();
    assert!(report.column.fallback_used);
    assert_eq!(report.column.name, "first");
    assert_eq!(report.merged.as_pairs(), [("a", 1)]);
}

#[test]
fn test_no_usable_files_is_empty_dataset() {
    let files = vec![
        LoadedFile {
            label: "broken.xlsx".to_owned(),
            path: "broken.xlsx".into(),
            outcome: Err(TallyError::load("broken.xlsx", "not a workbook")),
        },
        loaded(table("empty.csv", &[])),
    ];
    let err = run_batch(files, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, TallyError::EmptyDataset));

    let err = run_batch(Vec::new(), &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, TallyError::EmptyDataset));
}

#[test]
fn test_everything_excluded_is_empty_dataset() {
    let files = vec![loaded(table("a.csv", &[row("a", "resend", "X")]))];
    let config = PipelineConfig {
        exclusion: "resend".to_owned(),
        ..Default::default()
    };
    let err = run_batch(files, &config).unwrap_err();
    assert!(matches!(err, TallyError::EmptyDataset));
}

#[test]
fn test_usable_tables_keeps_order_and_reports_skips() {
    let files = vec![
        loaded(table("empty.csv", &[])),
        loaded(table("a.csv", &[row("a", "", "X")])),
        LoadedFile {
            label: "broken.xlsx".to_owned(),
            path: "broken.xlsx".into(),
            outcome: Err(TallyError::load("broken.xlsx", "not a workbook")),
        },
        loaded(table("b.csv", &[row("b", "", "Y")])),
    ];
    let (usable, skipped) = crate::analyser::flows::usable_tables(files);

    let labels: Vec<&str> = usable.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, ["a.csv", "b.csv"]);
    let kinds: Vec<(&str, SkipKind)> = skipped.iter().map(|s| (s.file.as_str(), s.kind)).collect();
    assert_eq!(
        kinds,
        [("empty.csv", SkipKind::Empty), ("broken.xlsx", SkipKind::Unreadable)]
    );
    assert!(skipped[1].reason.contains("not a workbook"));
}
