use super::*;
use crate::config::Labels;

fn titled(year: &str, grade: &str, class: &str, name: &str) -> Table {
    sheet("t.xlsx", &[["1", name, year, grade, class, "", "Seoul U"]])
}

#[test]
fn test_single_table_joins_c_d_b() {
    let labels = Labels::default();
    let table = Table::new(
        "t.xlsx",
        ["A", "B", "C", "D"].map(str::to_owned).to_vec(),
        vec![["x", "6", "2025", "3"].map(str::to_owned).to_vec()],
    );
    let title = synthesize_title(&[table], &ValueNormalizer::default(), &labels);
    assert_eq!(title, format!("2025 3 6 {}", labels.title_suffix));
}

#[test]
fn test_single_table_skips_blank_fields() {
    let labels = Labels::default();
    let table = titled("2025", "", "6", "nan");
    let title = synthesize_title(&[table], &ValueNormalizer::default(), &labels);
    assert_eq!(title, format!("2025 {}", labels.title_suffix));
}

#[test]
fn test_single_table_all_blank_uses_fallback() {
    let labels = Labels::default();
    let table = titled("", " ", "None", "");
    let title = synthesize_title(&[table], &ValueNormalizer::default(), &labels);
    assert_eq!(title, labels.fallback_title);
}

#[test]
fn test_narrow_table_has_absent_fields() {
    let table = Table::new(
        "t.csv",
        vec!["only".to_owned()],
        vec![vec!["v".to_owned()]],
    );
    let fields = crate::analyser::title::sample_fields(&table, &ValueNormalizer::default());
    assert_eq!(fields, [None, None, None]);
}

#[test]
fn test_multi_table_summarizes_distinct_values() {
    let labels = Labels::default();
    let tables = [
        titled("2025", "3", "6", "kim"),
        titled("2025", "3", "7", "lee"),
        titled("2025", "3", "8", "park"),
    ];
    let title = synthesize_title(&tables, &ValueNormalizer::default(), &labels);
    assert_eq!(
        title,
        format!(
            "{} 2025 3 kim {} {}",
            labels.multi_file_marker, labels.and_others, labels.title_suffix
        )
    );
}

#[test]
fn test_multi_table_without_fields_keeps_marker() {
    let labels = Labels::default();
    let tables = [titled("", "", "", ""), titled("", "", "", "")];
    let title = synthesize_title(&tables, &ValueNormalizer::default(), &labels);
    assert_eq!(
        title,
        format!("{} {}", labels.multi_file_marker, labels.title_suffix)
    );
}

#[test]
fn test_field_summary_fold() {
    let mut seen = Vec::new();
    let summary = FieldSummary::Absent
        .observe(Some("a"), &mut seen)
        .observe(None, &mut seen)
        .observe(Some("a"), &mut seen);
    assert_eq!(summary, FieldSummary::Single("a".to_owned()));

    let summary = summary.observe(Some("b"), &mut seen).observe(Some("c"), &mut seen);
    assert_eq!(
        summary,
        FieldSummary::Multiple {
            first: "a".to_owned(),
            distinct: 3
        }
    );
    assert_eq!(
        summary.render(&Labels::default()).as_deref(),
        Some("a 외")
    );
}
