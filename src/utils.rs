use crate::analyser::types::FrequencyEntry;
use crate::config::Labels;

/// Plain-text table of `(category, count)` rows with a header line.
pub fn render_entries(entries: &[&FrequencyEntry], labels: &Labels) -> String {
    let width = entries
        .iter()
        .map(|e| e.category.chars().count())
        .chain(std::iter::once(labels.category.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}  {}\n", pad(&labels.category, width), labels.count);
    for entry in entries {
        out.push_str(&format!("{}  {}\n", pad(&entry.category, width), entry.count));
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
