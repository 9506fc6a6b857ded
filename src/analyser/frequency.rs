use super::types::{FrequencyEntry, FrequencyTable};
use crate::error::{Result, TallyError};
use std::collections::HashMap;

/// Streaming counter that remembers where each category first appeared.
///
/// Feeding several sequences into one counter is the merged count over their
/// concatenation, so ties among equal counts resolve by position in the full
/// stream rather than by per-file order.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        if let Some(&idx) = self.index.get(value)
            && let Some(entry) = self.entries.get_mut(idx)
        {
            entry.count += 1;
            return;
        }

        let idx = self.entries.len();
        self.index.insert(value.to_owned(), idx);
        self.entries.push(FrequencyEntry {
            category: value.to_owned(),
            count: 1,
            first_seen: idx,
        });
    }

    pub fn extend<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Values counted so far.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn finish(self) -> FrequencyTable {
        let mut entries = self.entries;
        // Stable: equal counts stay in first-appearance order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        FrequencyTable::from_sorted(entries)
    }
}

/// Frequency table of one value sequence.
pub fn count_values<S: AsRef<str>>(values: &[S]) -> FrequencyTable {
    let mut counter = FrequencyCounter::new();
    counter.extend(values.iter().map(AsRef::as_ref));
    counter.finish()
}

/// Frequency table over the concatenation of `sequences` in arrival order.
pub fn merge_counts<S: AsRef<str>>(sequences: &[Vec<S>]) -> FrequencyTable {
    let mut counter = FrequencyCounter::new();
    for sequence in sequences {
        counter.extend(sequence.iter().map(AsRef::as_ref));
    }
    counter.finish()
}

/// Merged count for a batch; fails when no sequence contributes a value.
pub fn aggregate<S: AsRef<str>>(sequences: &[Vec<S>]) -> Result<FrequencyTable> {
    if sequences.iter().all(Vec::is_empty) {
        return Err(TallyError::EmptyDataset);
    }
    Ok(merge_counts(sequences))
}
