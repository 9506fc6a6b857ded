use crate::config::PipelineConfig;

/// Canonical value for blank and missing cells.
pub const PLACEHOLDER: &str = "미기재";

/// Spellings of "no value" that spreadsheet exports and stringified nulls produce.
pub const MISSING_SENTINELS: [&str; 4] = ["", "NaN", "nan", "None"];

/// Maps blank, whitespace-only and sentinel values to a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueNormalizer {
    placeholder: String,
    sentinels: Vec<String>,
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        Self::new(PLACEHOLDER, MISSING_SENTINELS)
    }
}

impl ValueNormalizer {
    pub fn new<I, S>(placeholder: impl Into<String>, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            placeholder: placeholder.into(),
            sentinels: sentinels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.placeholder.clone(),
            config.missing_sentinels.iter().cloned(),
        )
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// True for blank values and exact (case-sensitive) sentinel matches.
    pub fn is_missing(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || self.sentinels.iter().any(|s| s == trimmed)
    }

    /// True when the value is missing or already the placeholder.
    pub fn is_absent(&self, value: &str) -> bool {
        self.is_missing(value) || value.trim() == self.placeholder
    }

    pub fn normalize(&self, value: &str) -> String {
        if self.is_missing(value) {
            self.placeholder.clone()
        } else {
            value.trim().to_owned()
        }
    }

    pub fn normalize_all<'a, I>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values.into_iter().map(|v| self.normalize(v)).collect()
    }
}
