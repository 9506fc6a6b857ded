//! Batch configuration.
//!
//! Everything that used to be an interactive widget value (column choice,
//! exclusion keyword, top-N, sort toggle) lives in [`PipelineConfig`], which is
//! passed explicitly into the batch runner. Configs are stored as JSON and
//! every field has a default so partial files load.

use crate::analyser::cleaning::{MISSING_SENTINELS, PLACEHOLDER};
use crate::analyser::columns::ColumnAddress;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of entries shown in the display view.
pub const DEFAULT_TOP_N: usize = 20;

/// Root configuration for one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Aggregation column, as a letter address or an explicit column name
    #[serde(default)]
    pub column: ColumnAddress,

    /// Rows with any cell containing this text are dropped (empty = keep all)
    #[serde(default)]
    pub exclusion: String,

    /// Entries kept in the display view (0 = all)
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Order the display view by count instead of first appearance
    #[serde(default = "default_true")]
    pub sort_descending: bool,

    /// Value substituted for blank and missing cells
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Cell spellings treated as missing, compared case-sensitively after trimming
    #[serde(default = "default_sentinels")]
    pub missing_sentinels: Vec<String>,

    #[serde(default)]
    pub labels: Labels,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            column: ColumnAddress::default(),
            exclusion: String::new(),
            top_n: default_top_n(),
            sort_descending: default_true(),
            placeholder: default_placeholder(),
            missing_sentinels: default_sentinels(),
            labels: Labels::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Save config to a JSON file, creating parent directories as needed
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Load the config from `path`, falling back to the default location and
    /// then to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Human-facing strings used for titles and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Appended to every synthesized title
    pub title_suffix: String,
    /// Title used when no sampled field has a value
    pub fallback_title: String,
    /// Prefix marking a title built from several files
    pub multi_file_marker: String,
    /// Appended to the first value when a title field differs across files
    pub and_others: String,
    /// Header of the category column in exports
    pub category: String,
    /// Header of the count column in exports
    pub count: String,
    /// Default export file name
    pub export_file_name: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title_suffix: "수시 지원 대학 시각화".to_owned(),
            fallback_title: "대학별 지원 빈도 시각화".to_owned(),
            multi_file_marker: "전체(다중 파일)".to_owned(),
            and_others: "외".to_owned(),
            category: "대학".to_owned(),
            count: "지원수".to_owned(),
            export_file_name: "대학별_지원빈도_전체합산.csv".to_owned(),
        }
    }
}

/// `<config dir>/tallysheet/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tallysheet").join("config.json"))
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_owned()
}

fn default_sentinels() -> Vec<String> {
    MISSING_SENTINELS.iter().map(|s| (*s).to_owned()).collect()
}
