use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter used when no column is configured (the 7th column).
pub const DEFAULT_COLUMN_LETTER: char = 'G';

/// Where the aggregation column lives: a spreadsheet-style letter or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAddress {
    /// 1-based position, `A` = first column
    Letter(#[serde(deserialize_with = "deserialize_letter")] char),
    /// Exact column name
    Name(String),
}

impl Default for ColumnAddress {
    fn default() -> Self {
        Self::Letter(DEFAULT_COLUMN_LETTER)
    }
}

impl fmt::Display for ColumnAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "column {}", letter.to_ascii_uppercase()),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// A single ASCII letter parses as a letter address, anything else as a name.
impl FromStr for ColumnAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err("column address must not be empty".to_owned()),
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c)),
            _ => Ok(Self::Name(s.to_owned())),
        }
    }
}

/// Letter addresses read from config must be ASCII letters.
fn deserialize_letter<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let letter = char::deserialize(deserializer)?;
    if letter.is_ascii_alphabetic() {
        Ok(letter)
    } else {
        Err(D::Error::custom(format!(
            "column letter must be A-Z, got '{letter}'"
        )))
    }
}

/// `A`/`a` -> 1 ... `Z`/`z` -> 26.
pub fn letter_position(letter: char) -> Option<usize> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let upper = letter.to_ascii_uppercase();
    Some(usize::from(upper as u8 - b'A') + 1)
}

/// The aggregation column chosen for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub name: String,
    /// The letter pointed past the last column and the first column was used instead.
    pub fallback_used: bool,
}

/// Resolve an address against the column order of the table that establishes
/// the batch.
///
/// Letters beyond the column count fall back to the first column. Names are
/// taken verbatim; tables lacking them are skipped later. Returns `None` only
/// for a letter address against a table without columns.
pub fn resolve_column(columns: &[String], address: &ColumnAddress) -> Option<ResolvedColumn> {
    match address {
        ColumnAddress::Name(name) => Some(ResolvedColumn {
            name: name.clone(),
            fallback_used: false,
        }),
        ColumnAddress::Letter(letter) => {
            let by_position = letter_position(*letter)
                .and_then(|pos| pos.checked_sub(1))
                .and_then(|idx| columns.get(idx));

            if let Some(name) = by_position {
                return Some(ResolvedColumn {
                    name: name.clone(),
                    fallback_used: false,
                });
            }

            let first = columns.first()?;
            tracing::warn!(
                "Column letter '{}' is outside the {} available columns; using first column '{}'",
                letter,
                columns.len(),
                first
            );
            Some(ResolvedColumn {
                name: first.clone(),
                fallback_used: true,
            })
        }
    }
}
