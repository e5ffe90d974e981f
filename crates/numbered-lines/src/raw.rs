//! Loosely typed input for building [`NumberedLines`] from deserialized data.
//!
//! Data from JSON, TOML or other serde formats does not say up front whether
//! `lines` holds one string or many. `RawText` keeps whatever arrived and
//! [`NumberedLines`] decides when converting: a string is split, a sequence is
//! split item by item with non-string items skipped, anything else is
//! [`Error::NotText`].
//!
//! Serializing writes [`StoredLines`] instead, whose `numbered` pairs are
//! finished lines and read back without splitting.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::numbered::NumberedLines;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Items(Vec<RawItem>),
    Other(IgnoredAny),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawItem {
    Text(String),
    Other(IgnoredAny),
}

/// Serialized form of [`NumberedLines`]: `lines` plus an optional `index`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLines {
    pub lines: RawText,
    #[serde(default)]
    pub index: Option<Vec<usize>>,
}

/// Written form of [`NumberedLines`]: `(line number, line)` pairs in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLines {
    pub numbered: Vec<(usize, String)>,
}

/// Anything [`NumberedLines`] deserializes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Stored(StoredLines),
    Loose(RawLines),
}

impl RawText {
    /// The strings to split, in order.
    pub fn into_pages(self) -> Result<Vec<String>> {
        match self {
            RawText::Text(text) => Ok(vec![text]),
            RawText::Items(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    RawItem::Text(text) => Some(text),
                    RawItem::Other(_) => None,
                })
                .collect()),
            RawText::Other(_) => Err(Error::NotText),
        }
    }
}

impl TryFrom<RawLines> for NumberedLines {
    type Error = Error;

    fn try_from(raw: RawLines) -> Result<Self> {
        let pages = raw.lines.into_pages()?;
        match raw.index {
            Some(index) => NumberedLines::with_index(pages, index),
            None => Ok(NumberedLines::from_pages(pages)),
        }
    }
}

impl From<StoredLines> for NumberedLines {
    fn from(stored: StoredLines) -> Self {
        let (index, lines): (Vec<usize>, Vec<String>) = stored.numbered.into_iter().unzip();
        NumberedLines::from_parts_unchecked(lines, index)
    }
}

impl From<NumberedLines> for StoredLines {
    fn from(lines: NumberedLines) -> Self {
        let (lines, index) = lines.into_parts();
        StoredLines {
            numbered: index.into_iter().zip(lines).collect(),
        }
    }
}

impl TryFrom<RawInput> for NumberedLines {
    type Error = Error;

    fn try_from(raw: RawInput) -> Result<Self> {
        match raw {
            RawInput::Stored(stored) => Ok(stored.into()),
            RawInput::Loose(loose) => loose.try_into(),
        }
    }
}
