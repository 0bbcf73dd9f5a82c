//! Pipe-joined hidden index list (`"2|5|8"`) as stored in movie records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

const SEPARATOR: char = '|';

/// Word positions to hide, kept in the order they were produced.
///
/// A value parsed from text remembers that text and writes it back
/// unchanged, so untouched records keep their exact stored form.
#[derive(Debug, Clone, Default)]
pub struct HiddenIndices {
    indices: Vec<usize>,
    stored: Option<String>,
}

impl HiddenIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            stored: None,
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Parse the stored form. Segments are trimmed; blank ones are skipped.
    pub fn parse(raw: &str) -> Result<Self> {
        let indices = raw
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| Error::InvalidIndex(part.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            indices,
            stored: Some(raw.to_string()),
        })
    }
}

impl PartialEq for HiddenIndices {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
    }
}

impl Eq for HiddenIndices {}

impl From<Vec<usize>> for HiddenIndices {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl fmt::Display for HiddenIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stored) = &self.stored {
            return f.write_str(stored);
        }
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for HiddenIndices {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for HiddenIndices {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HiddenIndices {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
