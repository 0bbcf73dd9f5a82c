//! Movie catalog stored as a JSON array of records

use std::path::{Path, PathBuf};

use blackout_core::{Error as CoreError, HiddenIndices, MovieRecord};
use serde_json::Value;

use crate::{Result, StorageError};

/// All movie records of one catalog file
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    records: Vec<MovieRecord>,
    /// Entries that failed to load, with their position in the file.
    /// They are written back untouched on save.
    rejected: Vec<(usize, Value)>,
}

impl Catalog {
    /// Load the catalog at `path`.
    ///
    /// Each entry is decoded on its own. An entry that does not decode is
    /// logged and set aside instead of failing the whole catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(StorageError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        let entries: Vec<Value> = serde_json::from_str(&content)?;

        let mut records = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<MovieRecord>(entry.clone()) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        position,
                        title = entry.get("Title").and_then(serde_json::Value::as_str).unwrap_or("?"),
                        error = %e,
                        "Skipping unreadable catalog entry"
                    );
                    rejected.push((position, entry));
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            rejected = rejected.len(),
            "Loaded catalog"
        );

        Ok(Self {
            path,
            records,
            rejected,
        })
    }

    /// Wrap records that have not been written yet.
    pub fn with_records(path: impl Into<PathBuf>, records: Vec<MovieRecord>) -> Self {
        Self {
            path: path.into(),
            records,
            rejected: Vec::new(),
        }
    }

    /// Write the catalog back to its file.
    ///
    /// The new content goes to a sibling temp file first and is renamed over
    /// the catalog, so a failed write never truncates it.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut entries = self
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for (position, entry) in &self.rejected {
            entries.insert((*position).min(entries.len()), entry.clone());
        }

        let content = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), records = self.records.len(), "Saved catalog");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [MovieRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of entries that could not be loaded.
    pub fn rejected(&self) -> usize {
        self.rejected.len()
    }

    /// First record whose title matches exactly.
    pub fn find(&self, title: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Replace the hidden indices of the first record titled `title`.
    ///
    /// Indices are stored as given; nothing is recomputed.
    pub fn set_hidden_indices(&mut self, title: &str, indices: HiddenIndices) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.title == title)
            .ok_or_else(|| CoreError::MovieNotFound(title.to_string()))?;

        record.hidden_indices = indices;
        Ok(())
    }
}
