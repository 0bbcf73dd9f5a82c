//! Movie record domain model

use serde::{Deserialize, Serialize};

use crate::indices::HiddenIndices;
use crate::text::{MISSING_TEXT, normalize_text};

/// One movie as stored in the catalog.
///
/// Field names match the catalog columns. Columns this crate does not know
/// about (e.g. `Genre`) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year", default = "missing")]
    pub year: String,

    #[serde(rename = "Rating", default = "missing")]
    pub rating: String,

    #[serde(rename = "Plot", default = "missing")]
    pub plot: String,

    #[serde(rename = "HiddenIndices", default)]
    pub hidden_indices: HiddenIndices,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn missing() -> String {
    MISSING_TEXT.to_string()
}

impl MovieRecord {
    /// Build a record from scraped title and plot text.
    pub fn new(title: impl Into<String>, plot: Option<&str>) -> Self {
        Self {
            title: title.into(),
            year: missing(),
            rating: missing(),
            plot: normalize_text(plot),
            hidden_indices: HiddenIndices::default(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_year(mut self, year: Option<&str>) -> Self {
        self.year = normalize_text(year);
        self
    }

    pub fn with_rating(mut self, rating: Option<&str>) -> Self {
        self.rating = normalize_text(rating);
        self
    }

    pub fn with_hidden_indices(mut self, indices: HiddenIndices) -> Self {
        self.hidden_indices = indices;
        self
    }

    /// Release year, 0 when unknown.
    pub fn year(&self) -> i32 {
        self.year.trim().parse().unwrap_or(0)
    }

    /// Rating, 0.0 when unknown.
    pub fn rating(&self) -> f64 {
        self.rating.trim().parse().unwrap_or(0.0)
    }

    pub fn has_plot(&self) -> bool {
        !self.plot.is_empty() && self.plot != MISSING_TEXT
    }
}
