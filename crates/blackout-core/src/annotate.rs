//! Batch computation of hidden indices for movie records

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::indices::HiddenIndices;
use crate::movie::MovieRecord;
use crate::selector::RedactionSelector;

/// Counts from one annotation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateReport {
    /// Records that received freshly computed indices
    pub annotated: usize,
    /// Records left alone because they already had indices
    pub skipped: usize,
    /// Annotated records that ended up with no hidden words
    pub empty: usize,
}

/// Compute `HiddenIndices` for every record.
///
/// Records that already carry indices keep them unless `overwrite` is set,
/// so hand-edited selections survive a re-run. A record without a usable
/// plot gets an empty list and a warning; the batch always continues.
pub fn annotate<R: Rng + ?Sized>(
    records: &mut [MovieRecord],
    selector: &RedactionSelector,
    rng: &mut R,
    overwrite: bool,
) -> AnnotateReport {
    let mut report = AnnotateReport::default();

    for record in records.iter_mut() {
        if !overwrite && !record.hidden_indices.is_empty() {
            report.skipped += 1;
            continue;
        }

        if !record.has_plot() {
            tracing::warn!(title = %record.title, "Record has no plot, nothing to hide");
        }

        let indices = selector.select(&record.plot, &record.title, &mut *rng);
        if indices.is_empty() {
            report.empty += 1;
        }
        record.hidden_indices = HiddenIndices::new(indices);
        report.annotated += 1;
    }

    tracing::info!(
        annotated = report.annotated,
        skipped = report.skipped,
        empty = report.empty,
        "Annotation finished"
    );
    report
}
