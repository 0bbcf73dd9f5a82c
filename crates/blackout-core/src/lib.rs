//! Core domain models and logic for blackout
//!
//! This crate contains:
//! - Redaction selector (which plot words to hide)
//! - Text helpers and the stopword vocabulary
//! - Domain models (MovieRecord, HiddenIndices, Puzzle)
//! - Batch annotation of movie records

pub mod annotate;
pub mod error;
pub mod indices;
pub mod movie;
pub mod puzzle;
pub mod selector;
pub mod stopwords;
pub mod text;

pub use annotate::{AnnotateReport, annotate};
pub use error::{Error, Result};
pub use indices::HiddenIndices;
pub use movie::MovieRecord;
pub use puzzle::{DEFAULT_PLACEHOLDER, GuessOutcome, Puzzle, WordState, check_guess};
pub use selector::{
    Decision, RedactionPolicy, RedactionSelector, TokenDecision, select_redaction_indices,
};
pub use stopwords::Stopwords;
pub use text::{MISSING_TEXT, clean_term, normalize_text, title_words};
