//! Puzzle view: a plot with its hidden words blacked out

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::indices::HiddenIndices;
use crate::text::word_chars;

/// Text shown in place of a hidden word
pub const DEFAULT_PLACEHOLDER: &str = "REDACTED";

/// Guesses this close to the title count as a near miss
const CLOSE_DISTANCE: usize = 2;

/// Titles at or below this length never produce a near miss
const CLOSE_MIN_TITLE_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordState {
    pub original: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct,
    /// Within a couple of edits of the title
    Close,
    Wrong,
}

/// Plot words with their hidden flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    words: Vec<WordState>,
}

impl Puzzle {
    /// Split the plot on single spaces and mark the hidden positions.
    ///
    /// Indices past the end of the plot are ignored.
    pub fn new(plot: &str, hidden: &HiddenIndices) -> Self {
        let words = plot
            .split(' ')
            .enumerate()
            .map(|(index, word)| WordState {
                original: word.to_string(),
                hidden: hidden.contains(index),
            })
            .collect();

        Self { words }
    }

    pub fn words(&self) -> &[WordState] {
        &self.words
    }

    pub fn hidden_count(&self) -> usize {
        self.words.iter().filter(|w| w.hidden).count()
    }

    /// Rebuild the plot with hidden words replaced by `placeholder`.
    pub fn render(&self, placeholder: &str) -> String {
        self.words
            .iter()
            .map(|w| {
                if w.hidden {
                    placeholder
                } else {
                    w.original.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reveal one hidden word chosen uniformly. Returns its index.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let index = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.hidden)
            .map(|(i, _)| i)
            .choose(rng)?;

        self.words[index].hidden = false;
        Some(index)
    }

    pub fn reveal_all(&mut self) {
        for word in &mut self.words {
            word.hidden = false;
        }
    }
}

/// Compare a guess to the title ignoring case and punctuation.
pub fn check_guess(guess: &str, title: &str) -> GuessOutcome {
    let guess = word_chars(guess.trim());
    let title = word_chars(title);

    if guess.is_empty() {
        return GuessOutcome::Wrong;
    }
    if guess == title {
        return GuessOutcome::Correct;
    }
    if title.chars().count() > CLOSE_MIN_TITLE_LEN
        && strsim::levenshtein(&guess, &title) <= CLOSE_DISTANCE
    {
        return GuessOutcome::Close;
    }
    GuessOutcome::Wrong
}
