//! Redaction selector - picks which plot words to hide
//!
//! The plot is split on single spaces so that indices line up with the
//! display string the puzzle view rebuilds. Each token then runs through an
//! ordered decision list; the first rule that fires wins:
//!
//! 1. title match (token is a word of the title)
//! 2. proper noun (capitalized and not at the start of a sentence)
//! 3. long word (hidden with `hide_probability`, one draw per eligible token)
//!
//! Randomness only comes from the caller's `rng`, so a seeded generator
//! reproduces the same selection.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::stopwords::Stopwords;
use crate::text::{MISSING_TEXT, clean_term, title_words};

/// Tunable thresholds for the selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Tokens whose clean form is shorter than this are never hidden
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,

    /// Clean length at which a token becomes a long-word candidate
    #[serde(default = "default_long_word_len")]
    pub long_word_len: usize,

    /// Chance that a long-word candidate is hidden
    #[serde(default = "default_hide_probability")]
    pub hide_probability: f64,

    /// Plot value meaning "no plot available"
    #[serde(default = "default_missing_plot")]
    pub missing_plot: String,
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            min_term_len: default_min_term_len(),
            long_word_len: default_long_word_len(),
            hide_probability: default_hide_probability(),
            missing_plot: default_missing_plot(),
        }
    }
}

fn default_min_term_len() -> usize {
    2
}

fn default_long_word_len() -> usize {
    7
}

fn default_hide_probability() -> f64 {
    0.6
}

fn default_missing_plot() -> String {
    MISSING_TEXT.to_string()
}

/// Outcome for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Hidden: the word appears in the title
    TitleMatch,
    /// Hidden: capitalized outside sentence start
    ProperNoun,
    /// Hidden: long word that won the roll
    LongWord,
    /// Kept: clean form too short
    TooShort,
    /// Kept: function word
    Stopword,
    /// Kept: long word that lost the roll
    LongWordKept,
    /// Kept: no rule applied
    NoRule,
}

impl Decision {
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            Decision::TitleMatch | Decision::ProperNoun | Decision::LongWord
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::TitleMatch => "title_match",
            Decision::ProperNoun => "proper_noun",
            Decision::LongWord => "long_word",
            Decision::TooShort => "too_short",
            Decision::Stopword => "stopword",
            Decision::LongWordKept => "long_word_kept",
            Decision::NoRule => "no_rule",
        }
    }
}

/// Per-token explanation produced by [`RedactionSelector::explain`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDecision {
    pub index: usize,
    pub token: String,
    pub decision: Decision,
}

/// Chooses hidden word positions for a plot
#[derive(Debug, Clone, Default)]
pub struct RedactionSelector {
    stopwords: Stopwords,
    policy: RedactionPolicy,
}

impl RedactionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedactionPolicy) -> Self {
        Self {
            stopwords: Stopwords::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    /// Ascending indices of the tokens to hide.
    ///
    /// An empty plot or the missing-plot marker yields no indices.
    pub fn select<R: Rng + ?Sized>(&self, plot: &str, title: &str, rng: &mut R) -> Vec<usize> {
        let hidden: Vec<usize> = self
            .explain(plot, title, rng)
            .into_iter()
            .filter(|d| d.decision.is_hidden())
            .map(|d| d.index)
            .collect();

        tracing::debug!(title, hidden = hidden.len(), "Selected redactions");
        hidden
    }

    /// Same as [`select`](Self::select), treating an absent plot as empty.
    pub fn select_optional<R: Rng + ?Sized>(
        &self,
        plot: Option<&str>,
        title: &str,
        rng: &mut R,
    ) -> Vec<usize> {
        match plot {
            Some(plot) => self.select(plot, title, rng),
            None => Vec::new(),
        }
    }

    /// Decision for every token of the plot, in token order.
    pub fn explain<R: Rng + ?Sized>(
        &self,
        plot: &str,
        title: &str,
        rng: &mut R,
    ) -> Vec<TokenDecision> {
        if plot.is_empty() || plot == self.policy.missing_plot {
            return Vec::new();
        }

        let words: Vec<&str> = plot.split(' ').collect();
        let title_words = title_words(title);

        words
            .iter()
            .enumerate()
            .map(|(index, word)| TokenDecision {
                index,
                token: (*word).to_string(),
                decision: self.decide(index, &words, &title_words, &mut *rng),
            })
            .collect()
    }

    fn decide<R: Rng + ?Sized>(
        &self,
        index: usize,
        words: &[&str],
        title_words: &HashSet<String>,
        rng: &mut R,
    ) -> Decision {
        let word = words[index];
        let clean = clean_term(word);
        let clean_len = clean.chars().count();

        if clean_len < self.policy.min_term_len {
            return Decision::TooShort;
        }
        // Every hiding rule excludes stopwords, so no draw is made for them.
        if self.stopwords.contains(&clean) {
            return Decision::Stopword;
        }

        if title_words.contains(&clean) {
            tracing::trace!(index, word, "title match");
            return Decision::TitleMatch;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let sentence_start = index == 0 || words[index - 1].ends_with('.');
        if capitalized && !sentence_start {
            tracing::trace!(index, word, "proper noun");
            return Decision::ProperNoun;
        }

        if clean_len >= self.policy.long_word_len {
            return if rng.r#gen::<f64>() < self.policy.hide_probability {
                tracing::trace!(index, word, "long word");
                Decision::LongWord
            } else {
                Decision::LongWordKept
            };
        }

        Decision::NoRule
    }
}

/// Select hidden indices with the default policy.
pub fn select_redaction_indices<R: Rng + ?Sized>(
    plot: &str,
    title: &str,
    rng: &mut R,
) -> Vec<usize> {
    RedactionSelector::new().select(plot, title, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    /// Always wins the long-word roll (draws 0.0).
    fn always_hide() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Always loses the long-word roll (draws just under 1.0).
    fn never_hide() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_empty_and_missing_plot() {
        let selector = RedactionSelector::new();
        let mut rng = always_hide();

        assert!(selector.select("", "Heat", &mut rng).is_empty());
        assert!(selector.select("N/A", "Heat", &mut rng).is_empty());
        assert!(selector.select_optional(None, "Heat", &mut rng).is_empty());
    }

    #[test]
    fn test_heat_example() {
        let plot = "Heat is a crime thriller starring Pacino.";
        let hidden = select_redaction_indices(plot, "Heat", &mut never_hide());
        assert_eq!(hidden, vec![0, 6]);

        // "thriller" and "starring" are long words and only depend on the roll.
        let hidden = select_redaction_indices(plot, "Heat", &mut always_hide());
        assert_eq!(hidden, vec![0, 4, 5, 6]);
    }

    #[test]
    fn test_double_space_keeps_alignment() {
        let selector = RedactionSelector::new();
        let decisions = selector.explain("A  dog runs.", "", &mut always_hide());

        assert_eq!(decisions.len(), 4);
        assert_eq!(decisions[1].token, "");
        assert_eq!(decisions[1].decision, Decision::TooShort);
        assert!(decisions.iter().all(|d| !d.decision.is_hidden()));
    }

    #[test]
    fn test_sentence_start_is_not_proper_noun() {
        let plot = "The robbery fails. Police close in on Neil";
        let hidden = select_redaction_indices(plot, "", &mut never_hide());
        // "Police" follows a period; "Neil" does not.
        assert_eq!(hidden, vec![7]);
    }

    #[test]
    fn test_only_period_ends_a_sentence() {
        let hidden = select_redaction_indices("Run! Forest runs", "", &mut never_hide());
        assert_eq!(hidden, vec![1]);
    }

    #[test]
    fn test_stopwords_never_hidden() {
        // Capitalized and in the title, still a stopword.
        let plot = "Someone asks The Who about Them";
        let hidden = select_redaction_indices(plot, "The Who", &mut always_hide());
        assert_eq!(hidden, vec![0]);
    }

    #[test]
    fn test_title_match_ignores_case_and_punctuation() {
        let plot = "a heist goes wrong, heat follows.";
        let hidden = select_redaction_indices(plot, "Heat!", &mut never_hide());
        assert_eq!(hidden, vec![4]);
    }

    #[test]
    fn test_explain_reports_rules() {
        let selector = RedactionSelector::new();
        let decisions = selector.explain(
            "Heat is a crime thriller starring Pacino.",
            "Heat",
            &mut never_hide(),
        );
        let kinds: Vec<Decision> = decisions.iter().map(|d| d.decision).collect();
        assert_eq!(
            kinds,
            vec![
                Decision::TitleMatch,
                Decision::Stopword,
                Decision::TooShort,
                Decision::NoRule,
                Decision::LongWordKept,
                Decision::LongWordKept,
                Decision::ProperNoun,
            ]
        );
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let plot = "An ambitious detective investigates mysterious disappearances throughout \
                    overcrowded neighborhoods";
        let first = select_redaction_indices(plot, "Untitled", &mut StdRng::seed_from_u64(7));
        let second = select_redaction_indices(plot, "Untitled", &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_policy() {
        let policy = RedactionPolicy {
            long_word_len: 4,
            hide_probability: 1.0,
            ..RedactionPolicy::default()
        };
        let selector = RedactionSelector::with_policy(policy);
        let hidden = selector.select("a dog runs fast", "", &mut never_hide());
        assert_eq!(hidden, vec![2, 3]);
    }

    #[test]
    fn test_policy_defaults_when_fields_missing() {
        let policy: RedactionPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, RedactionPolicy::default());
        assert_eq!(policy.hide_probability, 0.6);
    }
}
