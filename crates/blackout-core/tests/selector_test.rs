use blackout_core::{
    HiddenIndices, MovieRecord, Puzzle, RedactionSelector, Stopwords, annotate, clean_term,
    select_redaction_indices,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const PLOTS: &[(&str, &str)] = &[
    (
        "Heat",
        "Heat is a crime thriller starring Pacino.",
    ),
    (
        "The Dark Knight",
        "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, \
         Batman must accept one of the greatest psychological and physical tests of his ability \
         to fight injustice.",
    ),
    (
        "Forrest Gump",
        "The history of the United States from the 1950s to the '70s unfolds from the \
         perspective of an Alabama man with an IQ of 75, who yearns to be reunited with his \
         childhood sweetheart.",
    ),
    (
        "Se7en",
        "Two detectives, a rookie and a veteran, hunt a serial killer who uses the seven deadly \
         sins as his motives.  Mr. Doe waits.",
    ),
];

/// Counts how many random values the selector asks for.
struct CountingRng {
    draws: usize,
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        0
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn test_missing_plot_for_any_title() {
    let mut rng = StdRng::seed_from_u64(0);
    for (title, _) in PLOTS {
        assert!(select_redaction_indices("", title, &mut rng).is_empty());
        assert!(select_redaction_indices("N/A", title, &mut rng).is_empty());
    }
}

#[test]
fn test_short_and_stopword_tokens_never_hidden() {
    let stopwords = Stopwords::new();

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        for (title, plot) in PLOTS {
            let words: Vec<&str> = plot.split(' ').collect();
            let hidden = select_redaction_indices(plot, title, &mut rng);

            for index in hidden {
                let clean = clean_term(words[index]);
                assert!(clean.chars().count() >= 2, "short token {index} hidden");
                assert!(!stopwords.contains(&clean), "stopword {clean} hidden");
            }
        }
    }
}

#[test]
fn test_output_is_ascending() {
    let mut rng = StdRng::seed_from_u64(99);
    for (title, plot) in PLOTS {
        let hidden = select_redaction_indices(plot, title, &mut rng);
        assert!(hidden.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_no_draw_for_title_or_proper_noun() {
    // Every eligible token is caught by the title or proper-noun rule.
    let mut rng = CountingRng { draws: 0 };
    let hidden = select_redaction_indices(
        "Sentimental men meet Sentimental Gatekeepers",
        "Sentimental",
        &mut rng,
    );

    assert_eq!(hidden, vec![0, 3, 4]);
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_one_draw_per_long_word_candidate() {
    let mut rng = CountingRng { draws: 0 };
    select_redaction_indices("grandiose schemes undermine everybody", "", &mut rng);
    // "grandiose", "undermine", "everybody" are long; "schemes" is exactly 7.
    assert_eq!(rng.draws, 4);
}

#[test]
fn test_reproducible_under_seed() {
    for (title, plot) in PLOTS {
        let a = select_redaction_indices(plot, title, &mut StdRng::seed_from_u64(2024));
        let b = select_redaction_indices(plot, title, &mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);
    }
}

#[test]
fn test_selector_is_shareable_across_threads() {
    let selector = std::sync::Arc::new(RedactionSelector::new());

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let selector = selector.clone();
            std::thread::spawn(move || {
                let (title, plot) = PLOTS[1];
                selector.select(plot, title, &mut StdRng::seed_from_u64(seed))
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let (title, plot) = PLOTS[1];
        let expected = selector.select(plot, title, &mut StdRng::seed_from_u64(seed as u64));
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_annotate_then_render() {
    let mut records = vec![MovieRecord::new(PLOTS[0].0, Some(PLOTS[0].1))];
    annotate(
        &mut records,
        &RedactionSelector::new(),
        &mut StdRng::seed_from_u64(5),
        false,
    );

    let stored = records[0].hidden_indices.to_string();
    let parsed = HiddenIndices::parse(&stored).unwrap();
    let puzzle = Puzzle::new(&records[0].plot, &parsed);

    let rendered = puzzle.render("____");
    assert!(rendered.starts_with("____ is a crime"));
    assert!(rendered.ends_with("____"));
    assert_eq!(rendered.split(' ').count(), PLOTS[0].1.split(' ').count());
}
