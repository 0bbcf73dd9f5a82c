use anyhow::Result;
use blackout_config::Config;
use blackout_core::{GuessOutcome, MovieRecord, Puzzle, check_guess};
use blackout_storage::Catalog;

use super::{make_rng, open_catalog};
use crate::cli::CatalogArgs;

fn find_movie<'a>(catalog: &'a Catalog, title: &str) -> Result<&'a MovieRecord> {
    catalog
        .find(title)
        .ok_or_else(|| anyhow::anyhow!("Movie '{}' not found in {}", title, catalog.path().display()))
}

pub fn preview(config: &Config, args: CatalogArgs, title: String) -> Result<()> {
    let catalog = open_catalog(&args, config)?;
    let movie = find_movie(&catalog, &title)?;
    let puzzle = Puzzle::new(&movie.plot, &movie.hidden_indices);

    println!("{} ({})", movie.title, movie.year);
    println!("  Hidden words: {}", puzzle.hidden_count());
    println!();
    println!("{}", puzzle.render(&config.placeholder));

    Ok(())
}

pub fn hint(config: &Config, args: CatalogArgs, title: String, seed: Option<u64>) -> Result<()> {
    let catalog = open_catalog(&args, config)?;
    let movie = find_movie(&catalog, &title)?;
    let mut puzzle = Puzzle::new(&movie.plot, &movie.hidden_indices);
    let mut rng = make_rng(seed, config);

    match puzzle.reveal_hint(&mut rng) {
        Some(index) => {
            println!("Revealed word {}: {}", index, puzzle.words()[index].original);
            println!();
            println!("{}", puzzle.render(&config.placeholder));
        }
        None => println!("No more words to reveal!"),
    }

    Ok(())
}

pub fn guess(config: &Config, args: CatalogArgs, title: String, guess: String) -> Result<()> {
    let catalog = open_catalog(&args, config)?;
    let movie = find_movie(&catalog, &title)?;

    match check_guess(&guess, &movie.title) {
        GuessOutcome::Correct => {
            let mut puzzle = Puzzle::new(&movie.plot, &movie.hidden_indices);
            puzzle.reveal_all();
            println!("✓ Correct! It was {}", movie.title);
            println!();
            println!("{}", puzzle.render(&config.placeholder));
        }
        GuessOutcome::Close => println!("So close! Check your spelling."),
        GuessOutcome::Wrong => println!("✗ Wrong guess."),
    }

    Ok(())
}
