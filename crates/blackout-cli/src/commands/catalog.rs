use anyhow::Result;
use blackout_config::Config;
use blackout_core::{HiddenIndices, RedactionSelector};

use super::{make_rng, open_catalog};
use crate::cli::CatalogArgs;

pub fn annotate(
    config: &Config,
    args: CatalogArgs,
    seed: Option<u64>,
    overwrite: bool,
    dry_run: bool,
) -> Result<()> {
    let mut catalog = open_catalog(&args, config)?;
    let selector = RedactionSelector::with_policy(config.redaction.clone());
    let mut rng = make_rng(seed, config);

    println!(
        "Annotating {} movies in {}...",
        catalog.len(),
        catalog.path().display()
    );

    let report = blackout_core::annotate(catalog.records_mut(), &selector, &mut rng, overwrite);

    println!("  Annotated: {}", report.annotated);
    println!("  Skipped (already set): {}", report.skipped);
    println!("  Without hidden words: {}", report.empty);

    if dry_run {
        println!("Dry run, catalog not written.");
        return Ok(());
    }

    catalog.save()?;
    println!("✓ Saved {}", catalog.path().display());

    Ok(())
}

pub fn save(config: &Config, args: CatalogArgs, title: String, indices: String) -> Result<()> {
    let indices = HiddenIndices::parse(&indices)?;
    let mut catalog = open_catalog(&args, config)?;

    catalog.set_hidden_indices(&title, indices.clone())?;
    catalog.save()?;

    println!("✓ Saved hidden indices for '{}'", title);
    println!("  HiddenIndices: {}", indices);

    Ok(())
}
