mod cli;
mod commands;

use anyhow::Result;
use blackout_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing (stderr, so command output stays pipeable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Select {
            title,
            seed,
            explain,
            json,
            plot,
        } => commands::select::handle(&config, title, seed, explain, json, plot),
        cli::Commands::Annotate {
            catalog,
            seed,
            overwrite,
            dry_run,
        } => commands::catalog::annotate(&config, catalog, seed, overwrite, dry_run),
        cli::Commands::Save {
            title,
            indices,
            catalog,
        } => commands::catalog::save(&config, catalog, title, indices),
        cli::Commands::Preview { title, catalog } => {
            commands::puzzle::preview(&config, catalog, title)
        }
        cli::Commands::Hint {
            title,
            seed,
            catalog,
        } => commands::puzzle::hint(&config, catalog, title, seed),
        cli::Commands::Guess {
            title,
            guess,
            catalog,
        } => commands::puzzle::guess(&config, catalog, title, guess),
        cli::Commands::Config { path } => commands::config::handle(&config, cli.config, path),
    }
}
