use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blackout")]
#[command(about = "Redact movie plots into guess-the-movie puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "BLACKOUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog file (default from config: movies.json)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick hidden word indices for a single plot
    Select {
        /// Movie title
        #[arg(long)]
        title: String,

        /// Seed for the long-word roll
        #[arg(long)]
        seed: Option<u64>,

        /// Show the rule applied to every word
        #[arg(long)]
        explain: bool,

        /// Print JSON instead of the pipe-joined form
        #[arg(long)]
        json: bool,

        /// Plot text (read from stdin when omitted)
        plot: Option<String>,
    },

    /// Compute hidden indices for every record in the catalog
    Annotate {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Seed for the long-word roll
        #[arg(long)]
        seed: Option<u64>,

        /// Recompute records that already have indices
        #[arg(long)]
        overwrite: bool,

        /// Report what would change without writing the catalog
        #[arg(long)]
        dry_run: bool,
    },

    /// Store hand-picked hidden indices for a movie
    Save {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// Pipe-joined indices, e.g. "2|5|8"
        #[arg(long)]
        indices: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Show a movie's plot with hidden words blacked out
    Preview {
        /// Exact movie title
        #[arg(long)]
        title: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Reveal one hidden word of a movie's plot
    Hint {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// Seed for picking the revealed word
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Check a guess against a movie title
    Guess {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// The guess
        guess: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Show the effective configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,
    },
}
