pub mod catalog;
pub mod config;
pub mod puzzle;
pub mod select;

use std::path::PathBuf;

use anyhow::Result;
use blackout_config::Config;
use blackout_storage::Catalog;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::CatalogArgs;

/// Seeded generator when a seed is given (flag first, then config), entropy otherwise
pub fn make_rng(seed: Option<u64>, config: &Config) -> StdRng {
    match seed.or(config.seed) {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Catalog path from the flag, falling back to config
pub fn catalog_path(args: &CatalogArgs, config: &Config) -> PathBuf {
    args.catalog
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone())
}

pub fn open_catalog(args: &CatalogArgs, config: &Config) -> Result<Catalog> {
    Ok(Catalog::open(catalog_path(args, config))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_flag_seed_overrides_config() {
        let config = Config {
            seed: Some(1),
            ..Config::default()
        };
        let a: u64 = make_rng(Some(2), &config).r#gen();
        let b: u64 = StdRng::seed_from_u64(2).r#gen();
        assert_eq!(a, b);

        let c: u64 = make_rng(None, &config).r#gen();
        let d: u64 = StdRng::seed_from_u64(1).r#gen();
        assert_eq!(c, d);
    }

    #[test]
    fn test_catalog_path_fallback() {
        let config = Config::default();
        let args = CatalogArgs { catalog: None };
        assert_eq!(catalog_path(&args, &config), PathBuf::from("movies.json"));

        let args = CatalogArgs {
            catalog: Some(PathBuf::from("other.json")),
        };
        assert_eq!(catalog_path(&args, &config), PathBuf::from("other.json"));
    }
}
