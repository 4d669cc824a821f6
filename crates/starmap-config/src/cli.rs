//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Star map generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "starmap", about = "Procedural galaxy star map generator")]
pub struct CliArgs {
    /// RNG seed for a reproducible galaxy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of nebulae.
    #[arg(long)]
    pub nebulae: Option<usize>,

    /// Number of named stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the generated galaxy to this file.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(n) = args.nebulae {
            self.generation.nebulae = n;
        }
        if let Some(n) = args.stars {
            self.generation.named_stars = n;
            self.generation.star_names.clear();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        config.generation.star_names = vec!["Sol".to_string()];
        let args = CliArgs {
            seed: Some(7),
            stars: Some(20),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.seed, Some(7));
        assert_eq!(config.generation.named_stars, 20);
        assert!(config.generation.star_names.is_empty());
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.nebulae, 4);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "starmap",
            "--seed",
            "99",
            "--nebulae",
            "3",
            "--snapshot",
            "galaxy.bin",
        ]);
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.nebulae, Some(3));
        assert_eq!(args.snapshot, Some(PathBuf::from("galaxy.bin")));
        assert!(args.config.is_none());
    }
}
