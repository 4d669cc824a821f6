//! The `starmap` binary: load config, generate a galaxy, report it, and
//! optionally save a snapshot.

mod generate;
mod platform;

use std::path::Path;

use clap::Parser;
use rand::Rng;
use starmap_config::{CliArgs, Config};
use starmap_galaxy::{Galaxy, Mass};

use crate::generate::{generate_with_retries, recipe_from_config};
use crate::platform::PlatformDirs;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("starmap: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);

    let file_logging = cfg!(debug_assertions) || config.debug.file_logging;
    starmap_log::init_logging(Some(&dirs.log_dir), file_logging, Some(&config));
    tracing::info!(
        config_dir = %dirs.config_dir.display(),
        data_dir = %dirs.data_dir.display(),
        "starmap starting"
    );

    let generation = &config.generation;
    let recipe = recipe_from_config(generation)?;
    let seed = generation.seed.unwrap_or_else(|| rand::rng().random());
    let generated = generate_with_retries(&recipe, seed, generation.max_attempts)?;
    tracing::info!(
        seed = generated.seed,
        attempts = generated.attempts,
        "galaxy generated"
    );

    print_summary(&generated.galaxy, generated.seed);

    if let Some(path) = &args.snapshot {
        save(&generated.galaxy, path)?;
    }
    Ok(())
}

fn save(galaxy: &Galaxy, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    galaxy.save_snapshot(path)?;
    let restored = Galaxy::load_snapshot(path)?;
    if &restored != galaxy {
        return Err(format!("snapshot {} does not round-trip", path.display()).into());
    }
    println!("  snapshot: {}", path.display());
    Ok(())
}

fn print_summary(galaxy: &Galaxy, seed: u64) {
    let bounds = galaxy.bounds();
    println!("Galaxy (seed {seed})");
    println!(
        "  bounds:   {:.1} x {:.1} (left {:.1}, top {:.1})",
        bounds.width(),
        bounds.height(),
        bounds.left,
        bounds.top
    );
    println!(
        "  distance: min {:.1}, max {:.1}",
        galaxy.min_distance(),
        galaxy.max_distance()
    );
    println!(
        "  objects:  {} background stars, {} nebulae, {} pickable",
        galaxy.background_stars().len(),
        galaxy.nebulae().len(),
        galaxy.color_picks().len()
    );
    for star in galaxy.named_stars() {
        let at = star.coordinates();
        println!(
            "    {:<20} {:>8.1} {:>8.1}  {}",
            star.name(),
            at.x,
            at.y,
            star.color_name()
        );
    }
    for hole in galaxy.worm_holes() {
        let [a, b] = hole.endpoints();
        println!(
            "    wormhole {} <-> {}",
            galaxy.named_stars()[a].name(),
            galaxy.named_stars()[b].name()
        );
    }
    for hole in galaxy.black_holes() {
        let at = hole.coordinates();
        println!("    black hole at {:.1}, {:.1}", at.x, at.y);
    }
}
