//! Turning configuration into a galaxy, reseeding on failure.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use starmap_config::GenerationConfig;
use starmap_galaxy::{Galaxy, GalaxyError, GalaxyRecipe, Region, STAR_NAMES, generate_galaxy};

/// Errors from the generation driver.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// More catalog names were requested than the catalog holds.
    #[error("requested {requested} named stars, the catalog has {available}")]
    CatalogTooSmall {
        /// Requested star count.
        requested: usize,
        /// Catalog size.
        available: usize,
    },

    /// `max_attempts` is zero.
    #[error("max_attempts must be at least 1")]
    NoAttempts,

    /// Every attempt failed; carries the last failure.
    #[error("no valid galaxy after {attempts} attempts (base seed {seed}): {last}")]
    Exhausted {
        /// Attempts made.
        attempts: u32,
        /// Seed of the first attempt.
        seed: u64,
        /// Error from the final attempt.
        #[source]
        last: GalaxyError,
    },
}

/// A successfully generated galaxy and the seed that produced it.
#[derive(Debug)]
pub struct Generated {
    /// The galaxy.
    pub galaxy: Galaxy,
    /// Seed of the attempt that succeeded.
    pub seed: u64,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// Build the recipe described by `config`.
pub fn recipe_from_config(config: &GenerationConfig) -> Result<GalaxyRecipe, GenerateError> {
    let star_names = if config.star_names.is_empty() {
        if config.named_stars > STAR_NAMES.len() {
            return Err(GenerateError::CatalogTooSmall {
                requested: config.named_stars,
                available: STAR_NAMES.len(),
            });
        }
        STAR_NAMES[..config.named_stars]
            .iter()
            .map(|name| name.to_string())
            .collect()
    } else {
        config.star_names.clone()
    };

    let [min_x, min_y, max_x, max_y] = config.region;
    Ok(GalaxyRecipe {
        region: Region::new(min_x, min_y, max_x, max_y),
        star_names,
        background_stars: config.background_stars,
        black_holes: config.black_holes,
        nebulae: config.nebulae,
        worm_holes: config.worm_holes,
    })
}

/// Generate a galaxy, retrying with `seed + attempt` until one validates or
/// `max_attempts` is spent.
pub fn generate_with_retries(
    recipe: &GalaxyRecipe,
    seed: u64,
    max_attempts: u32,
) -> Result<Generated, GenerateError> {
    let mut last = None;
    for attempt in 0..max_attempts {
        let attempt_seed = seed.wrapping_add(u64::from(attempt));
        let mut rng = ChaCha8Rng::seed_from_u64(attempt_seed);
        match generate_galaxy(&mut rng, recipe) {
            Ok(galaxy) => {
                return Ok(Generated {
                    galaxy,
                    seed: attempt_seed,
                    attempts: attempt + 1,
                });
            }
            Err(e) => {
                tracing::warn!(attempt = attempt + 1, seed = attempt_seed, "generation failed: {e}");
                last = Some(e);
            }
        }
    }

    match last {
        Some(last) => Err(GenerateError::Exhausted {
            attempts: max_attempts,
            seed,
            last,
        }),
        None => Err(GenerateError::NoAttempts),
    }
}

#[cfg(test)]
mod tests {
    use starmap_galaxy::ErrorKind;

    use super::*;

    #[test]
    fn test_default_config_recipe() {
        let recipe = recipe_from_config(&GenerationConfig::default()).unwrap();
        assert_eq!(recipe, GalaxyRecipe::default());
    }

    #[test]
    fn test_explicit_names_win() {
        let config = GenerationConfig {
            named_stars: 99,
            star_names: vec!["Aa".to_string(), "Bb".to_string(), "Cc".to_string()],
            ..Default::default()
        };
        let recipe = recipe_from_config(&config).unwrap();
        assert_eq!(recipe.star_names, ["Aa", "Bb", "Cc"]);
    }

    #[test]
    fn test_catalog_too_small() {
        let config = GenerationConfig {
            named_stars: STAR_NAMES.len() + 1,
            ..Default::default()
        };
        assert!(matches!(
            recipe_from_config(&config),
            Err(GenerateError::CatalogTooSmall { .. })
        ));
    }

    #[test]
    fn test_generation_is_seeded() {
        let recipe = GalaxyRecipe::default();
        let a = generate_with_retries(&recipe, 1234, 5).unwrap();
        let b = generate_with_retries(&recipe, 1234, 5).unwrap();
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.galaxy, b.galaxy);
    }

    #[test]
    fn test_exhausted_keeps_last_error() {
        // Two named stars can never satisfy the population check.
        let recipe = GalaxyRecipe {
            star_names: vec!["Sol".to_string(), "Vega".to_string()],
            worm_holes: 0,
            ..Default::default()
        };
        match generate_with_retries(&recipe, 0, 3) {
            Err(GenerateError::Exhausted { attempts, last, .. }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last.kind(), ErrorKind::MissingData);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_attempts() {
        let err = generate_with_retries(&GalaxyRecipe::default(), 0, 0).unwrap_err();
        assert!(matches!(err, GenerateError::NoAttempts));
    }
}
