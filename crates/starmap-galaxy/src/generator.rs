//! Scene factories: random named stars, background stars, black holes, and a
//! one-call recipe that produces a whole galaxy.

use glam::DVec2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::black_hole::BlackHole;
use crate::dispersion::{Region, disperse_around, random_dispersed_coordinates};
use crate::error::{GalaxyError, Result};
use crate::galaxy::{Galaxy, GalaxyParts};
use crate::mass::{MIN_MASS_DISTANCE, Mass};
use crate::nebula::generate_nebulae;
use crate::palette::STAR_COLORS;
use crate::star::{BackgroundStar, ForegroundStar};
use crate::worm_hole::WormHole;

/// Built-in star names used when a recipe does not supply its own.
pub const STAR_NAMES: [&str; 32] = [
    "Sol",
    "Alpha Centauri",
    "Barnard's Star",
    "Wolf 359",
    "Lalande 21185",
    "Sirius",
    "Luyten 726-8",
    "Ross 154",
    "Ross 248",
    "Epsilon Eridani",
    "Lacaille 9352",
    "Ross 128",
    "Procyon",
    "61 Cygni",
    "Struve 2398",
    "Groombridge 34",
    "Epsilon Indi",
    "Tau Ceti",
    "Gliese 1061",
    "YZ Ceti",
    "Luyten's Star",
    "Teegarden's Star",
    "Kapteyn's Star",
    "Lacaille 8760",
    "Kruger 60",
    "Delta Pavonis",
    "Xi Bootis",
    "Altair",
    "Vega",
    "Fomalhaut",
    "Arcturus",
    "Spica",
];

/// Everything [`generate_galaxy`] needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyRecipe {
    /// Area objects are scattered over.
    pub region: Region,
    /// Names of the named stars, one star per name.
    pub star_names: Vec<String>,
    /// Number of background stars.
    pub background_stars: usize,
    /// Number of black holes.
    pub black_holes: usize,
    /// Number of nebulae.
    pub nebulae: usize,
    /// Number of wormholes; each uses two distinct stars.
    pub worm_holes: usize,
}

impl Default for GalaxyRecipe {
    fn default() -> Self {
        Self {
            region: Region::new(-4000.0, -2500.0, 4000.0, 2500.0),
            star_names: STAR_NAMES.iter().take(12).map(|s| s.to_string()).collect(),
            background_stars: 400,
            black_holes: 2,
            nebulae: 4,
            worm_holes: 2,
        }
    }
}

/// One named star per entry of `names`, dispersed [`MIN_MASS_DISTANCE`] apart
/// and tinted with a random named color.
pub fn generate_named_stars<R: Rng + ?Sized, S: AsRef<str>>(
    rng: &mut R,
    names: &[S],
    region: Region,
) -> Result<Vec<ForegroundStar>> {
    let positions = random_dispersed_coordinates(rng, region, names.len(), MIN_MASS_DISTANCE)?;
    positions
        .into_iter()
        .zip(names)
        .map(|(position, name)| {
            let (color, _) = STAR_COLORS[rng.random_range(0..STAR_COLORS.len())];
            ForegroundStar::new(position, name.as_ref(), Some(color))
        })
        .collect()
}

/// `count` background stars anywhere in `region`, in faint blue-to-white
/// tones. They may overlap; they are only decoration.
pub fn generate_background_stars<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    region: Region,
) -> Result<Vec<BackgroundStar>> {
    (0..count)
        .map(|_| {
            let brightness: u8 = rng.random_range(64..=200);
            let blue = brightness.saturating_add(rng.random_range(0..=55));
            BackgroundStar::new(region.sample(rng), [brightness, brightness, blue])
        })
        .collect()
}

/// `count` black holes dispersed in `region`, each at least
/// [`MIN_MASS_DISTANCE`] from one another and from every point in `avoid`.
pub fn generate_black_holes<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    region: Region,
    avoid: &[DVec2],
) -> Result<Vec<BlackHole>> {
    disperse_around(rng, region, count, MIN_MASS_DISTANCE, avoid)?
        .into_iter()
        .map(BlackHole::new)
        .collect()
}

/// Pick `count` wormholes over disjoint pairs of `star_count` stars.
pub fn generate_worm_holes<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    star_count: usize,
) -> Result<Vec<WormHole>> {
    if count > star_count / 2 {
        return Err(GalaxyError::DispersionCapacity {
            amount: count.saturating_mul(2),
            dispersion: 0.0,
            placed: star_count,
        });
    }
    let mut indices: Vec<usize> = (0..star_count).collect();
    indices.shuffle(rng);
    Ok(indices
        .chunks_exact(2)
        .take(count)
        .map(|pair| WormHole::new(pair[0], pair[1]))
        .collect())
}

/// Generate and validate a complete galaxy.
///
/// Any failure is returned unchanged; retrying with fresh randomness is the
/// caller's decision.
pub fn generate_galaxy<R: Rng + ?Sized>(rng: &mut R, recipe: &GalaxyRecipe) -> Result<Galaxy> {
    let named_stars = generate_named_stars(rng, &recipe.star_names, recipe.region)?;
    let star_positions: Vec<DVec2> = named_stars.iter().map(Mass::coordinates).collect();
    let black_holes = generate_black_holes(rng, recipe.black_holes, recipe.region, &star_positions)?;
    let nebulae = generate_nebulae(rng, recipe.nebulae, recipe.region)?;
    let background_stars = generate_background_stars(rng, recipe.background_stars, recipe.region)?;
    let worm_holes = generate_worm_holes(rng, recipe.worm_holes, named_stars.len())?;

    Galaxy::new(GalaxyParts {
        named_stars,
        background_stars,
        black_holes,
        nebulae,
        worm_holes,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::ErrorKind;
    use crate::star::MAX_NAME_LEN;

    #[test]
    fn test_builtin_names_are_valid() {
        for name in STAR_NAMES {
            assert!(
                (2..=MAX_NAME_LEN).contains(&name.chars().count()),
                "{name} has a bad length"
            );
        }
    }

    #[test]
    fn test_named_stars_are_dispersed() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stars = generate_named_stars(&mut rng, &STAR_NAMES[..10], Region::square(2000.0))
            .unwrap();
        assert_eq!(stars.len(), 10);
        assert_eq!(stars[4].name(), STAR_NAMES[4]);
        for (i, a) in stars.iter().enumerate() {
            for b in &stars[i + 1..] {
                assert!(a.coordinates().distance(b.coordinates()) >= MIN_MASS_DISTANCE);
            }
        }
    }

    #[test]
    fn test_background_stars_stay_in_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let region = Region::new(0.0, 0.0, 100.0, 50.0);
        let stars = generate_background_stars(&mut rng, 200, region).unwrap();
        assert_eq!(stars.len(), 200);
        assert!(stars.iter().all(|s| region.contains(s.coordinates())));
        assert!(stars.iter().all(|s| s.color()[2] >= s.color()[0]));
    }

    #[test]
    fn test_black_holes_avoid_stars() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let avoid = [DVec2::ZERO, DVec2::new(500.0, 500.0)];
        let holes = generate_black_holes(&mut rng, 3, Region::square(1000.0), &avoid).unwrap();
        assert_eq!(holes.len(), 3);
        for hole in &holes {
            for a in &avoid {
                assert!(hole.coordinates().distance(*a) >= MIN_MASS_DISTANCE);
            }
        }
    }

    #[test]
    fn test_worm_holes_are_disjoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let holes = generate_worm_holes(&mut rng, 3, 7).unwrap();
        let mut seen: Vec<usize> = holes.iter().flat_map(WormHole::endpoints).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 6);
        assert!(generate_worm_holes(&mut rng, 4, 7).is_err());
    }

    #[test]
    fn test_huge_worm_hole_count_is_capacity_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let err = generate_worm_holes(&mut rng, usize::MAX / 2 + 1, 12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert!(matches!(
            err,
            GalaxyError::DispersionCapacity { amount: usize::MAX, placed: 12, .. }
        ));
    }

    #[test]
    fn test_generate_galaxy_is_reproducible() {
        let recipe = GalaxyRecipe::default();
        let a = generate_galaxy(&mut ChaCha8Rng::seed_from_u64(42), &recipe).unwrap();
        let b = generate_galaxy(&mut ChaCha8Rng::seed_from_u64(42), &recipe).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.named_stars().len(), recipe.star_names.len());
        assert_eq!(a.black_holes().len(), recipe.black_holes);
        assert_eq!(a.nebulae().len(), recipe.nebulae);
        assert_eq!(a.worm_holes().len(), recipe.worm_holes);
        assert_eq!(a.background_star_vertices().len(), recipe.background_stars * 3);
    }

    #[test]
    fn test_generate_galaxy_too_few_stars() {
        let recipe = GalaxyRecipe {
            star_names: vec!["Sol".into(), "Vega".into()],
            worm_holes: 0,
            ..Default::default()
        };
        let err = generate_galaxy(&mut ChaCha8Rng::seed_from_u64(1), &recipe).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingData);
    }
}
