//! Nebulae: clusters of lobes sharing a primary color family.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dispersion::{Region, random_dispersed_coordinates};
use crate::error::{GalaxyError, Result};
use crate::lobe::{LOBE_OFFSET_BOUNDS, Lobe, LobeSpec, SECONDARY_PERMUTATIONS};
use crate::mass::{Mass, check_coordinates, check_scale_factor};
use crate::palette::PrimaryColor;

/// Furthest a nebula is considered to reach from its center.
pub const NEBULA_MAX_OFFSET: f64 = 200.0;

/// Minimum distance between two nebula centers.
pub const MIN_NEBULA_DISTANCE: f64 = NEBULA_MAX_OFFSET * 2.0;

/// Fewest lobes a nebula may have.
pub const MIN_LOBES: usize = 3;

/// Most lobes a nebula may have.
pub const MAX_LOBES: usize = 6;

/// Minimum separation between lobe offsets of one nebula.
pub const LOBE_DISPERSION: f64 = 15.0;

/// A nebula placed on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nebula {
    center: DVec2,
    primary: PrimaryColor,
    lobes: Vec<Lobe>,
    position: DVec2,
}

impl Nebula {
    /// Build a nebula from explicit lobe specs, randomizing unset lobe fields
    /// with the thread-local generator.
    ///
    /// # Errors
    ///
    /// - [`GalaxyError::UnknownColor`] if `primary` is not red, green or blue.
    /// - [`GalaxyError::LobeCount`] if `lobes` has fewer than [`MIN_LOBES`] or
    ///   more than [`MAX_LOBES`] entries.
    /// - Any lobe range error.
    pub fn new(center: DVec2, primary: &str, lobes: &[LobeSpec]) -> Result<Self> {
        Self::with_rng(&mut rand::rng(), center, primary, lobes)
    }

    /// Like [`new`](Self::new) with an injected random source.
    pub fn with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        primary: &str,
        lobes: &[LobeSpec],
    ) -> Result<Self> {
        let primary = PrimaryColor::from_name(primary)?;
        Self::build(rng, center, primary, lobes)
    }

    /// Generate a nebula with a random lobe count, dispersed lobe offsets and
    /// secondary/variant combinations cycled from a random start.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        primary: PrimaryColor,
    ) -> Result<Self> {
        let lobe_count = rng.random_range(MIN_LOBES..=MAX_LOBES);
        let offsets = random_dispersed_coordinates(
            rng,
            Region::square(LOBE_OFFSET_BOUNDS),
            lobe_count,
            LOBE_DISPERSION,
        )?;

        let start = rng.random_range(0..SECONDARY_PERMUTATIONS.len());
        let specs: Vec<LobeSpec> = offsets
            .into_iter()
            .enumerate()
            .map(|(i, offset)| LobeSpec::from_permutation(start + i).with_offset(offset))
            .collect();

        log::debug!("nebula at {center}: {} lobes", specs.len());
        Self::build(rng, center, primary, &specs)
    }

    fn build<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        primary: PrimaryColor,
        specs: &[LobeSpec],
    ) -> Result<Self> {
        check_coordinates(center)?;
        if !(MIN_LOBES..=MAX_LOBES).contains(&specs.len()) {
            return Err(GalaxyError::LobeCount {
                count: specs.len(),
                min: MIN_LOBES,
                max: MAX_LOBES,
            });
        }
        let lobes = specs
            .iter()
            .map(|spec| Lobe::new(rng, center, primary, *spec))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            center,
            primary,
            lobes,
            position: center,
        })
    }

    /// Color family of every lobe.
    pub fn primary_color(&self) -> PrimaryColor {
        self.primary
    }

    /// Lobes in creation order.
    pub fn lobes(&self) -> &[Lobe] {
        &self.lobes
    }

    /// Presentation position of the nebula center.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Rescale the center, every lobe position and every lobe size so the
    /// lobes stay anchored to the nebula at any zoom.
    pub fn scale_coordinates_and_size(&mut self, factor: f64) -> Result<()> {
        check_scale_factor(factor)?;
        self.position = self.center * factor;
        for lobe in &mut self.lobes {
            lobe.scale_from(self.center, factor);
        }
        Ok(())
    }
}

impl Mass for Nebula {
    fn coordinates(&self) -> DVec2 {
        self.center
    }

    fn scale_coordinates(&mut self, factor: f64) -> Result<()> {
        self.scale_coordinates_and_size(factor)
    }
}

/// First pair of nebulae closer than [`MIN_NEBULA_DISTANCE`], as an error.
pub(crate) fn check_nebula_separation(nebulae: &[Nebula]) -> Result<()> {
    for (i, a) in nebulae.iter().enumerate() {
        for b in &nebulae[i + 1..] {
            let distance = a.center.distance(b.center);
            if distance < MIN_NEBULA_DISTANCE {
                return Err(GalaxyError::NebulaeTooClose {
                    a: a.center,
                    b: b.center,
                    distance,
                    min: MIN_NEBULA_DISTANCE,
                });
            }
        }
    }
    Ok(())
}

/// Generate `count` nebulae spread over `region`.
///
/// Primary colors cycle red → green → blue from a random starting point.
/// The separation of the result is checked once more; a failure is returned
/// as-is and it is up to the caller to re-roll.
///
/// # Errors
///
/// Dispersion capacity or range errors, lobe errors, or
/// [`GalaxyError::NebulaeTooClose`].
pub fn generate_nebulae<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    region: Region,
) -> Result<Vec<Nebula>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let centers = random_dispersed_coordinates(rng, region, count, MIN_NEBULA_DISTANCE)?;
    let start = rng.random_range(0..PrimaryColor::ALL.len());

    let nebulae = centers
        .into_iter()
        .enumerate()
        .map(|(i, center)| {
            let primary = PrimaryColor::ALL[(start + i) % PrimaryColor::ALL.len()];
            Nebula::generate(rng, center, primary)
        })
        .collect::<Result<Vec<_>>>()?;

    check_nebula_separation(&nebulae)?;
    log::debug!("generated {} nebulae", nebulae.len());
    Ok(nebulae)
}
