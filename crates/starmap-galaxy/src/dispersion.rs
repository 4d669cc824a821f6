//! Random point placement with a minimum pairwise separation.
//!
//! The same primitive scatters nebula centers and stars across the whole map
//! and lobe offsets inside a single nebula.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Candidate draws allowed per point before placement is abandoned.
const MAX_ATTEMPTS_PER_POINT: u32 = 2_000;

/// Axis-aligned placement rectangle in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl Region {
    /// Region from `(min_x, min_y, max_x, max_y)`.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    /// Square region centred on the origin.
    pub fn square(half_width: f64) -> Self {
        Self::new(-half_width, -half_width, half_width, half_width)
    }

    /// Width and height.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// True if `point` lies inside or on the edge.
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Uniformly random point inside the region.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }

    fn validate(&self, dispersion: f64) -> Result<()> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.size().is_finite()
            && self.min.cmple(self.max).all()
            && dispersion.is_finite()
            && dispersion >= 0.0;
        if !ok {
            return Err(GalaxyError::InvalidRegion {
                min_x: self.min.x,
                min_y: self.min.y,
                max_x: self.max.x,
                max_y: self.max.y,
                dispersion,
            });
        }
        Ok(())
    }

    /// Upper bound on how many points `dispersion` apart fit in the region.
    ///
    /// Disks of diameter `dispersion` around each point stay inside the
    /// region grown by `dispersion / 2`, and no packing of equal disks beats
    /// the hexagonal density `π / √12`.
    fn packing_bound(&self, dispersion: f64) -> f64 {
        if dispersion == 0.0 {
            return f64::INFINITY;
        }
        let grown = self.size() + DVec2::splat(dispersion);
        let disk_area = std::f64::consts::PI * dispersion * dispersion / 4.0;
        let max_density = std::f64::consts::PI / 12f64.sqrt();
        (grown.x * grown.y * max_density / disk_area).floor()
    }
}

/// Scatter `amount` points inside `region`, each at least `dispersion` from
/// every other.
///
/// # Errors
///
/// - [`GalaxyError::InvalidRegion`] for an inverted or non-finite region or a
///   negative dispersion.
/// - [`GalaxyError::DispersionCapacity`] if the region provably cannot hold
///   the points, or random placement keeps failing.
pub fn random_dispersed_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    region: Region,
    amount: usize,
    dispersion: f64,
) -> Result<Vec<DVec2>> {
    disperse_around(rng, region, amount, dispersion, &[])
}

/// Like [`random_dispersed_coordinates`], but every new point must also keep
/// `dispersion` away from each point in `occupied`.
pub fn disperse_around<R: Rng + ?Sized>(
    rng: &mut R,
    region: Region,
    amount: usize,
    dispersion: f64,
    occupied: &[DVec2],
) -> Result<Vec<DVec2>> {
    region.validate(dispersion)?;

    if amount as f64 > region.packing_bound(dispersion) {
        return Err(GalaxyError::DispersionCapacity {
            amount,
            dispersion,
            placed: 0,
        });
    }

    let min_sq = dispersion * dispersion;
    let clear = |placed: &[DVec2], candidate: DVec2| {
        occupied
            .iter()
            .chain(placed)
            .all(|p| p.distance_squared(candidate) >= min_sq)
    };
    let mut placed: Vec<DVec2> = Vec::with_capacity(amount);

    while placed.len() < amount {
        let found = (0..MAX_ATTEMPTS_PER_POINT)
            .map(|_| region.sample(rng))
            .find(|candidate| clear(&placed, *candidate));
        match found {
            Some(point) => placed.push(point),
            None => {
                return Err(GalaxyError::DispersionCapacity {
                    amount,
                    dispersion,
                    placed: placed.len(),
                });
            }
        }
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_points_respect_dispersion_and_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let region = Region::new(-1000.0, -500.0, 1000.0, 500.0);
        let points = random_dispersed_coordinates(&mut rng, region, 20, 150.0).unwrap();
        assert_eq!(points.len(), 20);
        for (i, a) in points.iter().enumerate() {
            assert!(region.contains(*a), "{a} escaped the region");
            for b in &points[i + 1..] {
                assert!(a.distance(*b) >= 150.0, "{a} and {b} too close");
            }
        }
    }

    #[test]
    fn test_zero_amount_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = random_dispersed_coordinates(&mut rng, Region::square(10.0), 0, 5.0).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_same_seed_same_points() {
        let region = Region::square(80.0);
        let a = random_dispersed_coordinates(&mut ChaCha8Rng::seed_from_u64(99), region, 6, 15.0)
            .unwrap();
        let b = random_dispersed_coordinates(&mut ChaCha8Rng::seed_from_u64(99), region, 6, 15.0)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overfull_region_is_capacity_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = random_dispersed_coordinates(&mut rng, Region::square(10.0), 50, 15.0)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
    }

    #[test]
    fn test_inverted_region_is_range_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = Region::new(10.0, 0.0, -10.0, 5.0);
        let err = random_dispersed_coordinates(&mut rng, region, 1, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = random_dispersed_coordinates(&mut rng, Region::square(5.0), 1, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_region_with_overflowing_size_is_range_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = Region::new(-1e308, -1e308, 1e308, 1e308);
        let err = random_dispersed_coordinates(&mut rng, region, 3, 100.0).unwrap_err();
        assert!(matches!(err, GalaxyError::InvalidRegion { .. }), "{err}");
    }

    #[test]
    fn test_disperse_around_keeps_clear_of_occupied() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let occupied = [DVec2::ZERO, DVec2::new(50.0, 50.0)];
        let points = disperse_around(&mut rng, Region::square(200.0), 8, 40.0, &occupied).unwrap();
        assert_eq!(points.len(), 8);
        for p in &points {
            for o in &occupied {
                assert!(p.distance(*o) >= 40.0);
            }
        }
    }

    #[test]
    fn test_degenerate_region_holds_one_point() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = Region::new(4.0, 4.0, 4.0, 4.0);
        let points = random_dispersed_coordinates(&mut rng, region, 1, 10.0).unwrap();
        assert_eq!(points, vec![DVec2::new(4.0, 4.0)]);
    }
}
