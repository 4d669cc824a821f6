//! Positioned objects and the world → presentation transform shared by them.

use glam::DVec2;

use crate::error::{GalaxyError, Result};
use crate::picking::PickColor;

/// Largest absolute world coordinate on either axis.
pub const GALAXY_LIMIT: f64 = 10_000.0;

/// Minimum separation between any two named stars or black holes.
pub const MIN_MASS_DISTANCE: f64 = 100.0;

/// Anything with a fixed world position that can be drawn at some zoom.
///
/// Presentation positions are always derived from the stored world
/// coordinate, so calling [`scale_coordinates`](Mass::scale_coordinates)
/// repeatedly never accumulates.
pub trait Mass {
    /// World-space position.
    fn coordinates(&self) -> DVec2;

    /// Recompute presentation geometry as `coordinates * factor`.
    fn scale_coordinates(&mut self, factor: f64) -> Result<()>;
}

/// Objects that take part in color-buffer picking.
pub trait Pickable {
    /// The color assigned by the galaxy, if it has been built.
    fn pick_color(&self) -> Option<PickColor>;

    /// Record the color assigned by the galaxy.
    fn set_pick_color(&mut self, color: PickColor);
}

/// Reject world coordinates beyond [`GALAXY_LIMIT`].
pub(crate) fn check_coordinates(coordinates: DVec2) -> Result<()> {
    if !coordinates.is_finite()
        || coordinates.x.abs() > GALAXY_LIMIT
        || coordinates.y.abs() > GALAXY_LIMIT
    {
        return Err(GalaxyError::CoordinateOutOfBounds {
            x: coordinates.x,
            y: coordinates.y,
            limit: GALAXY_LIMIT,
        });
    }
    Ok(())
}

/// Reject zoom factors that would collapse or flip the view.
pub(crate) fn check_scale_factor(factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(GalaxyError::ScaleFactor(factor));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_inclusive() {
        assert!(check_coordinates(DVec2::new(GALAXY_LIMIT, -GALAXY_LIMIT)).is_ok());
        assert!(check_coordinates(DVec2::new(GALAXY_LIMIT + 1.0, 0.0)).is_err());
        assert!(check_coordinates(DVec2::new(0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_scale_factor_must_be_positive() {
        assert!(check_scale_factor(0.5).is_ok());
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(check_scale_factor(bad).is_err(), "{bad} accepted");
        }
    }
}
