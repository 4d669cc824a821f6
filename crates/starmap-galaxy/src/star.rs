//! Named foreground stars and decorative background stars.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::mass::{Mass, Pickable, check_coordinates, check_scale_factor};
use crate::palette::{DEFAULT_STAR_COLOR, star_color};
use crate::picking::PickColor;

/// Shortest allowed star name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Longest allowed star name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Label position relative to the sprite, in presentation units.
pub const LABEL_OFFSET: DVec2 = DVec2::new(0.0, -4.0);

/// Anchor point inside the star sprite image.
pub const SPRITE_ORIGIN: DVec2 = DVec2::new(3.0, 3.0);

/// A named, pickable star with a label and a toggleable marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForegroundStar {
    coordinates: DVec2,
    name: String,
    color_name: String,
    color: [u8; 3],
    sprite_position: DVec2,
    label_position: DVec2,
    marker_position: DVec2,
    marker_visible: bool,
    pick_color: Option<PickColor>,
}

impl ForegroundStar {
    /// Create a star, defaulting to [`DEFAULT_STAR_COLOR`].
    ///
    /// # Errors
    ///
    /// - [`GalaxyError::CoordinateOutOfBounds`] beyond the galaxy limit.
    /// - [`GalaxyError::NameLength`] for names outside
    ///   [`MIN_NAME_LEN`]..=[`MAX_NAME_LEN`] characters.
    /// - [`GalaxyError::UnknownColor`] for an unlisted color.
    pub fn new(coordinates: DVec2, name: &str, color: Option<&str>) -> Result<Self> {
        check_coordinates(coordinates)?;

        let len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return Err(GalaxyError::NameLength {
                name: name.to_string(),
                len,
                min: MIN_NAME_LEN,
                max: MAX_NAME_LEN,
            });
        }

        let (color_name, rgb) = star_color(color.unwrap_or(DEFAULT_STAR_COLOR))?;

        let mut star = Self {
            coordinates,
            name: name.to_string(),
            color_name: color_name.to_string(),
            color: rgb,
            sprite_position: coordinates,
            label_position: coordinates,
            marker_position: coordinates,
            marker_visible: false,
            pick_color: None,
        };
        star.place(1.0);
        Ok(star)
    }

    fn place(&mut self, factor: f64) {
        self.sprite_position = self.coordinates * factor;
        self.label_position = self.sprite_position + LABEL_OFFSET;
        self.marker_position = self.sprite_position;
    }

    /// Star name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Named color.
    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    /// Sprite tint.
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Presentation position of the sprite.
    pub fn sprite_position(&self) -> DVec2 {
        self.sprite_position
    }

    /// Presentation position of the name label.
    pub fn label_position(&self) -> DVec2 {
        self.label_position
    }

    /// Presentation position of the selection marker.
    pub fn marker_position(&self) -> DVec2 {
        self.marker_position
    }

    /// Anchor point inside the sprite image.
    pub fn sprite_origin(&self) -> DVec2 {
        SPRITE_ORIGIN
    }

    /// Whether the selection marker is drawn.
    pub fn marker_visible(&self) -> bool {
        self.marker_visible
    }

    /// Stop drawing the selection marker.
    pub fn hide_marker(&mut self) {
        self.marker_visible = false;
    }

    /// Start drawing the selection marker.
    pub fn reveal_marker(&mut self) {
        self.marker_visible = true;
    }
}

impl Mass for ForegroundStar {
    fn coordinates(&self) -> DVec2 {
        self.coordinates
    }

    fn scale_coordinates(&mut self, factor: f64) -> Result<()> {
        check_scale_factor(factor)?;
        self.place(factor);
        Ok(())
    }
}

impl Pickable for ForegroundStar {
    fn pick_color(&self) -> Option<PickColor> {
        self.pick_color
    }

    fn set_pick_color(&mut self, color: PickColor) {
        self.pick_color = Some(color);
    }
}

/// A decorative star drawn in one batch with all the others.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStar {
    coordinates: DVec2,
    color: [u8; 3],
    position: DVec2,
}

impl BackgroundStar {
    /// Create a background star.
    pub fn new(coordinates: DVec2, color: [u8; 3]) -> Result<Self> {
        check_coordinates(coordinates)?;
        Ok(Self {
            coordinates,
            color,
            position: coordinates,
        })
    }

    /// Vertex color.
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Presentation position.
    pub fn position(&self) -> DVec2 {
        self.position
    }
}

impl Mass for BackgroundStar {
    fn coordinates(&self) -> DVec2 {
        self.coordinates
    }

    fn scale_coordinates(&mut self, factor: f64) -> Result<()> {
        check_scale_factor(factor)?;
        self.position = self.coordinates * factor;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sol() -> ForegroundStar {
        ForegroundStar::new(DVec2::new(500.0, 500.0), "sol", Some("yellow")).unwrap()
    }

    #[test]
    fn test_out_of_bounds() {
        for (x, y) in [
            (100_000.0, 0.0),
            (-100_000.0, 0.0),
            (0.0, -100_000.0),
            (0.0, 100_000.0),
        ] {
            let err = ForegroundStar::new(DVec2::new(x, y), "sol", None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
        }
    }

    #[test]
    fn test_name_length_boundaries() {
        let at = |len: usize| ForegroundStar::new(DVec2::ZERO, &"a".repeat(len), None);
        assert!(matches!(at(1), Err(GalaxyError::NameLength { len: 1, .. })));
        assert!(matches!(at(21), Err(GalaxyError::NameLength { len: 21, .. })));
        assert!(at(2).is_ok());
        assert!(at(20).is_ok());
        assert!(at(0).is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // Two characters, four bytes.
        assert!(ForegroundStar::new(DVec2::ZERO, "αβ", None).is_ok());
    }

    #[test]
    fn test_bad_color() {
        let err = ForegroundStar::new(DVec2::ZERO, "sol", Some("chartreuse")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn test_color() {
        assert_eq!(sol().color(), [255, 255, 0]);
        assert_eq!(sol().color_name(), "yellow");
        let plain = ForegroundStar::new(DVec2::ZERO, "sol", None).unwrap();
        assert_eq!(plain.color_name(), DEFAULT_STAR_COLOR);
    }

    #[test]
    fn test_scaling_coordinates() {
        let mut star = sol();
        for factor in [0.125, 1.0, 7.5] {
            star.scale_coordinates(factor).unwrap();
            assert_eq!(star.sprite_position(), DVec2::splat(500.0 * factor));
        }
    }

    #[test]
    fn test_scaling_labels_and_markers() {
        let mut star = sol();
        for (factor, expected) in [(0.5, 250.0), (1.0, 500.0), (2.0, 1000.0)] {
            star.scale_coordinates(factor).unwrap();
            assert_eq!(star.label_position(), DVec2::new(expected, expected - 4.0));
            assert_eq!(star.marker_position(), DVec2::splat(expected));
        }
    }

    #[test]
    fn test_rescale_is_not_cumulative() {
        let mut star = sol();
        star.scale_coordinates(4.0).unwrap();
        star.scale_coordinates(0.5).unwrap();
        assert_eq!(star.sprite_position(), DVec2::splat(250.0));
    }

    #[test]
    fn test_rejects_bad_factor() {
        let mut star = sol();
        star.scale_coordinates(2.0).unwrap();
        assert!(star.scale_coordinates(0.0).is_err());
        // Failed rescale leaves the previous presentation untouched.
        assert_eq!(star.sprite_position(), DVec2::splat(1000.0));
    }

    #[test]
    fn test_marker_toggles() {
        let mut star = sol();
        assert!(!star.marker_visible());
        star.reveal_marker();
        assert!(star.marker_visible());
        star.reveal_marker();
        assert!(star.marker_visible());
        star.hide_marker();
        assert!(!star.marker_visible());
    }

    #[test]
    fn test_sprite_origin() {
        assert_eq!(sol().sprite_origin(), DVec2::new(3.0, 3.0));
    }

    #[test]
    fn test_background_star() {
        let mut star = BackgroundStar::new(DVec2::new(10.0, -2.0), [128, 0, 255]).unwrap();
        assert_eq!(star.color(), [128, 0, 255]);
        star.scale_coordinates(0.5).unwrap();
        assert_eq!(star.position(), DVec2::new(5.0, -1.0));
        assert_eq!(star.coordinates(), DVec2::new(10.0, -2.0));
    }
}
