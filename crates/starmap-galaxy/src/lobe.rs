//! A single irregular colored blob belonging to a nebula.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::palette::{PrimaryColor, SecondaryColor, lobe_image_file};

/// Half-width of the square around a nebula center that lobe offsets may occupy.
pub const LOBE_OFFSET_BOUNDS: f64 = 80.0;

/// Smallest allowed lobe scale.
pub const MIN_LOBE_SCALE: f64 = 0.5;

/// Largest allowed lobe scale.
pub const MAX_LOBE_SCALE: f64 = 2.0;

/// `(secondary color slot, image variant)` pairs, cycled per nebula.
pub const SECONDARY_PERMUTATIONS: [(u8, u8); 4] = [(0, 1), (0, 2), (1, 1), (1, 2)];

/// Requested lobe parameters; unset fields are randomized.
///
/// Slot and variant are kept signed so out-of-range requests are reported
/// rather than wrapped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobeSpec {
    /// Which of the primary's two secondary colors to use (0 or 1).
    pub secondary_index: i64,
    /// Image variant (1 or 2).
    pub image_variant: i64,
    /// Offset from the nebula center.
    pub offset: Option<DVec2>,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation: Option<f64>,
    /// Sprite scale.
    pub scale: Option<f64>,
}

impl LobeSpec {
    /// Spec with random offset, rotation and scale.
    pub fn new(secondary_index: i64, image_variant: i64) -> Self {
        Self {
            secondary_index,
            image_variant,
            offset: None,
            rotation: None,
            scale: None,
        }
    }

    /// Spec taken from the permutation table, wrapping `index`.
    pub fn from_permutation(index: usize) -> Self {
        let (slot, variant) = SECONDARY_PERMUTATIONS[index % SECONDARY_PERMUTATIONS.len()];
        Self::new(i64::from(slot), i64::from(variant))
    }

    /// Fix the offset.
    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Fix the rotation.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Fix the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Presentation-space state of a lobe sprite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LobeSprite {
    /// Sprite position after scaling.
    pub position: DVec2,
    /// Sprite scale after scaling.
    pub scale: f64,
}

/// One lobe of a nebula.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lobe {
    offset: DVec2,
    primary: PrimaryColor,
    secondary_index: u8,
    image_variant: u8,
    rotation: f64,
    scale: f64,
    sprite: LobeSprite,
}

impl Lobe {
    /// Build and validate a lobe of `primary` positioned relative to `center`.
    pub(crate) fn new<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        primary: PrimaryColor,
        spec: LobeSpec,
    ) -> Result<Self> {
        let secondary_index = match spec.secondary_index {
            0 | 1 => spec.secondary_index as u8,
            other => return Err(GalaxyError::SecondaryColorIndex(other)),
        };
        let image_variant = match spec.image_variant {
            1 | 2 => spec.image_variant as u8,
            other => return Err(GalaxyError::ImageVariant(other)),
        };

        let offset = spec.offset.unwrap_or_else(|| {
            DVec2::new(
                rng.random_range(-LOBE_OFFSET_BOUNDS..=LOBE_OFFSET_BOUNDS),
                rng.random_range(-LOBE_OFFSET_BOUNDS..=LOBE_OFFSET_BOUNDS),
            )
        });
        if !offset.is_finite()
            || offset.x.abs() > LOBE_OFFSET_BOUNDS
            || offset.y.abs() > LOBE_OFFSET_BOUNDS
        {
            return Err(GalaxyError::LobeOffset {
                x: offset.x,
                y: offset.y,
                bound: LOBE_OFFSET_BOUNDS,
            });
        }

        let rotation = spec
            .rotation
            .unwrap_or_else(|| f64::from(rng.random_range(0..360u32)));
        if !(0.0..360.0).contains(&rotation) {
            return Err(GalaxyError::LobeRotation(rotation));
        }

        // Log-uniform over [10^-0.3, 10^0.3).
        let scale = spec
            .scale
            .unwrap_or_else(|| 10f64.powf(rng.random_range(-0.3..0.3)));
        if !(MIN_LOBE_SCALE..=MAX_LOBE_SCALE).contains(&scale) {
            return Err(GalaxyError::LobeScale {
                scale,
                min: MIN_LOBE_SCALE,
                max: MAX_LOBE_SCALE,
            });
        }

        Ok(Self {
            offset,
            primary,
            secondary_index,
            image_variant,
            rotation,
            scale,
            sprite: LobeSprite {
                position: center + offset,
                scale,
            },
        })
    }

    /// Offset from the nebula center in world units.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Color family inherited from the nebula.
    pub fn primary_color(&self) -> PrimaryColor {
        self.primary
    }

    /// Accent color.
    pub fn secondary_color(&self) -> SecondaryColor {
        self.primary.secondaries()[usize::from(self.secondary_index)]
    }

    /// Image variant, 1 or 2.
    pub fn image_variant(&self) -> u8 {
        self.image_variant
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Unscaled sprite scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current presentation position and scale.
    pub fn sprite(&self) -> LobeSprite {
        self.sprite
    }

    /// Asset identifier, `{primary}_{secondary}_nebula_{variant}.png`.
    pub fn image_file_name(&self) -> &'static str {
        lobe_image_file(self.primary, self.secondary_index, self.image_variant)
    }

    /// Re-derive the sprite from the nebula's world center.
    pub(crate) fn scale_from(&mut self, center: DVec2, factor: f64) {
        self.sprite = LobeSprite {
            position: (center + self.offset) * factor,
            scale: self.scale * factor,
        };
    }
}
