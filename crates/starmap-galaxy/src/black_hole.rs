//! Black holes: pickable, animated point masses.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mass::{Mass, Pickable, check_coordinates, check_scale_factor};
use crate::picking::PickColor;

/// Number of frames in the black hole swirl animation.
pub const BLACK_HOLE_FRAMES: usize = 24;

/// Sprite sheet layout of the black hole animation. Loading and playback
/// belong to the renderer; this only identifies the asset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackHoleAnimation {
    /// Sprite sheet image.
    pub sheet_file_name: &'static str,
    /// Rows in the sheet.
    pub rows: u32,
    /// Columns in the sheet.
    pub columns: u32,
    /// Seconds each frame stays on screen.
    pub frame_period: f32,
}

impl BlackHoleAnimation {
    /// Total frame count.
    pub fn frame_count(&self) -> usize {
        (self.rows * self.columns) as usize
    }
}

/// The single animation shared by every black hole.
pub const BLACK_HOLE_ANIMATION: BlackHoleAnimation = BlackHoleAnimation {
    sheet_file_name: "black_hole.png",
    rows: 4,
    columns: 6,
    frame_period: 0.05,
};

/// A black hole on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlackHole {
    coordinates: DVec2,
    position: DVec2,
    pick_color: Option<PickColor>,
}

impl BlackHole {
    /// Create a black hole.
    pub fn new(coordinates: DVec2) -> Result<Self> {
        check_coordinates(coordinates)?;
        Ok(Self {
            coordinates,
            position: coordinates,
            pick_color: None,
        })
    }

    /// Presentation position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Animation drawn for every black hole.
    pub fn animation(&self) -> &'static BlackHoleAnimation {
        &BLACK_HOLE_ANIMATION
    }
}

impl Mass for BlackHole {
    fn coordinates(&self) -> DVec2 {
        self.coordinates
    }

    fn scale_coordinates(&mut self, factor: f64) -> Result<()> {
        check_scale_factor(factor)?;
        self.position = self.coordinates * factor;
        Ok(())
    }
}

impl Pickable for BlackHole {
    fn pick_color(&self) -> Option<PickColor> {
        self.pick_color
    }

    fn set_pick_color(&mut self, color: PickColor) {
        self.pick_color = Some(color);
    }
}
