//! Wormholes linking pairs of named stars.

use serde::{Deserialize, Serialize};

use crate::mass::Pickable;
use crate::picking::PickColor;

/// A link between two named stars, by index into the galaxy's named stars.
///
/// Whether the indices exist and are used only once is checked when the
/// galaxy is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormHole {
    star_a: usize,
    star_b: usize,
    pick_color: Option<PickColor>,
}

impl WormHole {
    /// Link star `star_a` to star `star_b`.
    pub fn new(star_a: usize, star_b: usize) -> Self {
        Self {
            star_a,
            star_b,
            pick_color: None,
        }
    }

    /// First endpoint.
    pub fn star_a(&self) -> usize {
        self.star_a
    }

    /// Second endpoint.
    pub fn star_b(&self) -> usize {
        self.star_b
    }

    /// Both endpoints.
    pub fn endpoints(&self) -> [usize; 2] {
        [self.star_a, self.star_b]
    }
}

impl From<(usize, usize)> for WormHole {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl Pickable for WormHole {
    fn pick_color(&self) -> Option<PickColor> {
        self.pick_color
    }

    fn set_pick_color(&mut self, color: PickColor) {
        self.pick_color = Some(color);
    }
}
