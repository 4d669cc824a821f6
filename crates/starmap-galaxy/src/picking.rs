//! Color-buffer picking: unique RGB colors for clickable objects.
//!
//! Each pickable object is drawn into an off-screen buffer in its own flat
//! color; reading back the pixel under the cursor and looking it up in the
//! galaxy's `color_picks` map yields the object. Ids are handed out
//! sequentially from a 24-bit space and encoded as the bitwise complement
//! of the id, red channel lowest, so the first object is pure white and
//! the all-black background color is never issued.

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Number of distinct 24-bit values.
const COLOR_SPACE: u32 = 1 << 24;

/// Id whose color is `(0, 0, 0)`, kept for the cleared background.
const RESERVED_BACKGROUND_ID: u32 = COLOR_SPACE - 1;

/// A unique picking color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickColor(pub [u8; 3]);

impl PickColor {
    /// Encode a sequential pick id.
    pub fn from_id(id: u32) -> Self {
        let inverted = !id & 0x00FF_FFFF;
        Self([
            (inverted & 0xFF) as u8,
            ((inverted >> 8) & 0xFF) as u8,
            ((inverted >> 16) & 0xFF) as u8,
        ])
    }

    /// Recover the sequential id from a color read back from the buffer.
    pub fn id(self) -> u32 {
        let [r, g, b] = self.0;
        let packed = u32::from(r) | (u32::from(g) << 8) | (u32::from(b) << 16);
        !packed & 0x00FF_FFFF
    }

    /// Color as normalized floats for shader uniforms.
    pub fn to_f32(self) -> [f32; 3] {
        self.0.map(|c| f32::from(c) / 255.0)
    }

    /// True for the cleared background color, which never maps to an object.
    pub fn is_background(self) -> bool {
        self.0 == [0, 0, 0]
    }
}

/// Which object a pick color belongs to, by index into the galaxy's lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickTarget {
    /// Index into `named_stars`.
    NamedStar(usize),
    /// Index into `worm_holes`.
    WormHole(usize),
    /// Index into `black_holes`.
    BlackHole(usize),
}

/// Hands out pick colors in increasing id order.
#[derive(Debug, Clone)]
pub struct PickAllocator {
    next: u32,
    limit: u32,
}

impl Default for PickAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PickAllocator {
    /// Allocator over the whole 24-bit space minus the background color.
    pub fn new() -> Self {
        Self {
            next: 0,
            limit: RESERVED_BACKGROUND_ID,
        }
    }

    /// Allocator that refuses to issue more than `capacity` colors.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            next: 0,
            limit: capacity.min(RESERVED_BACKGROUND_ID),
        }
    }

    /// Number of colors issued so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }

    /// Issue the next color.
    ///
    /// # Errors
    ///
    /// Returns [`GalaxyError::PickColorsExhausted`] once the id space is used up.
    pub fn allocate(&mut self) -> Result<PickColor> {
        if self.next >= self.limit {
            return Err(GalaxyError::PickColorsExhausted {
                allocated: self.next,
            });
        }
        let color = PickColor::from_id(self.next);
        self.next += 1;
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_colors_count_down_red() {
        let mut alloc = PickAllocator::new();
        assert_eq!(alloc.allocate().unwrap(), PickColor([255, 255, 255]));
        assert_eq!(alloc.allocate().unwrap(), PickColor([254, 255, 255]));
        assert_eq!(alloc.allocate().unwrap(), PickColor([253, 255, 255]));
    }

    #[test]
    fn test_red_channel_carries_into_green() {
        assert_eq!(PickColor::from_id(255), PickColor([0, 255, 255]));
        assert_eq!(PickColor::from_id(256), PickColor([255, 254, 255]));
    }

    #[test]
    fn test_id_inverts_from_id() {
        for id in [0, 1, 255, 256, 65_535, 1_000_000, RESERVED_BACKGROUND_ID - 1] {
            assert_eq!(PickColor::from_id(id).id(), id);
        }
    }

    #[test]
    fn test_background_is_never_issued() {
        assert!(PickColor::from_id(RESERVED_BACKGROUND_ID).is_background());
        let mut alloc = PickAllocator::new();
        alloc.next = RESERVED_BACKGROUND_ID - 1;
        let last = alloc.allocate().unwrap();
        assert!(!last.is_background());
        assert!(matches!(
            alloc.allocate(),
            Err(GalaxyError::PickColorsExhausted { .. })
        ));
    }

    #[test]
    fn test_capacity_limit() {
        let mut alloc = PickAllocator::with_capacity(2);
        alloc.allocate().unwrap();
        alloc.allocate().unwrap();
        let err = alloc.allocate().unwrap_err();
        assert!(matches!(err, GalaxyError::PickColorsExhausted { allocated: 2 }));
        assert_eq!(alloc.allocated(), 2);
    }

    #[test]
    fn test_to_f32() {
        assert_eq!(PickColor([255, 0, 51]).to_f32(), [1.0, 0.0, 0.2]);
    }
}
