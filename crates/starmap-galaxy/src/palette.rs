//! Fixed color tables for nebula lobes and named stars.

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Color family shared by every lobe of one nebula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryColor {
    /// Red family.
    Red,
    /// Green family.
    Green,
    /// Blue family.
    Blue,
}

impl PrimaryColor {
    /// All primaries in cycling order.
    pub const ALL: [PrimaryColor; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Lowercase name as used in asset identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Parse a primary color name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| GalaxyError::UnknownColor {
                table: "nebula primary",
                name: name.to_string(),
            })
    }

    /// The two secondary colors a lobe of this family may blend toward.
    pub fn secondaries(self) -> [SecondaryColor; 2] {
        match self {
            Self::Red => [SecondaryColor::Pink, SecondaryColor::Yellow],
            Self::Green => [SecondaryColor::Cyan, SecondaryColor::Yellow],
            Self::Blue => [SecondaryColor::Cyan, SecondaryColor::Pink],
        }
    }

    fn table_index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Accent color of a single lobe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryColor {
    /// Pink accent.
    Pink,
    /// Yellow accent.
    Yellow,
    /// Cyan accent.
    Cyan,
}

impl SecondaryColor {
    /// Lowercase name as used in asset identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
        }
    }
}

/// Image file for every (primary, secondary slot, variant) combination.
///
/// Indexed `[primary][secondary_index][variant - 1]`.
const LOBE_IMAGE_FILES: [[[&str; 2]; 2]; 3] = [
    [
        ["red_pink_nebula_1.png", "red_pink_nebula_2.png"],
        ["red_yellow_nebula_1.png", "red_yellow_nebula_2.png"],
    ],
    [
        ["green_cyan_nebula_1.png", "green_cyan_nebula_2.png"],
        ["green_yellow_nebula_1.png", "green_yellow_nebula_2.png"],
    ],
    [
        ["blue_cyan_nebula_1.png", "blue_cyan_nebula_2.png"],
        ["blue_pink_nebula_1.png", "blue_pink_nebula_2.png"],
    ],
];

/// Look up the lobe image for a validated combination.
///
/// `secondary_index` must be 0 or 1 and `variant` 1 or 2; lobe construction
/// enforces both.
pub(crate) fn lobe_image_file(primary: PrimaryColor, secondary_index: u8, variant: u8) -> &'static str {
    LOBE_IMAGE_FILES[primary.table_index()][usize::from(secondary_index)][usize::from(variant - 1)]
}

/// Named colors a foreground star may be drawn in.
pub const STAR_COLORS: [(&str, [u8; 3]); 5] = [
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("red", [255, 64, 64]),
    ("blue", [128, 160, 255]),
];

/// Color used when a star is created without one.
pub const DEFAULT_STAR_COLOR: &str = "white";

/// Resolve a star color name to its canonical name and RGB value.
pub fn star_color(name: &str) -> Result<(&'static str, [u8; 3])> {
    STAR_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .copied()
        .ok_or_else(|| GalaxyError::UnknownColor {
            table: "star",
            name: name.to_string(),
        })
}
