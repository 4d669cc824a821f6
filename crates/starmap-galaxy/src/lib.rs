//! Procedural galaxy star map: dispersed named and background stars, black
//! holes, multi-lobed nebulae, wormholes, and the validated composite that
//! ties them together with bounds, flattened vertex data and color picking.

pub mod black_hole;
pub mod dispersion;
pub mod error;
pub mod galaxy;
pub mod generator;
pub mod lobe;
pub mod mass;
pub mod nebula;
pub mod palette;
pub mod picking;
pub mod snapshot;
pub mod star;
pub mod worm_hole;

pub use black_hole::{BLACK_HOLE_ANIMATION, BLACK_HOLE_FRAMES, BlackHole, BlackHoleAnimation};
pub use dispersion::{Region, disperse_around, random_dispersed_coordinates};
pub use error::{ErrorKind, GalaxyError, Result};
pub use galaxy::{
    BoundingBox, Galaxy, GalaxyParts, MIN_BACKGROUND_STARS, MIN_NAMED_STARS, Picked,
};
pub use generator::{
    GalaxyRecipe, STAR_NAMES, generate_background_stars, generate_black_holes, generate_galaxy,
    generate_named_stars, generate_worm_holes,
};
pub use lobe::{Lobe, LobeSpec, LobeSprite};
pub use mass::{GALAXY_LIMIT, MIN_MASS_DISTANCE, Mass, Pickable};
pub use nebula::{MIN_NEBULA_DISTANCE, Nebula, generate_nebulae};
pub use palette::{PrimaryColor, STAR_COLORS, SecondaryColor, star_color};
pub use picking::{PickAllocator, PickColor, PickTarget};
pub use snapshot::CURRENT_SNAPSHOT_VERSION;
pub use star::{BackgroundStar, ForegroundStar};
pub use worm_hole::WormHole;
