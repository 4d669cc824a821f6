//! The galaxy composite: validated object collections plus the derived data
//! the renderer and the picking pass need.

use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::black_hole::BlackHole;
use crate::error::{GalaxyError, Result};
use crate::mass::{MIN_MASS_DISTANCE, Mass, Pickable, check_scale_factor};
use crate::nebula::{Nebula, check_nebula_separation};
use crate::picking::{PickAllocator, PickColor, PickTarget};
use crate::star::{BackgroundStar, ForegroundStar};
use crate::worm_hole::WormHole;

/// Fewest named stars a galaxy may have.
pub const MIN_NAMED_STARS: usize = 3;

/// Fewest background stars a galaxy may have.
pub const MIN_BACKGROUND_STARS: usize = 2;

/// Raw object lists handed to [`Galaxy::new`].
///
/// Black holes, nebulae and wormholes are optional and default to empty.
#[derive(Clone, Debug, Default)]
pub struct GalaxyParts {
    /// Pickable named stars.
    pub named_stars: Vec<ForegroundStar>,
    /// Decorative stars.
    pub background_stars: Vec<BackgroundStar>,
    /// Black holes.
    pub black_holes: Vec<BlackHole>,
    /// Nebulae.
    pub nebulae: Vec<Nebula>,
    /// Wormholes between named stars.
    pub worm_holes: Vec<WormHole>,
}

/// Origin-centred extent of the map, half the span of the placed objects on
/// each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Negative half width.
    pub left: f64,
    /// Positive half width.
    pub right: f64,
    /// Positive half height.
    pub top: f64,
    /// Negative half height.
    pub bottom: f64,
}

impl BoundingBox {
    fn from_extremes(min: DVec2, max: DVec2) -> Self {
        let half = (max - min) / 2.0;
        Self {
            left: -half.x,
            right: half.x,
            top: half.y,
            bottom: -half.y,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// An object resolved from a pick color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Picked<'a> {
    /// A named star.
    NamedStar(&'a ForegroundStar),
    /// A wormhole.
    WormHole(&'a WormHole),
    /// A black hole.
    BlackHole(&'a BlackHole),
}

/// A complete, validated star map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    named_stars: Vec<ForegroundStar>,
    background_stars: Vec<BackgroundStar>,
    black_holes: Vec<BlackHole>,
    nebulae: Vec<Nebula>,
    worm_holes: Vec<WormHole>,
    bounds: BoundingBox,
    min_coords: DVec2,
    max_coords: DVec2,
    background_star_vertices: Vec<f32>,
    background_star_colors: Vec<u8>,
    min_distance: f64,
    max_distance: f64,
    color_picks: HashMap<PickColor, PickTarget>,
}

impl Galaxy {
    /// Validate `parts` and derive bounds, render arrays, distance statistics
    /// and the picking index.
    ///
    /// Checks run in this order, stopping at the first failure:
    /// 1. population ([`GalaxyError::MissingData`]),
    /// 2. star and black hole separation ([`GalaxyError::TooClose`]),
    /// 3. nebula separation ([`GalaxyError::NebulaeTooClose`]),
    /// 4. wormhole endpoints ([`GalaxyError::WormHoleIndex`],
    ///    [`GalaxyError::SelfLinkedWormHole`],
    ///    [`GalaxyError::DuplicateWormHoleStar`]).
    pub fn new(parts: GalaxyParts) -> Result<Self> {
        let GalaxyParts {
            mut named_stars,
            background_stars,
            mut black_holes,
            nebulae,
            mut worm_holes,
        } = parts;

        check_population("named stars", named_stars.len(), MIN_NAMED_STARS)?;
        check_population(
            "background stars",
            background_stars.len(),
            MIN_BACKGROUND_STARS,
        )?;

        let point_masses: Vec<DVec2> = named_stars
            .iter()
            .map(Mass::coordinates)
            .chain(black_holes.iter().map(Mass::coordinates))
            .collect();
        check_mass_separation(&point_masses)?;
        check_nebula_separation(&nebulae)?;
        check_worm_holes(&worm_holes, named_stars.len())?;

        let (min_coords, max_coords) = extremes(
            point_masses
                .iter()
                .copied()
                .chain(nebulae.iter().map(Mass::coordinates)),
        );
        let (min_distance, max_distance) = distance_range(&point_masses);

        let background_star_vertices = background_stars
            .iter()
            .flat_map(|s| {
                let c = s.coordinates();
                [c.x as f32, c.y as f32, 0.0]
            })
            .collect();
        let background_star_colors = background_stars.iter().flat_map(|s| s.color()).collect();

        let mut allocator = PickAllocator::new();
        let mut color_picks = HashMap::new();
        assign_picks(
            &mut named_stars,
            &mut allocator,
            &mut color_picks,
            PickTarget::NamedStar,
        )?;
        assign_picks(
            &mut worm_holes,
            &mut allocator,
            &mut color_picks,
            PickTarget::WormHole,
        )?;
        assign_picks(
            &mut black_holes,
            &mut allocator,
            &mut color_picks,
            PickTarget::BlackHole,
        )?;

        log::info!(
            "galaxy built: {} named stars, {} background stars, {} black holes, {} nebulae, {} wormholes",
            named_stars.len(),
            background_stars.len(),
            black_holes.len(),
            nebulae.len(),
            worm_holes.len()
        );

        Ok(Self {
            named_stars,
            background_stars,
            black_holes,
            nebulae,
            worm_holes,
            bounds: BoundingBox::from_extremes(min_coords, max_coords),
            min_coords,
            max_coords,
            background_star_vertices,
            background_star_colors,
            min_distance,
            max_distance,
            color_picks,
        })
    }

    /// Named stars in input order.
    pub fn named_stars(&self) -> &[ForegroundStar] {
        &self.named_stars
    }

    /// Background stars in input order.
    pub fn background_stars(&self) -> &[BackgroundStar] {
        &self.background_stars
    }

    /// Black holes in input order.
    pub fn black_holes(&self) -> &[BlackHole] {
        &self.black_holes
    }

    /// Nebulae in input order.
    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    /// Wormholes in input order.
    pub fn worm_holes(&self) -> &[WormHole] {
        &self.worm_holes
    }

    /// Origin-centred map extent.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Smallest x and y over stars, black holes and nebula centers.
    pub fn min_coords(&self) -> DVec2 {
        self.min_coords
    }

    /// Largest x and y over stars, black holes and nebula centers.
    pub fn max_coords(&self) -> DVec2 {
        self.max_coords
    }

    /// `x, y, 0` per background star, in input order.
    ///
    /// This is `f32` vertex data for the GPU; world coordinates are narrowed
    /// from `f64`, so use [`background_stars`](Self::background_stars) where
    /// full precision matters.
    pub fn background_star_vertices(&self) -> &[f32] {
        &self.background_star_vertices
    }

    /// `r, g, b` per background star, in input order.
    pub fn background_star_colors(&self) -> &[u8] {
        &self.background_star_colors
    }

    /// Shortest distance between two named stars or black holes.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Longest distance between two named stars or black holes.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Pick color → object index map.
    pub fn color_picks(&self) -> &HashMap<PickColor, PickTarget> {
        &self.color_picks
    }

    /// Resolve a color read back from the picking buffer.
    pub fn pick(&self, color: PickColor) -> Option<Picked<'_>> {
        match *self.color_picks.get(&color)? {
            PickTarget::NamedStar(i) => self.named_stars.get(i).map(Picked::NamedStar),
            PickTarget::WormHole(i) => self.worm_holes.get(i).map(Picked::WormHole),
            PickTarget::BlackHole(i) => self.black_holes.get(i).map(Picked::BlackHole),
        }
    }

    /// Show the marker of named star `index`. Returns `false` if there is no
    /// such star.
    pub fn reveal_marker(&mut self, index: usize) -> bool {
        self.named_stars
            .get_mut(index)
            .map(ForegroundStar::reveal_marker)
            .is_some()
    }

    /// Hide the marker of named star `index`. Returns `false` if there is no
    /// such star.
    pub fn hide_marker(&mut self, index: usize) -> bool {
        self.named_stars
            .get_mut(index)
            .map(ForegroundStar::hide_marker)
            .is_some()
    }

    /// Hide every marker.
    pub fn hide_all_markers(&mut self) {
        self.named_stars
            .iter_mut()
            .for_each(ForegroundStar::hide_marker);
    }

    /// Rescale the presentation geometry of every object. World coordinates,
    /// bounds and picks are unaffected.
    pub fn scale_coordinates(&mut self, factor: f64) -> Result<()> {
        check_scale_factor(factor)?;
        for star in &mut self.named_stars {
            star.scale_coordinates(factor)?;
        }
        for star in &mut self.background_stars {
            star.scale_coordinates(factor)?;
        }
        for black_hole in &mut self.black_holes {
            black_hole.scale_coordinates(factor)?;
        }
        for nebula in &mut self.nebulae {
            nebula.scale_coordinates_and_size(factor)?;
        }
        Ok(())
    }
}

fn check_population(what: &'static str, count: usize, min: usize) -> Result<()> {
    if count < min {
        return Err(GalaxyError::MissingData { what, count, min });
    }
    Ok(())
}

fn check_mass_separation(points: &[DVec2]) -> Result<()> {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let distance = a.distance(*b);
            if distance < MIN_MASS_DISTANCE {
                return Err(GalaxyError::TooClose {
                    a: *a,
                    b: *b,
                    distance,
                    min: MIN_MASS_DISTANCE,
                });
            }
        }
    }
    Ok(())
}

fn check_worm_holes(worm_holes: &[WormHole], star_count: usize) -> Result<()> {
    let mut used_by: Vec<Option<usize>> = vec![None; star_count];
    for (w, worm_hole) in worm_holes.iter().enumerate() {
        for star in worm_hole.endpoints() {
            if star >= star_count {
                return Err(GalaxyError::WormHoleIndex {
                    worm_hole: w,
                    index: star,
                    star_count,
                });
            }
        }
        if worm_hole.star_a() == worm_hole.star_b() {
            return Err(GalaxyError::SelfLinkedWormHole {
                worm_hole: w,
                star: worm_hole.star_a(),
            });
        }
        for star in worm_hole.endpoints() {
            if let Some(first) = used_by[star] {
                return Err(GalaxyError::DuplicateWormHoleStar {
                    star,
                    first,
                    second: w,
                });
            }
            used_by[star] = Some(w);
        }
    }
    Ok(())
}

fn extremes(points: impl Iterator<Item = DVec2>) -> (DVec2, DVec2) {
    points.fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(p), max.max(p)),
    )
}

fn distance_range(points: &[DVec2]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = 0.0_f64;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance(*b);
            min = min.min(d);
            max = max.max(d);
        }
    }
    (min, max)
}

fn assign_picks<T: Pickable>(
    items: &mut [T],
    allocator: &mut PickAllocator,
    picks: &mut HashMap<PickColor, PickTarget>,
    target: fn(usize) -> PickTarget,
) -> Result<()> {
    for (i, item) in items.iter_mut().enumerate() {
        let color = allocator.allocate()?;
        item.set_pick_color(color);
        picks.insert(color, target(i));
    }
    Ok(())
}
