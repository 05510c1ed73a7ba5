//! Static room geometry: boundary tiles and the platform set.
//!
//! Platforms are placed in two passes.  The staircase pass guarantees a
//! climbable path from floor to ceiling; the scatter pass sprinkles extra
//! platforms with bounded retries and simply gives up on slots it cannot fill.

use rand::Rng;
use tracing::debug;

use crate::entities::{Bounds, Platform, Rect, Surface, SurfaceKind};
use crate::geometry::platform_spacing_ok;

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const WALL_TILE_HEIGHT: f32 = 100.0;
pub const FLOOR_TILE_WIDTH: f32 = 100.0;

/// Platforms never start closer than this to the floor or ceiling.
pub const PLATFORM_EDGE_INSET_Y: f32 = 100.0;
/// Horizontal inset for any platform centre.
pub const PLATFORM_EDGE_INSET_X: f32 = 50.0;
/// Horizontal inset for the first staircase step.
pub const STAIR_START_INSET_X: f32 = 100.0;
pub const STAIR_STEP_Y: f32 = 120.0;
pub const STAIR_MAX_X_OFFSET: f32 = 150.0;

pub const SCATTER_SLOTS: usize = 40;
pub const SCATTER_ATTEMPTS: usize = 20;

// ── Boundaries ────────────────────────────────────────────────────────────────

/// Boundary tiles.  `walls` holds both side walls and the floor strip.
#[derive(Clone, Debug, Default)]
pub struct Boundaries {
    pub walls: Vec<Surface>,
    pub ceilings: Vec<Surface>,
}

/// Splits `span` into `ceil(span / tile)` pieces starting at `start`.
/// Yields `(centre, extent)`; the last piece is shortened to fit.
fn tile_strip(start: f32, span: f32, tile: f32) -> impl Iterator<Item = (f32, f32)> {
    let count = (span / tile).ceil() as usize;
    (0..count).map(move |i| {
        let offset = i as f32 * tile;
        let extent = tile.min(span - offset);
        (start + offset + extent / 2.0, extent)
    })
}

/// Tiles the two side walls, the floor and the ceiling around `bounds`.
/// Every strip extends `wall_thickness` past the room corners.
pub fn build_boundaries(bounds: &Bounds, wall_thickness: f32) -> Boundaries {
    let t = wall_thickness;
    let mut walls = Vec::new();
    let mut ceilings = Vec::new();

    let vertical_span = bounds.height() + 2.0 * t;
    for wall_x in [bounds.left - t / 2.0, bounds.right + t / 2.0] {
        for (y, height) in tile_strip(bounds.bottom - t, vertical_span, WALL_TILE_HEIGHT) {
            walls.push(Surface {
                rect: Rect::new(wall_x, y, t, height),
                kind: SurfaceKind::Wall,
            });
        }
    }

    let horizontal_span = bounds.width() + 2.0 * t;
    for (x, width) in tile_strip(bounds.left - t, horizontal_span, FLOOR_TILE_WIDTH) {
        walls.push(Surface {
            rect: Rect::new(x, bounds.bottom - t / 2.0, width, t),
            kind: SurfaceKind::Floor,
        });
        ceilings.push(Surface {
            rect: Rect::new(x, bounds.top + t / 2.0, width, t),
            kind: SurfaceKind::Ceiling,
        });
    }

    Boundaries { walls, ceilings }
}

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Staircase followed by scatter.  Same `rng` state, same layout.
pub fn generate_platforms(bounds: &Bounds, rng: &mut impl Rng) -> Vec<Platform> {
    let mut platforms = staircase(bounds, rng);
    let stairs = platforms.len();
    let placed = scatter(bounds, &mut platforms, rng);
    debug!(stairs, placed, skipped = SCATTER_SLOTS - placed, "platforms generated");
    platforms
}

/// One platform per `STAIR_STEP_Y`, each drifting at most
/// `STAIR_MAX_X_OFFSET` sideways from the last.  No spacing check.
pub fn staircase(bounds: &Bounds, rng: &mut impl Rng) -> Vec<Platform> {
    let start_y = bounds.bottom + PLATFORM_EDGE_INSET_Y;
    let end_y = bounds.top - PLATFORM_EDGE_INSET_Y;
    let min_x = bounds.left + PLATFORM_EDGE_INSET_X;
    let max_x = bounds.right - PLATFORM_EDGE_INSET_X;

    let first_x =
        rng.gen_range(bounds.left + STAIR_START_INSET_X..=bounds.right - STAIR_START_INSET_X);
    let mut platforms = vec![Platform::new(first_x, start_y)];

    // Step count is fixed up front so the loop ends even where adding a
    // step no longer changes an f32.
    let steps = ((end_y - start_y) / STAIR_STEP_Y).floor() as usize;
    let mut last_x = first_x;
    for i in 1..=steps {
        let y = start_y + i as f32 * STAIR_STEP_Y;
        let offset = rng.gen_range(-STAIR_MAX_X_OFFSET..=STAIR_MAX_X_OFFSET);
        let x = (last_x + offset).max(min_x).min(max_x);
        platforms.push(Platform::new(x, y));
        last_x = x;
    }
    platforms
}

/// Tries to add `SCATTER_SLOTS` platforms, `SCATTER_ATTEMPTS` draws each.
/// Returns how many were placed.
pub fn scatter(bounds: &Bounds, platforms: &mut Vec<Platform>, rng: &mut impl Rng) -> usize {
    let x_range = bounds.left + PLATFORM_EDGE_INSET_X..=bounds.right - PLATFORM_EDGE_INSET_X;
    let y_range = bounds.bottom + PLATFORM_EDGE_INSET_Y..=bounds.top - PLATFORM_EDGE_INSET_Y;

    let mut placed = 0;
    for slot in 0..SCATTER_SLOTS {
        let candidate = (0..SCATTER_ATTEMPTS).find_map(|_| {
            let x = rng.gen_range(x_range.clone());
            let y = rng.gen_range(y_range.clone());
            platforms
                .iter()
                .all(|p| platform_spacing_ok((p.x, p.y), (x, y)))
                .then_some((x, y))
        });

        match candidate {
            Some((x, y)) => {
                platforms.push(Platform::new(x, y));
                placed += 1;
            }
            None => debug!(slot, "scatter slot skipped after {SCATTER_ATTEMPTS} attempts"),
        }
    }
    placed
}
