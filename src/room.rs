//! The room facade: owns every per-room collection and drives one tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, trace};

use crate::config::RoomConfig;
use crate::enemies::{spawn_enemies, update_enemies};
use crate::entities::{
    Bounds, Bullet, BulletId, Collidable, DrawItem, Drawable, Enemy, Platform, Rect, Surface,
};
use crate::error::RoomResult;
use crate::geometry::rects_overlap;
use crate::layout::{build_boundaries, generate_platforms};
use crate::projectiles::update_bullets;

/// Inset used by [`Room::random_position`].
pub const RANDOM_POSITION_INSET: f32 = 50.0;

/// What one call to [`Room::update`] changed in the bullet set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub fired: Vec<BulletId>,
    pub removed: Vec<BulletId>,
}

#[derive(Debug)]
pub struct Room {
    config: RoomConfig,
    bounds: Bounds,
    walls: Vec<Surface>,
    ceilings: Vec<Surface>,
    platforms: Vec<Platform>,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    /// Walls, ceilings and platforms, frozen at construction.
    obstacles: Vec<Rect>,
    next_bullet_id: u64,
    rng: StdRng,
}

impl Room {
    /// Builds boundaries, then platforms, then enemies, all from `rng`.
    pub fn new(config: RoomConfig, mut rng: StdRng) -> RoomResult<Self> {
        config.validate()?;
        let bounds = config.bounds();

        let boundaries = build_boundaries(&bounds, config.wall_thickness);
        let platforms = generate_platforms(&bounds, &mut rng);
        let enemies = spawn_enemies(&bounds, &platforms, &mut rng);

        let obstacles: Vec<Rect> = boundaries
            .walls
            .iter()
            .chain(&boundaries.ceilings)
            .map(Collidable::hitbox)
            .chain(platforms.iter().map(Collidable::hitbox))
            .collect();

        info!(
            walls = boundaries.walls.len(),
            ceilings = boundaries.ceilings.len(),
            platforms = platforms.len(),
            enemies = enemies.len(),
            shooters = enemies.iter().filter(|e| e.is_shooter).count(),
            "room generated"
        );

        Ok(Room {
            config,
            bounds,
            walls: boundaries.walls,
            ceilings: boundaries.ceilings,
            platforms,
            enemies,
            bullets: Vec::new(),
            obstacles,
            next_bullet_id: 1,
            rng,
        })
    }

    /// Reproducible room: the same seed and config give the same layout.
    pub fn with_seed(config: RoomConfig, seed: u64) -> RoomResult<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: RoomConfig) -> RoomResult<Self> {
        Self::new(config, StdRng::from_entropy())
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advances enemies (motion, bounce, shooting), then bullets.  Bullets
    /// fired this tick are not moved until the next call.
    pub fn update(&mut self, dt: f32, player_x: f32, player_y: f32) -> TickReport {
        let mut fired = Vec::new();
        update_enemies(&mut self.enemies, &self.bounds, dt, (player_x, player_y), &mut fired);

        let removed = update_bullets(&mut self.bullets, &self.bounds);

        let fired = fired.into_iter().map(|b| self.adopt(b)).collect();
        TickReport { fired, removed }
    }

    /// Takes ownership of `bullet` and returns its handle.
    pub fn spawn_bullet(&mut self, bullet: Bullet) -> BulletId {
        self.adopt(bullet)
    }

    fn adopt(&mut self, mut bullet: Bullet) -> BulletId {
        let id = BulletId(self.next_bullet_id);
        self.next_bullet_id += 1;
        bullet.id = id;
        self.bullets.push(bullet);
        id
    }

    /// Drops a bullet the caller decided has hit something.  Meant to be
    /// called between ticks; false if the handle is already gone.
    pub fn remove_bullet(&mut self, id: BulletId) -> bool {
        match self.bullets.iter().position(|b| b.id == id) {
            Some(index) => {
                self.bullets.remove(index);
                trace!(?id, "bullet removed by caller");
                true
            }
            None => false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Handles of bullets whose hitbox overlaps `hitbox`.
    pub fn bullets_hitting(&self, hitbox: &Rect) -> Vec<BulletId> {
        self.bullets
            .iter()
            .filter(|b| rects_overlap(&b.hitbox(), hitbox))
            .map(|b| b.id)
            .collect()
    }

    pub fn enemy_touching(&self, hitbox: &Rect) -> bool {
        self.enemies.iter().any(|e| rects_overlap(&e.hitbox(), hitbox))
    }

    /// Static obstacle set for the physics engine; never changes.
    pub fn collision_surfaces(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Strict interior test, edges excluded.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds.contains_point(x, y)
    }

    /// Uniform point at least 50 units inside every edge.
    pub fn random_position(&mut self) -> (f32, f32) {
        let area = self.bounds.inset(RANDOM_POSITION_INSET);
        let x = self.rng.gen_range(area.left..=area.right);
        let y = self.rng.gen_range(area.bottom..=area.top);
        (x, y)
    }

    /// Back-to-front: walls, ceilings, platforms, enemies, bullets.
    pub fn draw(&self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(
            self.walls.len()
                + self.ceilings.len()
                + self.platforms.len()
                + self.enemies.len()
                + self.bullets.len(),
        );
        items.extend(self.walls.iter().map(Drawable::draw_item));
        items.extend(self.ceilings.iter().map(Drawable::draw_item));
        items.extend(self.platforms.iter().map(Drawable::draw_item));
        items.extend(self.enemies.iter().map(Drawable::draw_item));
        items.extend(self.bullets.iter().map(Drawable::draw_item));
        items
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn walls(&self) -> &[Surface] {
        &self.walls
    }

    pub fn ceilings(&self) -> &[Surface] {
        &self.ceilings
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }
}
