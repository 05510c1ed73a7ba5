//! Enemy spawning and per-tick patrol / shooting.

use rand::Rng;
use tracing::{debug, trace};

use crate::entities::{Axis, Bounds, Bullet, Enemy, Mount, Patrol, Platform};
use crate::geometry::{distance, too_close, unit_direction};

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const ENEMY_SPEED: f32 = 1.5;
pub const SHOOT_COOLDOWN: f32 = 2.0;
pub const SHOOT_RANGE: f32 = 400.0;
pub const ENEMY_BULLET_SPEED: f32 = 4.0;

pub const MIN_ENEMIES: usize = 12;
pub const MAX_ENEMIES: usize = 25;
pub const SHOOTER_CHANCE: f64 = 0.6;

/// Distance from the wall/ceiling line an enemy spawns at.
pub const MOUNT_INSET: f32 = 25.0;
/// Spawn coordinates along the patrol axis keep this far from the corners.
pub const SPAWN_EDGE_INSET: f32 = 100.0;
pub const PLATFORM_CLEARANCE: f32 = 80.0;
pub const ENEMY_CLEARANCE: f32 = 60.0;
pub const PATROL_HALF_WIDTH_MIN: u32 = 80;
pub const PATROL_HALF_WIDTH_MAX: u32 = 150;

/// Enemies are clamped this far inside the room every tick.
pub const ROOM_MARGIN: f32 = 30.0;

/// Where a shot goes when the target sits exactly on the shooter.
const FALLBACK_AIM: (f32, f32) = (1.0, 0.0);

// ── Construction ──────────────────────────────────────────────────────────────

impl Enemy {
    /// Builds a patroller on `mount`, oscillating `half_width` units either
    /// side of its spawn point.  `direction` is the initial sign (+1 / -1).
    pub fn new(x: f32, y: f32, mount: Mount, is_shooter: bool, direction: f32, half_width: f32) -> Self {
        let speed = ENEMY_SPEED;
        let (patrol, change_x, change_y) = match mount {
            Mount::Ceiling => (
                Patrol {
                    axis: Axis::Horizontal,
                    min: x - half_width,
                    max: x + half_width,
                },
                speed * direction,
                0.0,
            ),
            Mount::LeftWall | Mount::RightWall => (
                Patrol {
                    axis: Axis::Vertical,
                    min: y - half_width,
                    max: y + half_width,
                },
                0.0,
                speed * direction,
            ),
        };

        Enemy {
            x,
            y,
            change_x,
            change_y,
            speed,
            direction,
            is_shooter,
            mount,
            patrol,
            on_wall: mount != Mount::Ceiling,
            on_ceiling: mount == Mount::Ceiling,
            shoot_timer: 0.0,
            shoot_cooldown: SHOOT_COOLDOWN,
            shoot_range: SHOOT_RANGE,
            bullet_speed: ENEMY_BULLET_SPEED,
        }
    }

    /// Moves one tick, bouncing at the patrol bounds, then clamps into `arena`.
    pub fn advance(&mut self, arena: &Bounds) {
        self.x += self.change_x;
        self.y += self.change_y;

        if self.change_x != 0.0 && self.patrol.axis == Axis::Horizontal && self.at_patrol_edge(self.x) {
            self.direction = -self.direction;
            self.change_x = self.speed * self.direction;
        }
        if self.change_y != 0.0 && self.patrol.axis == Axis::Vertical && self.at_patrol_edge(self.y) {
            self.direction = -self.direction;
            self.change_y = self.speed * self.direction;
        }

        (self.x, self.y) = arena.clamp(self.x, self.y);
    }

    fn at_patrol_edge(&self, coord: f32) -> bool {
        coord >= self.patrol.max || coord <= self.patrol.min
    }

    /// Ticks the cooldown; true (and the timer resets) when a shot is due.
    pub fn ready_to_fire(&mut self, dt: f32, target: (f32, f32)) -> bool {
        if !self.is_shooter {
            return false;
        }
        self.shoot_timer += dt;
        let in_range = distance((self.x, self.y), target) <= self.shoot_range;
        if in_range && self.shoot_timer >= self.shoot_cooldown {
            self.shoot_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Unit vector toward `target`; points right when they coincide.
    pub fn aim_direction(&self, target: (f32, f32)) -> (f32, f32) {
        unit_direction((self.x, self.y), target).unwrap_or(FALLBACK_AIM)
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

fn pick_mount(rng: &mut impl Rng) -> Mount {
    match rng.gen_range(0..3) {
        0 => Mount::LeftWall,
        1 => Mount::RightWall,
        _ => Mount::Ceiling,
    }
}

/// Rolls 12..=25 candidates and keeps the ones clear of platforms and of
/// earlier enemies.  Rejected candidates are dropped, not retried.
pub fn spawn_enemies(bounds: &Bounds, platforms: &[Platform], rng: &mut impl Rng) -> Vec<Enemy> {
    let candidates = rng.gen_range(MIN_ENEMIES..=MAX_ENEMIES);
    let mut enemies: Vec<Enemy> = Vec::with_capacity(candidates);

    for _ in 0..candidates {
        let mount = pick_mount(rng);
        let is_shooter = rng.gen_bool(SHOOTER_CHANCE);

        let (x, y) = match mount {
            Mount::LeftWall => (
                bounds.left + MOUNT_INSET,
                rng.gen_range(bounds.bottom + SPAWN_EDGE_INSET..=bounds.top - SPAWN_EDGE_INSET),
            ),
            Mount::RightWall => (
                bounds.right - MOUNT_INSET,
                rng.gen_range(bounds.bottom + SPAWN_EDGE_INSET..=bounds.top - SPAWN_EDGE_INSET),
            ),
            Mount::Ceiling => (
                rng.gen_range(bounds.left + SPAWN_EDGE_INSET..=bounds.right - SPAWN_EDGE_INSET),
                bounds.top - MOUNT_INSET,
            ),
        };

        let near_platform = platforms
            .iter()
            .any(|p| too_close((p.x, p.y), (x, y), PLATFORM_CLEARANCE, PLATFORM_CLEARANCE));
        let near_enemy = enemies
            .iter()
            .any(|e| too_close((e.x, e.y), (x, y), ENEMY_CLEARANCE, ENEMY_CLEARANCE));
        if near_platform || near_enemy {
            debug!(?mount, x, y, near_platform, near_enemy, "enemy candidate rejected");
            continue;
        }

        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let half_width = rng.gen_range(PATROL_HALF_WIDTH_MIN..=PATROL_HALF_WIDTH_MAX) as f32;
        let mut enemy = Enemy::new(x, y, mount, is_shooter, direction, half_width);
        // Stagger the first volley.
        enemy.shoot_timer = rng.gen_range(0.0..SHOOT_COOLDOWN);
        enemies.push(enemy);
    }

    debug!(candidates, spawned = enemies.len(), "enemies spawned");
    enemies
}

// ── Per-tick update ───────────────────────────────────────────────────────────

/// Moves every enemy, then lets shooters fire at `player`.  New bullets are
/// appended to `fired`; nothing already in flight is touched.
pub fn update_enemies(
    enemies: &mut [Enemy],
    bounds: &Bounds,
    dt: f32,
    player: (f32, f32),
    fired: &mut Vec<Bullet>,
) {
    let arena = bounds.inset(ROOM_MARGIN);
    for enemy in enemies.iter_mut() {
        enemy.advance(&arena);

        if enemy.ready_to_fire(dt, player) {
            let dir = enemy.aim_direction(player);
            trace!(x = enemy.x, y = enemy.y, dx = dir.0, dy = dir.1, "enemy fired");
            fired.push(Bullet::with_direction(enemy.x, enemy.y, dir, enemy.bullet_speed));
        }
    }
}
