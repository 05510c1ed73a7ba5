//! Bullet creation, motion and expiry.

use tracing::trace;

use crate::entities::{Bounds, Bullet, BulletId};
use crate::geometry::unit_direction;

/// 3 s at 60 ticks per second.
pub const BULLET_LIFETIME: u32 = 180;
/// How far past the room edge a bullet may fly before it is dropped.
pub const BULLET_ESCAPE_MARGIN: f32 = 50.0;
pub const DEFAULT_BULLET_SPEED: f32 = 5.0;

impl Bullet {
    /// Aims from `(x, y)` at `(target_x, target_y)`.  A zero-length aim
    /// yields a stationary bullet.
    pub fn new(x: f32, y: f32, target_x: f32, target_y: f32, speed: f32) -> Self {
        let (change_x, change_y) = unit_direction((x, y), (target_x, target_y))
            .map_or((0.0, 0.0), |(ux, uy)| (ux * speed, uy * speed));
        Bullet {
            id: BulletId::UNASSIGNED,
            x,
            y,
            change_x,
            change_y,
            lifetime: BULLET_LIFETIME,
        }
    }

    /// Fires along an already normalised `dir`.
    pub fn with_direction(x: f32, y: f32, dir: (f32, f32), speed: f32) -> Self {
        Bullet {
            id: BulletId::UNASSIGNED,
            x,
            y,
            change_x: dir.0 * speed,
            change_y: dir.1 * speed,
            lifetime: BULLET_LIFETIME,
        }
    }

    /// Moves one tick and burns one tick of lifetime.  Returns true once the
    /// lifetime is spent.
    pub fn advance(&mut self) -> bool {
        self.x += self.change_x;
        self.y += self.change_y;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime == 0
    }

    pub fn escaped(&self, bounds: &Bounds) -> bool {
        let limit = bounds.inset(-BULLET_ESCAPE_MARGIN);
        self.x < limit.left || self.x > limit.right || self.y < limit.bottom || self.y > limit.top
    }
}

/// Advances every bullet, then drops the expired and escaped ones in a
/// second pass.  Returns the ids of removed bullets in collection order.
pub fn update_bullets(bullets: &mut Vec<Bullet>, bounds: &Bounds) -> Vec<BulletId> {
    let mut doomed: Vec<usize> = Vec::new();
    for (i, bullet) in bullets.iter_mut().enumerate() {
        let spent = bullet.advance();
        if spent || bullet.escaped(bounds) {
            doomed.push(i);
        }
    }

    let removed: Vec<BulletId> = doomed.iter().map(|&i| bullets[i].id).collect();
    for &i in doomed.iter().rev() {
        bullets.remove(i);
    }

    if !removed.is_empty() {
        trace!(count = removed.len(), remaining = bullets.len(), "bullets removed");
    }
    removed
}
