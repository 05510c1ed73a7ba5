//! Outer-loop stand-ins for the collaborators the room does not own:
//! a kinematic player and a dead-zone camera.

use echo_of_the_void::entities::{Bounds, Collidable, Positioned, Rect};
use echo_of_the_void::geometry::rects_overlap;
use echo_of_the_void::Room;

pub const PLAYER_SIZE: f32 = 24.0;
pub const PLAYER_SPEED: f32 = 3.0;
pub const SPRINT_SPEED: f32 = 5.0;

/// Free-flying player that slides along obstacles.  Gravity and jumping
/// belong to a real platformer engine; this is only enough to explore.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

impl Positioned for Player {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for Player {
    fn size(&self) -> (f32, f32) {
        (PLAYER_SIZE, PLAYER_SIZE)
    }
}

impl Player {
    /// Standing on the first staircase step, or at the room centre.
    pub fn spawn(room: &Room) -> Self {
        let (x, y) = match room.platforms().first() {
            Some(p) => (p.x, p.y + p.height / 2.0 + PLAYER_SIZE / 2.0 + 1.0),
            None => (room.config().center_x, room.config().center_y),
        };
        Player { x, y, alive: true }
    }

    /// Moves each axis separately, undoing the step on that axis if it
    /// would enter an obstacle, then clamps inside the room.
    pub fn step(&mut self, dx: f32, dy: f32, obstacles: &[Rect], bounds: &Bounds) {
        if !self.alive {
            return;
        }
        let old_x = self.x;
        self.x += dx;
        if self.blocked(obstacles) {
            self.x = old_x;
        }
        let old_y = self.y;
        self.y += dy;
        if self.blocked(obstacles) {
            self.y = old_y;
        }
        let half = PLAYER_SIZE / 2.0;
        (self.x, self.y) = bounds.inset(half).clamp(self.x, self.y);
    }

    fn blocked(&self, obstacles: &[Rect]) -> bool {
        let hitbox = self.hitbox();
        obstacles.iter().any(|o| rects_overlap(o, &hitbox))
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

const DEAD_X: f32 = 200.0;
const DEAD_Y: f32 = 120.0;

/// Centre of the visible world window.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    /// Scrolls only when `target` leaves the dead zone, then keeps the view
    /// inside `limits` (centred when the view is wider than the limits).
    pub fn follow(&mut self, target: (f32, f32), view_w: f32, view_h: f32, limits: &Bounds) {
        let half_w = view_w / 2.0;
        let half_h = view_h / 2.0;
        let dead_x = DEAD_X.min(half_w);
        let dead_y = DEAD_Y.min(half_h);

        let left = self.x - half_w + dead_x;
        let right = self.x + half_w - dead_x;
        let bottom = self.y - half_h + dead_y;
        let top = self.y + half_h - dead_y;

        if target.0 < left {
            self.x -= left - target.0;
        } else if target.0 > right {
            self.x += target.0 - right;
        }
        if target.1 < bottom {
            self.y -= bottom - target.1;
        } else if target.1 > top {
            self.y += target.1 - top;
        }

        self.x = clamp_axis(self.x, half_w, limits.left, limits.right);
        self.y = clamp_axis(self.y, half_h, limits.bottom, limits.top);
    }
}

fn clamp_axis(value: f32, half: f32, lo: f32, hi: f32) -> f32 {
    if hi - lo <= 2.0 * half {
        (lo + hi) / 2.0
    } else {
        value.max(lo + half).min(hi - half)
    }
}
