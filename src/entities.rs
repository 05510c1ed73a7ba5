//! Room entity types: geometry and motion records, no simulation logic.

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Anything with a world-space centre point.
pub trait Positioned {
    fn position(&self) -> (f32, f32);
}

/// Anything with an axis-aligned box the outer loop can test against.
pub trait Collidable: Positioned {
    fn size(&self) -> (f32, f32);

    fn hitbox(&self) -> Rect {
        let (x, y) = self.position();
        let (width, height) = self.size();
        Rect::new(x, y, width, height)
    }
}

/// Anything the renderer draws as a single box.
pub trait Drawable: Collidable {
    fn draw_kind(&self) -> DrawKind;

    fn draw_item(&self) -> DrawItem {
        DrawItem {
            kind: self.draw_kind(),
            rect: self.hitbox(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Wall,
    Floor,
    Ceiling,
    Platform,
    Enemy,
    Shooter,
    Bullet,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub kind: DrawKind,
    pub rect: Rect,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle stored by centre and size (y grows upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Interior extent of a room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    /// Strict interior test; points on an edge are outside.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.left < x && x < self.right && self.bottom < y && y < self.top
    }

    /// Shrinks (positive `inset`) or grows (negative `inset`) every side.
    pub fn inset(&self, inset: f32) -> Bounds {
        Bounds {
            left: self.left + inset,
            right: self.right - inset,
            bottom: self.bottom + inset,
            top: self.top - inset,
        }
    }

    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (x.max(self.left).min(self.right), y.max(self.bottom).min(self.top))
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

// ── Static surfaces ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Wall,
    /// Collides like a wall; only the texture differs.
    Floor,
    Ceiling,
}

/// One boundary tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub rect: Rect,
    pub kind: SurfaceKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub const PLATFORM_WIDTH: f32 = 100.0;
pub const PLATFORM_HEIGHT: f32 = 20.0;

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLATFORM_WIDTH,
            height: PLATFORM_HEIGHT,
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Surface an enemy is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    LeftWall,
    RightWall,
    Ceiling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Interval an enemy oscillates within along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patrol {
    pub axis: Axis,
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub change_x: f32,
    pub change_y: f32,
    /// Scalar patrol speed in units per tick; velocity is rebuilt from it
    /// on every bounce.
    pub speed: f32,
    /// +1.0 or -1.0, flipped on every bounce.
    pub direction: f32,
    pub is_shooter: bool,
    pub mount: Mount,
    pub patrol: Patrol,
    pub on_wall: bool,
    pub on_ceiling: bool,
    /// Seconds accumulated since the last shot.
    pub shoot_timer: f32,
    pub shoot_cooldown: f32,
    pub shoot_range: f32,
    pub bullet_speed: f32,
}

pub const ENEMY_SIZE: f32 = 32.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Stable handle for a bullet owned by a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BulletId(pub u64);

impl BulletId {
    /// Placeholder carried until a room adopts the bullet.
    pub const UNASSIGNED: BulletId = BulletId(0);
}

/// Non-homing projectile; velocity is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: BulletId,
    pub x: f32,
    pub y: f32,
    pub change_x: f32,
    pub change_y: f32,
    /// Ticks left before expiry.
    pub lifetime: u32,
}

pub const BULLET_SIZE: f32 = 10.0;

// ── Capability impls ──────────────────────────────────────────────────────────

impl Positioned for Surface {
    fn position(&self) -> (f32, f32) {
        (self.rect.x, self.rect.y)
    }
}

impl Collidable for Surface {
    fn size(&self) -> (f32, f32) {
        (self.rect.width, self.rect.height)
    }
}

impl Drawable for Surface {
    fn draw_kind(&self) -> DrawKind {
        match self.kind {
            SurfaceKind::Wall => DrawKind::Wall,
            SurfaceKind::Floor => DrawKind::Floor,
            SurfaceKind::Ceiling => DrawKind::Ceiling,
        }
    }
}

impl Positioned for Platform {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for Platform {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Drawable for Platform {
    fn draw_kind(&self) -> DrawKind {
        DrawKind::Platform
    }
}

impl Positioned for Enemy {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for Enemy {
    fn size(&self) -> (f32, f32) {
        (ENEMY_SIZE, ENEMY_SIZE)
    }
}

impl Drawable for Enemy {
    fn draw_kind(&self) -> DrawKind {
        if self.is_shooter {
            DrawKind::Shooter
        } else {
            DrawKind::Enemy
        }
    }
}

impl Positioned for Bullet {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for Bullet {
    fn size(&self) -> (f32, f32) {
        (BULLET_SIZE, BULLET_SIZE)
    }
}

impl Drawable for Bullet {
    fn draw_kind(&self) -> DrawKind {
        DrawKind::Bullet
    }
}
