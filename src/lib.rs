//! Room generation and entity simulation for a vertical side-scrolling level.
//!
//! The library is headless: it lays out walls and platforms, spawns wall and
//! ceiling patrollers, and steps enemies and bullets once per frame.  Drawing,
//! input and platformer physics belong to the caller (see `main.rs`).

pub mod config;
pub mod enemies;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod projectiles;
pub mod room;

pub use config::RoomConfig;
pub use entities::{Bounds, Bullet, BulletId, Enemy, Platform, Rect, Surface, SurfaceKind};
pub use error::RoomError;
pub use room::Room;
