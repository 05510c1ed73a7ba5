//! Plain construction parameters for a room.

use crate::entities::Bounds;
use crate::error::{RoomError, RoomResult};

/// Smallest width/height that leaves the 100-unit placement insets non-empty.
pub const MIN_ROOM_SIDE: f32 = 200.0;

/// Largest width/height; keeps tile and platform counts in the thousands.
pub const MAX_ROOM_SIDE: f32 = 100_000.0;
/// Largest centre coordinate or wall thickness.  Past this f32 loses
/// the precision placement steps rely on.
pub const MAX_COORDINATE: f32 = 1_000_000.0;

pub const DEFAULT_WALL_THICKNESS: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomConfig {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl Default for RoomConfig {
    /// The tall shaft the game starts in.
    fn default() -> Self {
        Self {
            center_x: 450.0,
            center_y: 2700.0,
            width: 600.0,
            height: 5000.0,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl RoomConfig {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }

    pub fn with_wall_thickness(self, wall_thickness: f32) -> Self {
        Self { wall_thickness, ..self }
    }

    pub fn validate(&self) -> RoomResult<()> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("width", self.width),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(RoomError::NonFinite { field });
            }
        }
        if self.wall_thickness <= 0.0 {
            return Err(RoomError::NonPositive {
                field: "wall_thickness",
                value: self.wall_thickness,
            });
        }
        let limits = [
            ("center_x", self.center_x, MAX_COORDINATE),
            ("center_y", self.center_y, MAX_COORDINATE),
            ("wall_thickness", self.wall_thickness, MAX_COORDINATE),
            ("width", self.width, MAX_ROOM_SIDE),
            ("height", self.height, MAX_ROOM_SIDE),
        ];
        for (field, value, max) in limits {
            if value.abs() > max {
                return Err(RoomError::OutOfRange { field, value, max });
            }
        }
        if self.width < MIN_ROOM_SIDE || self.height < MIN_ROOM_SIDE {
            return Err(RoomError::TooSmall {
                width: self.width,
                height: self.height,
                min: MIN_ROOM_SIDE,
            });
        }
        Ok(())
    }

    /// Axis-aligned interior bounds centred on `(center_x, center_y)`.
    pub fn bounds(&self) -> Bounds {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Bounds {
            left: self.center_x - half_w,
            right: self.center_x + half_w,
            bottom: self.center_y - half_h,
            top: self.center_y + half_h,
        }
    }
}
