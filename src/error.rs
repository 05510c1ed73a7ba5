use thiserror::Error;

/// Reasons a room cannot be built from a [`crate::RoomConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoomError {
    #[error("room parameter `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    #[error("room parameter `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("room parameter `{field}` is {value}, magnitude must not exceed {max}")]
    OutOfRange { field: &'static str, value: f32, max: f32 },

    #[error("room {width}x{height} is too small, both sides must be at least {min}")]
    TooSmall { width: f32, height: f32, min: f32 },
}

pub type RoomResult<T> = Result<T, RoomError>;
