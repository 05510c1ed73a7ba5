//! Distance and closeness rules shared by placement and targeting.

use crate::entities::Rect;

/// Minimum horizontal gap between two platforms that share a vertical band.
pub const PLATFORM_MIN_DX: f32 = 60.0;
/// Minimum vertical gap between two platforms that share a horizontal band.
pub const PLATFORM_MIN_DY: f32 = 40.0;

/// True when the points are closer than `min_dx` on x AND closer than
/// `min_dy` on y.  Being far enough apart on either axis is enough.
pub fn too_close(a: (f32, f32), b: (f32, f32), min_dx: f32, min_dy: f32) -> bool {
    (a.0 - b.0).abs() < min_dx && (a.1 - b.1).abs() < min_dy
}

/// Pairwise platform spacing rule.
pub fn platform_spacing_ok(a: (f32, f32), b: (f32, f32)) -> bool {
    !too_close(a, b, PLATFORM_MIN_DX, PLATFORM_MIN_DY)
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide.
pub fn unit_direction(from: (f32, f32), to: (f32, f32)) -> Option<(f32, f32)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len > 0.0 {
        Some((dx / len, dy / len))
    } else {
        None
    }
}

/// Closed-interval overlap; touching edges count as a hit.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() <= b.right() && a.right() >= b.left() && a.bottom() <= b.top() && a.top() >= b.bottom()
}
