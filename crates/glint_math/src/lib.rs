// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod ray;

pub use color::{rgba, Color, DIM_GRAY, OPAQUE_BLACK, TRANSPARENT_BLACK, WHITE};
pub use ray::Ray;

/// Normalize `v`, or `None` when it has no usable direction.
///
/// Zero-length and non-finite vectors are rejected. This is meant for the
/// scene boundary; the per-pixel path calls `Vec3::normalize` directly and
/// assumes valid input.
pub fn unit_vector(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}
