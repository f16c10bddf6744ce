//! RGBA color accumulator.
//!
//! Channels are unclamped floats while shading accumulates; clamping only
//! happens when a pixel is quantized to 8 bits.

use crate::Vec4;

/// Color type alias (r, g, b, a in x, y, z, w).
pub type Color = Vec4;

/// Background of a primary ray that escapes the scene.
pub const TRANSPARENT_BLACK: Color = Vec4::new(0.0, 0.0, 0.0, 0.0);

/// Seed accumulator of a reflection ray.
pub const OPAQUE_BLACK: Color = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Color of a directly visible light.
pub const WHITE: Color = Vec4::ONE;

/// Default surface color of a material.
pub const DIM_GRAY: Color = Vec4::new(0.2, 0.2, 0.2, 1.0);

/// Build a color from its channels.
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Vec4::new(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = rgba(0.1, 0.2, 0.3, 0.4);
        assert_eq!((c.x, c.y, c.z, c.w), (0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_accumulation_is_unclamped() {
        let c = WHITE + rgba(0.5, 0.5, 0.5, 0.0);
        assert_eq!(c.x, 1.5);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn test_blend_is_componentwise() {
        let c = rgba(1.0, 0.5, 0.25, 1.0) * rgba(0.5, 0.5, 0.5, 1.0) * 2.0;
        assert_eq!(c, rgba(1.0, 0.5, 0.25, 2.0));
    }
}
