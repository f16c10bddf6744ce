//! Surface material for Whitted shading.

use glint_math::{Color, DIM_GRAY};

/// Shading coefficients of a surface.
///
/// Coefficients are expected in `[0, 1]` but are not validated. The
/// specular coefficient is not stored: it is always `1 - diffuse`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Weight of the Lambertian term
    pub diffuse: f32,
    /// Weight of the mirror bounce
    pub reflection: f32,
    /// Base color, also the color a light casts
    pub color: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: 0.2,
            reflection: 0.0,
            color: DIM_GRAY,
        }
    }
}

impl Material {
    /// Create a material from all three coefficients.
    pub fn new(diffuse: f32, reflection: f32, color: Color) -> Self {
        Self {
            diffuse,
            reflection,
            color,
        }
    }

    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = reflection;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Weight of the Phong highlight, derived from the diffuse weight.
    #[inline]
    pub fn specular(&self) -> f32 {
        1.0 - self.diffuse
    }
}
