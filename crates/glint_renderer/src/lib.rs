//! Glint Renderer - CPU Whitted ray tracing
//!
//! Recursive ray tracer with diffuse, specular and mirror reflection
//! shading over a flat list of spheres and planes. One primary ray per
//! pixel, no acceleration structure, no shadow rays.

mod framebuffer;
mod renderer;
mod tracer;

pub use framebuffer::{quantize, Framebuffer, RenderError, Rgb8};
pub use renderer::{Engine, RenderConfig, ScreenPlane, Viewport};
pub use tracer::{reflect, Hit, TraceSettings, Traced, Tracer};

/// Re-export scene and math types used in the public API
pub use glint_core::{Material, Primitive, Scene};
pub use glint_math::{Color, Ray, Vec3};
