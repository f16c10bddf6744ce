//! Glint Core - Scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane` and the `Primitive` wrapper that
//!   carries a `Material` and the light role
//! - **Scene**: the ordered primitive list a render reads from
//! - **Loading**: JSON scene descriptions, validated on the way in
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.len(),
//!     scene.lights().count());
//! ```

pub mod loader;
pub mod material;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, PrimitiveDescription, SceneDescription, SceneError};
pub use material::Material;
pub use plane::Plane;
pub use primitive::{Intersection, Primitive, Shape};
pub use scene::Scene;
pub use sphere::Sphere;
