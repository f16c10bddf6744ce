//! Scene container for the ray tracer.
//!
//! A scene is an ordered list of primitives, some of which are lights.
//! It is built once before rendering and only read while rendering.

use crate::{Material, Primitive, Sphere};
use glint_math::{rgba, Vec3};

/// An ordered collection of primitives.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a scene from a list of primitives.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Add a primitive at the end of the list.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Iterate over the light primitives together with their spheres.
    pub fn lights(&self) -> impl Iterator<Item = (&Primitive, &Sphere)> + '_ {
        self.primitives
            .iter()
            .filter_map(|p| p.as_light().map(|sphere| (p, sphere)))
    }

    /// Look a primitive up by name.
    pub fn find(&self, name: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The default scene: two reflective spheres over a floor, lit by two
    /// small white-ish point lights.
    pub fn demo() -> Self {
        Self::new(vec![
            Primitive::sphere(
                "big sphere",
                Vec3::new(1.0, -0.8, 3.0),
                2.5,
                Material::default()
                    .with_reflection(0.6)
                    .with_color(rgba(1.0, 0.7, 1.0, 1.0)),
            ),
            Primitive::sphere(
                "small sphere",
                Vec3::new(-5.5, -0.5, 7.0),
                2.0,
                Material::new(0.1, 1.0, rgba(0.7, 0.7, 0.7, 1.0)),
            ),
            Primitive::plane(
                "plane",
                Vec3::Y,
                4.4,
                Material::new(1.0, 0.0, rgba(0.4, 0.3, 0.3, 1.0)),
            ),
            Primitive::light(
                "light 1",
                Sphere::new(Vec3::new(0.0, 5.0, 5.0), 0.1),
                Material::default().with_color(rgba(0.6, 0.6, 0.6, 1.0)),
            ),
            Primitive::light(
                "light 2",
                Sphere::new(Vec3::new(2.0, 5.0, 1.0), 0.1),
                Material::default().with_color(rgba(0.7, 0.7, 0.9, 1.0)),
            ),
        ])
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
