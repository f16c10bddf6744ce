//! Scene primitives and the intersection outcome they share.

use crate::{Material, Plane, Sphere};
use glint_math::{Ray, Vec3};

/// Outcome of intersecting a ray with a primitive.
///
/// The distance is only reported when it beats the running nearest
/// distance handed to `intersect`, so a scan over a whole scene reduces
/// to the closest hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Miss,
    /// Ray enters the surface from outside at `t`
    Hit(f32),
    /// Ray origin is inside the volume; it leaves through the surface at `t`
    Inside(f32),
}

impl Intersection {
    /// Distance along the ray, if anything was hit.
    pub fn distance(&self) -> Option<f32> {
        match *self {
            Intersection::Miss => None,
            Intersection::Hit(t) | Intersection::Inside(t) => Some(t),
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, Intersection::Miss)
    }
}

/// Geometry of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Intersection {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray, nearest),
            Shape::Plane(plane) => plane.intersect(ray, nearest),
        }
    }

    /// Surface normal at `point`, which must lie on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal(point),
            Shape::Plane(plane) => plane.normal(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

/// A named shape with a material, possibly acting as a point light.
///
/// Only spheres can be lights: the light role is set by `Primitive::light`,
/// which takes a `Sphere`. Shading reads the light position from the sphere
/// center, so any other shape would have nothing to offer there.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    name: String,
    material: Material,
    shape: Shape,
    light: bool,
}

impl Primitive {
    /// Create a non-emitting primitive from any shape.
    pub fn new(name: impl Into<String>, shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            name: name.into(),
            material,
            shape: shape.into(),
            light: false,
        }
    }

    pub fn sphere(name: impl Into<String>, center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(name, Sphere::new(center, radius), material)
    }

    pub fn plane(name: impl Into<String>, normal: Vec3, d: f32, material: Material) -> Self {
        Self::new(name, Plane::new(normal, d), material)
    }

    /// Create a point light modeled as a small sphere.
    ///
    /// The material color is the color the light casts.
    pub fn light(name: impl Into<String>, sphere: Sphere, material: Material) -> Self {
        Self {
            name: name.into(),
            material,
            shape: Shape::Sphere(sphere),
            light: true,
        }
    }

    /// Diagnostic name; has no effect on rendering.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_light(&self) -> bool {
        self.light
    }

    /// The light sphere, if this primitive is a light.
    pub fn as_light(&self) -> Option<&Sphere> {
        match (&self.shape, self.light) {
            (Shape::Sphere(sphere), true) => Some(sphere),
            _ => None,
        }
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Intersection {
        self.shape.intersect(ray, nearest)
    }

    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        self.shape.normal(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_distance() {
        assert_eq!(Intersection::Miss.distance(), None);
        assert_eq!(Intersection::Hit(2.0).distance(), Some(2.0));
        assert_eq!(Intersection::Inside(3.0).distance(), Some(3.0));
        assert!(!Intersection::Miss.is_hit());
        assert!(Intersection::Inside(1.0).is_hit());
    }

    #[test]
    fn test_light_role_only_on_spheres() {
        let light = Primitive::light("key", Sphere::new(Vec3::Y, 0.1), Material::default());
        assert!(light.is_light());
        assert_eq!(light.as_light().map(|s| s.center()), Some(Vec3::Y));

        let sphere = Primitive::sphere("ball", Vec3::ZERO, 1.0, Material::default());
        assert!(!sphere.is_light());
        assert!(sphere.as_light().is_none());

        let plane = Primitive::plane("floor", Vec3::Y, 1.0, Material::default());
        assert!(!plane.is_light());
        assert!(plane.as_light().is_none());
    }

    #[test]
    fn test_shape_dispatch() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        let plane = Primitive::plane("floor", Vec3::Y, 2.0, Material::default());
        assert_eq!(plane.intersect(&ray, 100.0), Intersection::Hit(2.0));
        assert_eq!(plane.normal(Vec3::new(5.0, -2.0, 1.0)), Vec3::Y);

        let sphere = Primitive::sphere("ball", Vec3::new(0.0, -3.0, 0.0), 1.0, Material::default());
        assert_eq!(sphere.intersect(&ray, 100.0), Intersection::Hit(2.0));
        assert_eq!(sphere.normal(Vec3::new(0.0, -2.0, 0.0)), Vec3::Y);
    }

    #[test]
    fn test_name() {
        let p = Primitive::sphere("big sphere", Vec3::ZERO, 1.0, Material::default());
        assert_eq!(p.name(), "big sphere");
    }
}
