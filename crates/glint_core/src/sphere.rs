//! Sphere primitive for ray tracing.

use crate::primitive::Intersection;
use glint_math::{Ray, Vec3};

/// A sphere given by center and radius.
///
/// The radius must be positive; `load_scene` rejects anything else, direct
/// construction leaves that to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    squared_radius: f32,
    reciprocal_radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            squared_radius: radius * radius,
            reciprocal_radius: 1.0 / radius,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Intersect `ray` with the sphere, keeping only roots closer than `nearest`.
    ///
    /// Uses the geometric form with `b = -dot(origin - center, dir)`, which
    /// assumes a normalized direction. When the origin sits inside the sphere
    /// the near root is negative and the far root is reported as
    /// `Intersection::Inside`; that check comes before the regular hit so an
    /// inside ray is never taken for an outside one.
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Intersection {
        let v = ray.origin() - self.center;
        let b = -v.dot(ray.direction());
        let det = b * b - v.dot(v) + self.squared_radius;
        if det <= 0.0 {
            return Intersection::Miss;
        }

        let det = det.sqrt();
        let i1 = b - det;
        let i2 = b + det;

        // Entirely behind the origin
        if i2 <= 0.0 {
            return Intersection::Miss;
        }

        if i1 < 0.0 {
            if i2 < nearest {
                Intersection::Inside(i2)
            } else {
                Intersection::Miss
            }
        } else if i1 < nearest {
            Intersection::Hit(i1)
        } else {
            Intersection::Miss
        }
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center) * self.reciprocal_radius
    }
}
