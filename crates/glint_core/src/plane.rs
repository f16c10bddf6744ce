//! Infinite plane primitive.

use crate::primitive::Intersection;
use glint_math::{Ray, Vec3};

/// Below this `|dot(normal, dir)|` a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane: all points `P` with `dot(normal, P) + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Create a plane from a unit normal and signed offset.
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    /// The plane normal; constant over the whole surface.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Intersect `ray` with the plane, keeping only hits closer than `nearest`.
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Intersection {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() <= PARALLEL_EPSILON {
            return Intersection::Miss;
        }

        let t = -(self.normal.dot(ray.origin()) + self.d) / denom;
        if t > 0.0 && t < nearest {
            Intersection::Hit(t)
        } else {
            Intersection::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAR: f32 = 1_000_000.0;

    fn floor() -> Plane {
        // y = -4.4
        Plane::new(Vec3::Y, 4.4)
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        match floor().intersect(&ray, FAR) {
            Intersection::Hit(t) => assert!((t - 4.4).abs() < 1e-5),
            other => panic!("expected Hit, got {:?}", other),
        }
    }

    #[test]
    fn test_plane_hit_from_below() {
        let ray = Ray::new(Vec3::new(0.0, -10.0, 0.0), Vec3::Y);
        match floor().intersect(&ray, FAR) {
            Intersection::Hit(t) => assert!((t - 5.6).abs() < 1e-5),
            other => panic!("expected Hit, got {:?}", other),
        }
    }

    #[test]
    fn test_plane_parallel_misses() {
        for origin in [Vec3::ZERO, Vec3::new(0.0, -4.4, 0.0), Vec3::new(3.0, -20.0, 7.0)] {
            for dir in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0).normalize()] {
                let ray = Ray::new(origin, dir);
                assert_eq!(floor().intersect(&ray, FAR), Intersection::Miss);
            }
        }
    }

    #[test]
    fn test_plane_nearly_parallel_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1e-8, 0.0));
        assert_eq!(floor().intersect(&ray, FAR), Intersection::Miss);
    }

    #[test]
    fn test_plane_behind_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(floor().intersect(&ray, FAR), Intersection::Miss);
    }

    #[test]
    fn test_plane_ignores_farther_hits() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        assert_eq!(floor().intersect(&ray, 4.0), Intersection::Miss);
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = Plane::new(Vec3::Z, -2.0);
        assert_eq!(plane.normal(), Vec3::Z);
        assert_eq!(plane.d(), -2.0);
    }
}
