//! Whitted-style ray tracing core.
//!
//! Implements:
//! - Nearest-hit search as a fold over the scene's primitives
//! - Local illumination from every point light (Lambert + Phong, no falloff)
//! - Recursive mirror reflection up to a fixed depth
//!
//! Lights are never occluded: there is no shadow ray between a surface point
//! and a light, so every light reaches every surface facing it.

use glint_core::{Intersection, Material, Primitive, Scene};
use glint_math::{Color, Ray, Vec3, OPAQUE_BLACK, TRANSPARENT_BLACK, WHITE};

/// Tracing limits and tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    /// Deepest recursion level; primary rays are level 1
    pub max_depth: u32,
    /// Offset along a reflected direction to step off the surface
    pub epsilon: f32,
    /// Initial nearest distance; hits beyond it are ignored
    pub max_distance: f32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_depth: 6,
            epsilon: 0.0001,
            max_distance: 1_000_000.0,
        }
    }
}

/// The closest primitive along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub primitive: &'a Primitive,
    /// Ray parameter of the hit point
    pub distance: f32,
    /// The ray started inside the primitive
    pub inside: bool,
}

/// Result of tracing one ray.
#[derive(Debug, Clone, Copy)]
pub struct Traced<'a> {
    /// Primitive struck by the ray, `None` if it escaped or was cut off
    pub primitive: Option<&'a Primitive>,
    /// Accumulator after this ray's contribution was merged in
    pub color: Color,
}

/// Traces rays against a borrowed scene.
pub struct Tracer<'a> {
    scene: &'a Scene,
    settings: TraceSettings,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self::with_settings(scene, TraceSettings::default())
    }

    pub fn with_settings(scene: &'a Scene, settings: TraceSettings) -> Self {
        Self { scene, settings }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    /// Find the closest primitive hit by `ray`.
    ///
    /// Each primitive only reports hits closer than the best distance so far,
    /// so whichever primitive last reports a hit is the nearest one.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        let (hit, _) = self.scene.primitives().iter().fold(
            (None, self.settings.max_distance),
            |(best, nearest), primitive| match primitive.intersect(ray, nearest) {
                Intersection::Hit(t) => (
                    Some(Hit {
                        primitive,
                        distance: t,
                        inside: false,
                    }),
                    t,
                ),
                Intersection::Inside(t) => (
                    Some(Hit {
                        primitive,
                        distance: t,
                        inside: true,
                    }),
                    t,
                ),
                Intersection::Miss => (best, nearest),
            },
        );
        hit
    }

    /// Trace `ray` and merge its contribution into `acc`.
    ///
    /// Returns `acc` untouched when `depth` is past the maximum or nothing is
    /// hit. A light hit replaces the accumulator with white whatever the
    /// light's color. Any other hit adds local shading and the reflected
    /// color.
    ///
    /// `refraction_index` is the index of the medium the ray travels in. No
    /// material refracts yet; it is passed down unchanged to reflected rays.
    pub fn trace(&self, ray: &Ray, acc: Color, depth: u32, refraction_index: f32) -> Traced<'a> {
        if depth > self.settings.max_depth {
            return Traced {
                primitive: None,
                color: acc,
            };
        }

        let Some(hit) = self.nearest_hit(ray) else {
            return Traced {
                primitive: None,
                color: acc,
            };
        };

        if hit.primitive.is_light() {
            return Traced {
                primitive: Some(hit.primitive),
                color: WHITE,
            };
        }

        let point = ray.at(hit.distance);
        let normal = hit.primitive.normal(point);
        let color = acc
            + self.shade(ray, hit.primitive.material(), point, normal)
            + self.reflection(ray, hit.primitive.material(), point, normal, depth, refraction_index);

        Traced {
            primitive: Some(hit.primitive),
            color,
        }
    }

    /// Sum of diffuse and specular light from every light in the scene.
    pub fn shade(&self, ray: &Ray, material: &Material, point: Vec3, normal: Vec3) -> Color {
        self.scene
            .lights()
            .fold(TRANSPARENT_BLACK, |acc, (light, sphere)| {
                let to_light = (sphere.center() - point).normalize();
                let light_color = light.material().color;
                acc + diffuse(material, normal, to_light, light_color)
                    + specular(material, ray.direction(), normal, to_light, light_color)
            })
    }

    /// Color arriving along the mirror direction, weighted by the surface.
    fn reflection(
        &self,
        ray: &Ray,
        material: &Material,
        point: Vec3,
        normal: Vec3,
        depth: u32,
        refraction_index: f32,
    ) -> Color {
        if material.reflection <= 0.0 || depth >= self.settings.max_depth {
            return TRANSPARENT_BLACK;
        }

        let direction = reflect(ray.direction(), normal);
        let bounce = Ray::new(point + direction * self.settings.epsilon, direction);
        let traced = self.trace(&bounce, OPAQUE_BLACK, depth + 1, refraction_index);

        material.reflection * traced.color * material.color
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Lambert term, tinted by both surface and light color.
fn diffuse(material: &Material, normal: Vec3, to_light: Vec3, light_color: Color) -> Color {
    if material.diffuse <= 0.0 {
        return TRANSPARENT_BLACK;
    }
    let dot = normal.dot(to_light);
    if dot <= 0.0 {
        return TRANSPARENT_BLACK;
    }
    dot * material.diffuse * material.color * light_color
}

/// Phong highlight with exponent 20. Takes the light color only, not the
/// surface color.
fn specular(material: &Material, view: Vec3, normal: Vec3, to_light: Vec3, light_color: Color) -> Color {
    let weight = material.specular();
    if weight <= 0.0 {
        return TRANSPARENT_BLACK;
    }
    let dot = view.dot(reflect(to_light, normal));
    if dot <= 0.0 {
        return TRANSPARENT_BLACK;
    }
    dot.powi(20) * weight * light_color
}
