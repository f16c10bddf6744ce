//! JSON scene descriptions.
//!
//! This is where scene data from outside the program enters, so it is also
//! where malformed geometry is rejected: zero-length plane normals,
//! non-positive radii and lights that are not spheres. Everything past this
//! point assumes well-formed input.
//!
//! ```json
//! {
//!   "primitives": [
//!     { "type": "sphere", "name": "ball", "center": [0, 0, 3], "radius": 1,
//!       "material": { "reflection": 0.5, "color": [1, 0.7, 1, 1] } },
//!     { "type": "plane", "normal": [0, 1, 0], "d": 4.4 },
//!     { "type": "sphere", "light": true, "center": [0, 5, 5], "radius": 0.1 }
//!   ]
//! }
//! ```

use std::path::Path;

use glint_math::{unit_vector, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Material, Plane, Primitive, Scene, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Plane '{name}' has a zero-length or non-finite normal")]
    DegenerateNormal { name: String },

    #[error("Sphere '{name}' has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f32 },

    #[error("Primitive '{name}' is marked as a light but only spheres can be lights")]
    NonSphereLight { name: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Material fields; anything left out takes the `Material` default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub diffuse: f32,
    pub reflection: f32,
    pub color: [f32; 4],
}

impl Default for MaterialDescription {
    fn default() -> Self {
        let m = Material::default();
        Self {
            diffuse: m.diffuse,
            reflection: m.reflection,
            color: m.color.to_array(),
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Material::new(desc.diffuse, desc.reflection, Vec4::from_array(desc.color))
    }
}

/// Geometry of a described primitive, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere { center: [f32; 3], radius: f32 },
    Plane { normal: [f32; 3], d: f32 },
}

/// One entry of the `primitives` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDescription {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub shape: ShapeDescription,
    #[serde(default)]
    pub light: bool,
    #[serde(default)]
    pub material: MaterialDescription,
}

impl PrimitiveDescription {
    /// Validate the description and turn it into a primitive.
    pub fn build(&self) -> SceneResult<Primitive> {
        let material = Material::from(&self.material);
        match self.shape {
            ShapeDescription::Sphere { center, radius } => {
                // Written this way round so NaN is rejected too
                if !(radius > 0.0) {
                    return Err(SceneError::NonPositiveRadius {
                        name: self.name.clone(),
                        radius,
                    });
                }
                let sphere = Sphere::new(Vec3::from_array(center), radius);
                if self.light {
                    Ok(Primitive::light(self.name.clone(), sphere, material))
                } else {
                    Ok(Primitive::new(self.name.clone(), sphere, material))
                }
            }
            ShapeDescription::Plane { normal, d } => {
                if self.light {
                    return Err(SceneError::NonSphereLight {
                        name: self.name.clone(),
                    });
                }
                let normal = unit_vector(Vec3::from_array(normal)).ok_or_else(|| {
                    SceneError::DegenerateNormal {
                        name: self.name.clone(),
                    }
                })?;
                Ok(Primitive::new(self.name.clone(), Plane::new(normal, d), material))
            }
        }
    }
}

/// A whole scene as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub primitives: Vec<PrimitiveDescription>,
}

impl SceneDescription {
    /// Validate every primitive and assemble the scene, keeping file order.
    pub fn build(&self) -> SceneResult<Scene> {
        let scene = self
            .primitives
            .iter()
            .map(|desc| {
                let primitive = desc.build()?;
                log::debug!(
                    "Loaded primitive '{}' ({:?}, light={})",
                    primitive.name(),
                    primitive.shape(),
                    primitive.is_light()
                );
                Ok(primitive)
            })
            .collect::<SceneResult<Scene>>()?;

        if scene.lights().next().is_none() {
            log::warn!("Scene has no lights; only directly visible lights and reflections of them will show");
        }

        Ok(scene)
    }
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let description: SceneDescription = serde_json::from_str(text)?;
    description.build()
}

/// Load a scene from a JSON file.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/demo.json")?;
/// println!("Loaded {} primitives", scene.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded {} primitives ({} lights) from {}",
        scene.len(),
        scene.lights().count(),
        path.display()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::rgba;

    const DEMO: &str = r#"{
        "primitives": [
            { "type": "sphere", "name": "big sphere", "center": [1, -0.8, 3], "radius": 2.5,
              "material": { "reflection": 0.6, "color": [1, 0.7, 1, 1] } },
            { "type": "plane", "name": "plane", "normal": [0, 2, 0], "d": 4.4,
              "material": { "diffuse": 1.0, "color": [0.4, 0.3, 0.3, 1] } },
            { "type": "sphere", "name": "light", "light": true, "center": [0, 5, 5], "radius": 0.1,
              "material": { "color": [0.6, 0.6, 0.6, 1] } }
        ]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let _ = env_logger::builder().is_test(true).try_init();

        let scene = load_scene_from_str(DEMO).unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.lights().count(), 1);

        let names: Vec<_> = scene.primitives().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["big sphere", "plane", "light"]);
    }

    #[test]
    fn test_material_defaults_fill_gaps() {
        let scene = load_scene_from_str(DEMO).unwrap();

        let big = scene.find("big sphere").unwrap().material();
        assert_eq!(big.diffuse, 0.2);
        assert_eq!(big.reflection, 0.6);

        let light = scene.find("light").unwrap().material();
        assert_eq!(light.color, rgba(0.6, 0.6, 0.6, 1.0));
        assert_eq!(light.reflection, 0.0);
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let scene = load_scene_from_str(DEMO).unwrap();
        let plane = scene.find("plane").unwrap();
        assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_zero_normal_rejected() {
        let text = r#"{ "primitives": [ { "type": "plane", "name": "bad", "normal": [0, 0, 0], "d": 1 } ] }"#;
        match load_scene_from_str(text) {
            Err(SceneError::DegenerateNormal { name }) => assert_eq!(name, "bad"),
            other => panic!("expected DegenerateNormal, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        for radius in ["0", "-1.5"] {
            let text = format!(
                r#"{{ "primitives": [ {{ "type": "sphere", "name": "s", "center": [0, 0, 0], "radius": {radius} }} ] }}"#
            );
            assert!(matches!(
                load_scene_from_str(&text),
                Err(SceneError::NonPositiveRadius { .. })
            ));
        }
    }

    #[test]
    fn test_plane_light_rejected() {
        let text = r#"{ "primitives": [ { "type": "plane", "name": "sky", "light": true, "normal": [0, -1, 0], "d": 10 } ] }"#;
        assert!(matches!(
            load_scene_from_str(text),
            Err(SceneError::NonSphereLight { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_scene_from_str("{ \"primitives\": [ { \"type\": \"cube\" } ] }"),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_scene("does/not/exist.json"),
            Err(SceneError::Io(_))
        ));
    }

    #[test]
    fn test_bundled_demo_matches_builtin() {
        let loaded = load_scene_from_str(include_str!("../../../scenes/demo.json")).unwrap();
        let builtin = Scene::demo();
        assert_eq!(loaded.len(), builtin.len());

        for (a, b) in loaded.primitives().iter().zip(builtin.primitives()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.is_light(), b.is_light());
            assert!((a.material().color - b.material().color).abs().max_element() < 1e-6);
            assert!((a.material().diffuse - b.material().diffuse).abs() < 1e-6);
            assert!((a.material().reflection - b.material().reflection).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_scene_loads() {
        let scene = load_scene_from_str(r#"{ "primitives": [] }"#).unwrap();
        assert!(scene.is_empty());
    }
}
