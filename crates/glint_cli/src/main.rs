//! Render a scene to an image file.
//!
//! Usage: `glint [SCENE.json] [OUTPUT]`
//!
//! Without arguments the built-in demo scene is rendered at 800x600 and
//! written to `snapshot.bmp`.

use anyhow::{Context, Result};
use glint_core::{load_scene, Scene};
use glint_renderer::Engine;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const DEFAULT_OUTPUT: &str = "snapshot.bmp";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [scene.json] [output]", args[0]);
        std::process::exit(1);
    }

    let scene = match args.get(1) {
        Some(path) => load_scene(path).with_context(|| format!("Failed to load scene {}", path))?,
        None => {
            log::info!("No scene given, using the demo scene");
            Scene::demo()
        }
    };
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let mut engine = Engine::new(scene, WIDTH, HEIGHT);
    engine.render();
    engine
        .save(output)
        .with_context(|| format!("Failed to write {}", output))?;

    Ok(())
}
