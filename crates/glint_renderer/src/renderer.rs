//! Frame driver: one primary ray per pixel, quantized into a framebuffer.
//!
//! Pixels map linearly onto a fixed rectangle on the `z = 0` plane, seen
//! from a fixed camera origin. Rows are independent, so with the `parallel`
//! feature they are traced on the rayon pool; the output does not change.

use std::path::Path;
use std::time::Instant;

use glint_core::Scene;
use glint_math::{Ray, Vec3, TRANSPARENT_BLACK};

use crate::framebuffer::{quantize, Framebuffer, RenderError, Rgb8};
use crate::tracer::{TraceSettings, Tracer};

/// Rectangle on the `z = 0` plane that the image covers.
///
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPlane {
    pub x1: f32,
    pub x2: f32,
    pub y1: f32,
    pub y2: f32,
}

impl Default for ScreenPlane {
    fn default() -> Self {
        Self {
            x1: -4.0,
            x2: 4.0,
            y1: 3.0,
            y2: -3.0,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Screen rectangle in world space
    pub screen: ScreenPlane,
    /// Point every primary ray starts from
    pub camera_origin: Vec3,
    /// Screen rows skipped at the top. The image is shifted up by this many
    /// rows and the same number of rows at the bottom is left black.
    pub row_offset: u32,
    /// Recursion limits
    pub trace: TraceSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            screen: ScreenPlane::default(),
            camera_origin: Vec3::new(0.0, 0.0, -5.0),
            row_offset: 20,
            trace: TraceSettings::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_screen(mut self, screen: ScreenPlane) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_camera_origin(mut self, origin: Vec3) -> Self {
        self.camera_origin = origin;
        self
    }

    pub fn with_row_offset(mut self, rows: u32) -> Self {
        self.row_offset = rows;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.trace.max_depth = max_depth;
        self
    }

    /// Number of rows that get primary rays.
    pub fn traced_rows(&self) -> u32 {
        self.height.saturating_sub(self.row_offset)
    }
}

/// Pixel to world mapping, precomputed from a `RenderConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Vec3,
    x1: f32,
    y1: f32,
    delta_x: f32,
    delta_y: f32,
    row_offset: u32,
}

impl Viewport {
    pub fn new(config: &RenderConfig) -> Self {
        let screen = config.screen;
        Self {
            origin: config.camera_origin,
            x1: screen.x1,
            y1: screen.y1,
            delta_x: (screen.x2 - screen.x1) / config.width as f32,
            delta_y: (screen.y2 - screen.y1) / config.height as f32,
            row_offset: config.row_offset,
        }
    }

    /// Point on the screen plane for pixel (x, y).
    pub fn screen_point(&self, x: u32, y: u32) -> Vec3 {
        Vec3::new(
            self.x1 + x as f32 * self.delta_x,
            self.y1 + (y + self.row_offset) as f32 * self.delta_y,
            0.0,
        )
    }

    /// Normalized primary ray from the camera through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let direction = (self.screen_point(x, y) - self.origin).normalize();
        Ray::new(self.origin, direction)
    }
}

/// Render one row of pixels.
fn render_row(tracer: &Tracer<'_>, viewport: &Viewport, y: u32, row: &mut [Rgb8]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        let ray = viewport.primary_ray(x as u32, y);
        let traced = tracer.trace(&ray, TRANSPARENT_BLACK, 1, 1.0);
        *pixel = quantize(traced.color);
    }
}

/// Owns a scene and the framebuffer it is rendered into.
pub struct Engine {
    scene: Scene,
    config: RenderConfig,
    viewport: Viewport,
    framebuffer: Framebuffer,
}

impl Engine {
    /// Create an engine with the default framing at the given resolution.
    pub fn new(scene: Scene, width: u32, height: u32) -> Self {
        Self::with_config(scene, RenderConfig::default().with_resolution(width, height))
    }

    pub fn with_config(scene: Scene, config: RenderConfig) -> Self {
        let viewport = Viewport::new(&config);
        let framebuffer = Framebuffer::new(config.width, config.height);
        Self {
            scene,
            config,
            viewport,
            framebuffer,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Primary ray for pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        self.viewport.primary_ray(x, y)
    }

    /// Trace every pixel of the traced rows into the framebuffer.
    pub fn render(&mut self) -> &Framebuffer {
        let width = self.config.width as usize;
        let rows = self.config.traced_rows() as usize;

        log::info!(
            "Rendering {}x{} ({} traced rows), {} primitives, {} lights",
            self.config.width,
            self.config.height,
            rows,
            self.scene.len(),
            self.scene.lights().count()
        );
        let start = Instant::now();

        if width > 0 && rows > 0 {
            let tracer = Tracer::with_settings(&self.scene, self.config.trace);
            let viewport = &self.viewport;
            let pixels = &mut self.framebuffer.pixels_mut()[..rows * width];

            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                pixels
                    .par_chunks_mut(width)
                    .enumerate()
                    .for_each(|(y, row)| render_row(&tracer, viewport, y as u32, row));
            }

            #[cfg(not(feature = "parallel"))]
            for (y, row) in pixels.chunks_mut(width).enumerate() {
                render_row(&tracer, viewport, y as u32, row);
            }
        }

        log::info!("Rendered in {:?}", start.elapsed());
        &self.framebuffer
    }

    /// Save the framebuffer; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.framebuffer.save(path)?;
        log::info!("Saved {}", path.display());
        Ok(())
    }
}
