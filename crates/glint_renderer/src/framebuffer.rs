//! 8-bit RGB framebuffer and image output.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glint_math::Color;
use thiserror::Error;

/// Errors that can occur when writing a rendered image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to save image: {0}")]
    Save(#[from] image::ImageError),

    #[error("Framebuffer has no pixels")]
    EmptyFramebuffer,
}

/// One 8-bit RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert one channel: `min(255, trunc(c * 256))`.
///
/// Negative values and NaN become 0.
#[inline]
fn quantize_channel(c: f32) -> u8 {
    (c * 256.0).clamp(0.0, 255.0) as u8
}

/// Convert an accumulated color to 8-bit RGB. Alpha is dropped.
pub fn quantize(color: Color) -> Rgb8 {
    Rgb8 {
        r: quantize_channel(color.x),
        g: quantize_channel(color.y),
        b: quantize_channel(color.z),
    }
}

/// Row-major grid of RGB pixels, black when allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb8) {
        let i = self.index(x, y);
        self.pixels[i] = pixel;
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb8] {
        &mut self.pixels
    }

    /// Packed RGB bytes, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the framebuffer to disk. The format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        if self.pixels.is_empty() {
            return Err(RenderError::EmptyFramebuffer);
        }
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{rgba, TRANSPARENT_BLACK, WHITE};

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(TRANSPARENT_BLACK), Rgb8::BLACK);
        assert_eq!(quantize(rgba(0.5, 0.25, 0.0, 1.0)), Rgb8::new(128, 64, 0));
        // Truncates rather than rounds
        assert_eq!(quantize(rgba(0.999, 0.1, 0.0, 0.0)), Rgb8::new(255, 25, 0));
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(WHITE), Rgb8::new(255, 255, 255));
        assert_eq!(quantize(rgba(1.5, 40.0, 1e30, 1.0)), Rgb8::new(255, 255, 255));
        assert_eq!(quantize(rgba(-0.5, f32::NAN, f32::INFINITY, 0.0)), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_framebuffer_get_set() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|p| *p == Rgb8::BLACK));

        fb.set(3, 2, Rgb8::new(1, 2, 3));
        assert_eq!(fb.get(3, 2), Rgb8::new(1, 2, 3));
        assert_eq!(fb.pixels()[11], Rgb8::new(1, 2, 3));
    }

    #[test]
    fn test_as_bytes_is_packed_rgb() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set(1, 0, Rgb8::new(10, 20, 30));
        assert_eq!(fb.as_bytes(), &[0, 0, 0, 10, 20, 30]);
    }

    #[test]
    fn test_save_bmp() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set(0, 0, Rgb8::new(255, 0, 0));
        fb.set(2, 1, Rgb8::new(0, 128, 255));

        let path = std::env::temp_dir().join(format!("glint_framebuffer_{}.bmp", std::process::id()));
        fb.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 128, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_empty_fails() {
        let fb = Framebuffer::new(0, 0);
        assert!(matches!(fb.save("never.bmp"), Err(RenderError::EmptyFramebuffer)));
    }
}
