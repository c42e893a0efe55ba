//! Image overlay pinned at a geographic coordinate.
//!
//! The overlay is decoded once, uploaded as an egui texture, and painted by a
//! walkers plugin at the projected screen position of its anchor.

use egui::{Color32, ColorImage, Context, Rect, TextureHandle, TextureOptions, pos2};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkers::{Plugin, Position, Projector};

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to read overlay image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode overlay image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Decode image bytes into an egui color image.
pub fn decode(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// A single image anchored at a fixed coordinate.
#[derive(Clone)]
pub struct ImageOverlay {
    texture: TextureHandle,
    anchor: Position,
}

impl ImageOverlay {
    /// Load an image file and upload it as a texture anchored at `anchor`.
    pub fn from_file(path: &Path, anchor: Position, ctx: &Context) -> Result<Self, OverlayError> {
        let bytes = std::fs::read(path).map_err(|source| OverlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let color_image = decode(&bytes).map_err(|source| OverlayError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        // LINEAR filtering for smooth scaling while panning/zooming.
        let texture = ctx.load_texture("map-overlay", color_image, TextureOptions::LINEAR);
        Ok(Self { texture, anchor })
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Texture size in pixels.
    pub fn size(&self) -> egui::Vec2 {
        self.texture.size_vec2()
    }
}

impl Plugin for ImageOverlay {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _map_memory: &walkers::MapMemory,
    ) {
        let screen = projector.project(self.anchor);
        let center = pos2(screen.x, screen.y);
        let rect = Rect::from_center_size(center, self.texture.size_vec2());

        ui.painter().image(
            self.texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A 3x2 red PNG encoded in memory.
    fn sample_png() -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        let pixels = image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(pixels)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn decode_keeps_dimensions_and_pixels() {
        let color_image = decode(&sample_png()).unwrap();
        assert_eq!(color_image.size, [3, 2]);
        assert_eq!(color_image.pixels[0], Color32::from_rgba_unmultiplied(255, 0, 0, 255));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode(b"not an image").is_err());
    }

    #[test]
    fn from_file_reports_a_missing_file() {
        let ctx = Context::default();
        let missing = Path::new("definitely-not-here.png");
        let result = ImageOverlay::from_file(missing, walkers::lat_lon(0.0, 0.0), &ctx);
        assert!(matches!(result, Err(OverlayError::Read { .. })));
    }

    #[test]
    fn from_file_uploads_a_texture() {
        let ctx = Context::default();
        let path = std::env::temp_dir().join("mapness-demo-overlay-test.png");
        std::fs::write(&path, sample_png()).unwrap();

        let anchor = walkers::lat_lon(-37.8136, 144.9631);
        let overlay = ImageOverlay::from_file(&path, anchor, &ctx).unwrap();
        assert_eq!(overlay.size(), egui::vec2(3.0, 2.0));
        assert!((overlay.anchor().y() - -37.8136).abs() < 1e-9);

        let _ = std::fs::remove_file(&path);
    }
}
