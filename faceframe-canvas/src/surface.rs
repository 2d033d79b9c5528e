//! The drawing surface the presenter paints into
//!
//! Wraps a tiny-skia pixmap and exposes the handful of operations the
//! overlay needs: stretch-drawing an image, dimming, and stroking
//! rectangle outlines.

use anyhow::Result;
use image::{imageops::FilterType, DynamicImage, RgbaImage};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::geometry::SurfaceRect;
use crate::style::OverlayStyle;

/// A 2D raster target with mutable dimensions.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Create a transparent surface. Returns `None` if either dimension is
    /// zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Replace the backing buffer with a fresh transparent one of the given
    /// size, like resizing a canvas element clears it. Zero dimensions leave
    /// the surface unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(pixmap) = Pixmap::new(width, height) {
            self.pixmap = pixmap;
        }
    }

    /// Stretch the image over the whole surface, replacing prior content.
    pub fn fill_image(&mut self, image: &DynamicImage) {
        let resized = image.resize_exact(self.width(), self.height(), FilterType::Triangle);
        let rgba = resized.to_rgba8();
        self.pixmap.data_mut().copy_from_slice(rgba.as_raw());
    }

    /// Composite translucent black over the full extent, leaving prior
    /// content showing through.
    pub fn dim(&mut self, opacity: f32) {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, alpha);

        if let Some(rect) =
            tiny_skia::Rect::from_xywh(0.0, 0.0, self.width() as f32, self.height() as f32)
        {
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Stroke a rectangle outline in surface coordinates using the style's
    /// color, width, and dash pattern. The interior is left untouched.
    pub fn stroke_rect(&mut self, rect: &SurfaceRect, style: &OverlayStyle) {
        let x = rect.x as f32;
        let y = rect.y as f32;
        let w = rect.width as f32;
        let h = rect.height as f32;

        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        pb.line_to(x + w, y);
        pb.line_to(x + w, y + h);
        pb.line_to(x, y + h);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b] = style.stroke_rgb();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;

        let dash = if style.dash_pattern.is_empty() {
            None
        } else {
            StrokeDash::new(style.dash_pattern.clone(), 0.0)
        };
        let stroke = Stroke {
            width: style.stroke_width,
            dash,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Copy the surface contents out as an image buffer.
    pub fn to_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.pixmap.data().to_vec())
            .ok_or_else(|| anyhow::anyhow!("surface buffer size mismatch"))
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }
}
