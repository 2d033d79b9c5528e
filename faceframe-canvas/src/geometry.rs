//! Image-space to surface-space coordinate mapping
//!
//! This module contains the scale math shared between the presenter and
//! its tests. Nothing here touches a drawing surface.

use crate::region::FaceRegion;

/// A rectangle in surface coordinates, floored to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Ratio of surface width to the image's natural width.
///
/// A surface matching the image exactly yields 1.0; a surface at half the
/// image's width yields 0.5.
#[inline]
pub fn scale_factor(surface_width: u32, image_width: u32) -> f32 {
    surface_width as f32 / image_width as f32
}

/// Map a detected region into surface coordinates.
///
/// Each of x, y, width and height is multiplied by `scale` and floored, so
/// rectangles land on whole pixels and never extend past where the scaled
/// image content ends.
#[inline]
pub fn map_region(region: &FaceRegion, scale: f32) -> SurfaceRect {
    SurfaceRect {
        x: (region.x * scale).floor() as i32,
        y: (region.y * scale).floor() as i32,
        width: (region.width * scale).floor() as i32,
        height: (region.height * scale).floor() as i32,
    }
}
