use serde::{Deserialize, Serialize};

/// Bounding box of a detected face, in the source image's coordinate space.
///
/// Detectors report regions in image pixels regardless of how the surface is
/// currently sized; mapping into surface pixels happens at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRegion {
    /// X coordinate of the top-left corner (pixels).
    pub x: f32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: f32,
    /// Width of the bounding box (pixels).
    pub width: f32,
    /// Height of the bounding box (pixels).
    pub height: f32,
}

impl FaceRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
