use anyhow::Result;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use image::DynamicImage;
use thiserror::Error;

use crate::region::FaceRegion;

/// Why a detection pass produced no overlay.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("face detection is not supported in this environment")]
    Unavailable,

    #[error("face detection failed: {0:#}")]
    Failed(anyhow::Error),
}

/// Pluggable face detection backend.
///
/// A detector receives the bound image and resolves asynchronously with
/// zero or more face regions in image coordinates. Region order is the
/// backend's own output order and is preserved all the way to the overlay.
pub trait FaceDetector {
    fn detect<'a>(&'a self, image: &'a DynamicImage) -> LocalBoxFuture<'a, Result<Vec<FaceRegion>>>;
}

/// What the environment told us about face detection support.
///
/// Resolved once when the presenter is assembled, so the rendering code
/// never probes the platform itself.
pub enum DetectionCapability {
    /// A detector is present and may be invoked.
    Available(Box<dyn FaceDetector>),
    /// The environment exposes no detector.
    Unavailable,
}

/// Detector that resolves with a preset region list.
///
/// Stands in for a live backend when regions come from a fixture file or a
/// prior offline run, and keeps tests independent of any platform support.
pub struct FixedDetector {
    regions: Vec<FaceRegion>,
}

impl FixedDetector {
    pub fn new(regions: Vec<FaceRegion>) -> Self {
        Self { regions }
    }
}

impl FaceDetector for FixedDetector {
    fn detect<'a>(
        &'a self,
        _image: &'a DynamicImage,
    ) -> LocalBoxFuture<'a, Result<Vec<FaceRegion>>> {
        let regions = self.regions.clone();
        async move { Ok(regions) }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_fixed_detector_resolves_preset_regions() {
        let regions = vec![
            FaceRegion::new(10.0, 20.0, 30.0, 40.0),
            FaceRegion::new(50.0, 60.0, 70.0, 80.0),
        ];
        let detector = FixedDetector::new(regions.clone());
        let img = DynamicImage::new_rgb8(4, 4);

        let found = block_on(detector.detect(&img)).unwrap();
        assert_eq!(found, regions);
    }

    #[test]
    fn test_fixed_detector_empty() {
        let detector = FixedDetector::new(vec![]);
        let img = DynamicImage::new_rgb8(4, 4);
        assert!(block_on(detector.detect(&img)).unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DetectError::Unavailable.to_string(),
            "face detection is not supported in this environment"
        );
        let err = DetectError::Failed(anyhow::anyhow!("backend offline"));
        assert_eq!(err.to_string(), "face detection failed: backend offline");
    }
}
