pub mod config;

// Re-export canvas types for convenience
pub use faceframe_canvas::{
    detector, presenter, surface, DetectError, DetectionCapability, DetectionSummary, FaceRegion,
    FixedDetector, OverlayStyle, SummarySink, Surface, SurfacePresenter,
};
