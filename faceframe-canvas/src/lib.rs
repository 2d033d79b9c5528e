pub mod detector;
pub mod geometry;
pub mod presenter;
pub mod region;
pub mod style;
pub mod summary;
pub mod surface;

// Re-export commonly used types
pub use detector::{DetectError, DetectionCapability, FaceDetector, FixedDetector};
pub use presenter::SurfacePresenter;
pub use region::FaceRegion;
pub use style::OverlayStyle;
pub use summary::{DetectionSummary, SummarySink};
pub use surface::Surface;
