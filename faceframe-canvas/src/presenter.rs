use std::sync::Arc;

use image::DynamicImage;

use crate::detector::{DetectError, DetectionCapability};
use crate::geometry;
use crate::region::FaceRegion;
use crate::style::OverlayStyle;
use crate::summary::{DetectionSummary, SummarySink};
use crate::surface::Surface;

/// Drives the presentation flow for one image on one surface.
///
/// The presenter owns the surface and is its only mutator. Construction
/// draws the image immediately so the surface is never blank; a detection
/// pass replaces that baseline with the dimmed overlay, and only a fresh
/// `on_image_loaded` brings the baseline back.
pub struct SurfacePresenter {
    image: Arc<DynamicImage>,
    surface: Surface,
    capability: DetectionCapability,
    style: OverlayStyle,
    sink: Option<Box<dyn SummarySink>>,
    scale: f32,
}

impl SurfacePresenter {
    /// Bind an image to a surface, compute the initial scale factor, and
    /// draw the image stretched over the surface's current extent.
    pub fn new(image: Arc<DynamicImage>, surface: Surface) -> Self {
        let scale = geometry::scale_factor(surface.width(), image.width());
        let mut presenter = Self {
            image,
            surface,
            capability: DetectionCapability::Unavailable,
            style: OverlayStyle::default(),
            sink: None,
            scale,
        };
        presenter.render_image();
        presenter
    }

    /// Set the detection capability (default: `Unavailable`).
    pub fn capability(mut self, capability: DetectionCapability) -> Self {
        self.capability = capability;
        self
    }

    /// Set the overlay style (default: `OverlayStyle::default()`).
    pub fn style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    /// Attach a sink for the textual summary (default: none).
    pub fn summary_sink(mut self, sink: Box<dyn SummarySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Current image-to-surface scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The bound drawing surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Draw the bound image stretched over the whole surface.
    pub fn render_image(&mut self) {
        self.surface.fill_image(&self.image);
    }

    /// Resize the surface to the image's natural dimensions.
    ///
    /// Image and surface coordinates coincide afterwards, so the scale
    /// factor becomes exactly 1.0.
    pub fn resize_to_image(&mut self) {
        self.surface.resize(self.image.width(), self.image.height());
        self.scale = geometry::scale_factor(self.surface.width(), self.image.width());
    }

    /// Handle the image becoming ready: adopt its dimensions and redraw.
    ///
    /// Establishes the clean baseline all later overlays composite onto.
    /// Calling it again with nothing changed reproduces the same pixels.
    pub fn on_image_loaded(&mut self) {
        self.resize_to_image();
        self.render_image();
    }

    /// Run one detection pass and render its overlay.
    ///
    /// A missing capability or a failing detector is reported through the
    /// log and leaves the surface exactly as it was. Nothing is rethrown.
    /// Repeated passes are independent and never deduplicated; the pass
    /// that completes last determines the surface contents.
    pub async fn run_detection(&mut self) {
        if let Err(err) = self.detect_and_render().await {
            log::error!("{}", err);
        }
    }

    async fn detect_and_render(&mut self) -> Result<DetectionSummary, DetectError> {
        let detector = match &self.capability {
            DetectionCapability::Available(detector) => detector,
            DetectionCapability::Unavailable => return Err(DetectError::Unavailable),
        };
        let regions = detector
            .detect(&self.image)
            .await
            .map_err(DetectError::Failed)?;
        Ok(self.render_overlay(&regions))
    }

    /// Replace the surface contents with the detection overlay: dimmed
    /// backdrop, one dashed outline per region, and the summary line.
    ///
    /// Regions arrive in image coordinates and are mapped through the
    /// scale factor, which is recomputed here so rectangles always agree
    /// with the surface's present size. Every region is drawn, in input
    /// order; none are skipped or merged.
    pub fn render_overlay(&mut self, regions: &[FaceRegion]) -> DetectionSummary {
        self.scale = geometry::scale_factor(self.surface.width(), self.image.width());

        self.surface.dim(self.style.dim_opacity);
        for region in regions {
            let rect = geometry::map_region(region, self.scale);
            self.surface.stroke_rect(&rect, &self.style);
        }

        let summary = DetectionSummary {
            count: regions.len(),
        };
        log::debug!("overlay rendered: {}", summary);
        if let Some(sink) = self.sink.as_mut() {
            sink.show(&summary);
        }
        summary
    }
}
