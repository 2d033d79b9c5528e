use std::sync::Arc;

use anyhow::{Context, Result};
use futures::executor::block_on;
use image::{DynamicImage, Rgba, RgbaImage};

use faceframe_canvas::{
    DetectionCapability, DetectionSummary, FaceRegion, FixedDetector, Surface, SurfacePresenter,
    SummarySink,
};

struct ConsoleSummary;

impl SummarySink for ConsoleSummary {
    fn show(&mut self, summary: &DetectionSummary) {
        println!("{}", summary);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Synthetic 640x480 "photo": warm backdrop with two darker face-sized blocks
    let mut img = RgbaImage::from_pixel(640, 480, Rgba([205, 180, 150, 255]));
    for (bx, by) in [(150u32, 120u32), (390, 200)] {
        for y in by..by + 110 {
            for x in bx..bx + 90 {
                img.put_pixel(x, y, Rgba([150, 110, 90, 255]));
            }
        }
    }
    let image = Arc::new(DynamicImage::ImageRgba8(img));
    println!("Image size: {}x{}", image.width(), image.height());

    let surface = Surface::new(640, 480).context("building surface")?;
    let mut presenter = SurfacePresenter::new(image, surface)
        .capability(DetectionCapability::Available(Box::new(FixedDetector::new(
            vec![
                FaceRegion::new(150.0, 120.0, 90.0, 110.0),
                FaceRegion::new(390.0, 200.0, 90.0, 110.0),
            ],
        ))))
        .summary_sink(Box::new(ConsoleSummary));

    presenter.on_image_loaded();
    block_on(presenter.run_detection());

    let out = "overlay_demo.png";
    presenter.surface().to_image()?.save(out)?;
    println!("Saved {}", out);

    Ok(())
}
