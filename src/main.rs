use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceframe::config;
use faceframe_canvas::{
    DetectionCapability, DetectionSummary, FaceRegion, FixedDetector, Surface, SurfacePresenter,
    SummarySink,
};
use futures::executor::block_on;
use log::{info, warn};

#[derive(Parser)]
#[command(name = "faceframe")]
#[command(
    version,
    about = "Face detection overlay demo - dashed boxes over detected faces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image onto a surface without detection
    Render {
        /// Path to the input image
        image: PathBuf,
        /// Surface width (defaults to the image width)
        #[arg(long)]
        width: Option<u32>,
        /// Surface height (defaults to the image height)
        #[arg(long)]
        height: Option<u32>,
        /// Output PNG path (defaults to <image>.out.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Detect faces and render the overlay
    Detect {
        /// Path to the input image
        image: PathBuf,
        /// JSON file of face regions (defaults to <image>.faces.json if present)
        #[arg(short, long)]
        regions: Option<PathBuf>,
        /// Surface width (defaults to the image width)
        #[arg(long)]
        width: Option<u32>,
        /// Surface height (defaults to the image height)
        #[arg(long)]
        height: Option<u32>,
        /// Output PNG path (defaults to <image>.overlay.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open config file in editor
    Config,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Render {
            image,
            width,
            height,
            output,
        } => render(&image, width, height, output),
        Commands::Detect {
            image,
            regions,
            width,
            height,
            output,
        } => detect(&cfg, &image, regions.as_deref(), width, height, output),
        Commands::Config => open_config(),
    }
}

/// Prints the summary line to stdout with the count emphasized.
struct ConsoleSummary;

impl SummarySink for ConsoleSummary {
    fn show(&mut self, summary: &DetectionSummary) {
        println!("\x1b[1m{}\x1b[0m Faces Detected", summary.count);
    }
}

fn render(
    image_path: &Path,
    width: Option<u32>,
    height: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let image = image::open(image_path)
        .with_context(|| format!("opening image {}", image_path.display()))?;
    info!("Image size: {}x{}", image.width(), image.height());

    let surf_w = width.unwrap_or(image.width());
    let surf_h = height.unwrap_or(image.height());
    let surface = Surface::new(surf_w, surf_h).context("surface dimensions must be nonzero")?;

    let presenter = SurfacePresenter::new(Arc::new(image), surface);
    info!("Scale factor: {:.3}", presenter.scale());

    let out = output.unwrap_or_else(|| default_output(image_path, "out"));
    presenter
        .surface()
        .to_image()?
        .save(&out)
        .with_context(|| format!("writing {}", out.display()))?;

    info!("✓ Rendered image to {}", out.display());
    Ok(())
}

fn detect(
    cfg: &config::Config,
    image_path: &Path,
    regions: Option<&Path>,
    width: Option<u32>,
    height: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let image = image::open(image_path)
        .with_context(|| format!("opening image {}", image_path.display()))?;
    info!("Image size: {}x{}", image.width(), image.height());

    let surf_w = width.unwrap_or(image.width());
    let surf_h = height.unwrap_or(image.height());
    let surface = Surface::new(surf_w, surf_h).context("surface dimensions must be nonzero")?;

    let capability = resolve_capability(image_path, regions)?;
    if matches!(capability, DetectionCapability::Unavailable) {
        warn!("No region source found; detection will be unavailable");
    }

    let mut presenter = SurfacePresenter::new(Arc::new(image), surface)
        .style(cfg.style.clone())
        .capability(capability)
        .summary_sink(Box::new(ConsoleSummary));

    block_on(presenter.run_detection());

    let out = output.unwrap_or_else(|| default_output(image_path, "overlay"));
    presenter
        .surface()
        .to_image()?
        .save(&out)
        .with_context(|| format!("writing {}", out.display()))?;

    info!("✓ Saved overlay to {}", out.display());
    Ok(())
}

/// Build the detection capability from a region fixture: an explicit
/// `--regions` file, or a `<image>.faces.json` sidecar when one exists.
fn resolve_capability(
    image_path: &Path,
    regions: Option<&Path>,
) -> Result<DetectionCapability> {
    let path = match regions {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let sidecar = image_path.with_extension("faces.json");
            if sidecar.exists() {
                Some(sidecar)
            } else {
                None
            }
        }
    };

    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading regions at {}", path.display()))?;
            let regions: Vec<FaceRegion> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing regions {}", path.display()))?;
            info!("Loaded {} region(s) from {}", regions.len(), path.display());
            Ok(DetectionCapability::Available(Box::new(FixedDetector::new(
                regions,
            ))))
        }
        None => Ok(DetectionCapability::Unavailable),
    }
}

fn default_output(image_path: &Path, tag: &str) -> PathBuf {
    image_path.with_extension(format!("{}.png", tag))
}

fn open_config() -> Result<()> {
    let config_path = config::CONFIG_PATH.as_os_str();
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
