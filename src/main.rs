//! Random-zoom Mandelbrot explorer.

use {
  mandelzoom::{
    config::ExplorerConfig,
    drawing::{Colormap, ImageRenderer},
    escape::iteration_bound,
    explorer::Explorer,
    geometry::{GridSize, PlanePoint, Region},
    raster::Strategy,
    view::Camera,
    zoom::ZoomFactor
  },
  anyhow::Result,
  clap::Parser,
  rand::SeedableRng,
  std::{path::PathBuf, time::Duration}
};

#[derive(Debug, Parser)]
#[command(name = "mandelzoom", version, about = "Zoom into random corners of the Mandelbrot set")]
struct Args {
  /// Frame width in pixels
  #[arg(long, default_value_t = 1000)]
  width: u32,
  /// Frame height in pixels
  #[arg(long, default_value_t = 800)]
  height: u32,
  /// Iteration bound per pixel
  #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
  max_iter: i64,
  /// How many times each frame shrinks, must be > 1
  #[arg(long, default_value_t = 2.0)]
  zoom: f64,
  /// Starting region `xmin,xmax,ymin,ymax`
  #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["center", "zoom_level"])]
  region: Option<Region>,
  /// Start from a camera centred on `re,im`
  #[arg(long, allow_hyphen_values = true, value_parser = parse_center)]
  center: Option<PlanePoint>,
  /// Camera magnification, 1 shows a 3 units wide view
  #[arg(long)]
  zoom_level: Option<f64>,
  /// Number of frames to render
  #[arg(long, default_value_t = 10)]
  frames: usize,
  /// Pause after each frame
  #[arg(long, default_value_t = 1250)]
  delay_ms: u64,
  /// Seed of the zoom path; a random one is drawn and logged when omitted
  #[arg(long)]
  seed: Option<u64>,
  /// Present a coarse preview with tiles of this size before each frame
  #[arg(long)]
  preview_block: Option<u32>,
  /// Evaluate pixels on a single thread
  #[arg(long)]
  sequential: bool,
  /// hot, sine or gray
  #[arg(long, default_value = "hot")]
  colormap: Colormap,
  /// Directory to save frames into
  #[arg(long)]
  output: Option<PathBuf>
}

fn parse_center(s: &str) -> Result<PlanePoint, String> {
  let (re, im) = s.split_once(',')
    .ok_or_else(|| format!("expected `re,im`, got {:?}", s))?;
  let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| e.to_string());
  Ok(PlanePoint::new(parse(re)?, parse(im)?))
}

impl Args {
  fn config(&self) -> Result<ExplorerConfig> {
    let size = GridSize::new(self.width, self.height);
    let region = match (self.region, self.center, self.zoom_level) {
      (Some(region), _, _) => region,
      (None, None, None) => Region::default(),
      (None, center, zoom_level) => {
        let camera = Camera::new(size)?;
        let center = center.unwrap_or(camera.center);
        let zoom_level = zoom_level.unwrap_or(camera.zoom_level);
        camera.with_center(center).with_zoom_level(zoom_level).region()?
      }
    };

    Ok(ExplorerConfig::default()
      .with_size(self.width, self.height)
      .with_max_iter(iteration_bound(self.max_iter)?)
      .with_zoom_factor(ZoomFactor::new(self.zoom)?)
      .with_region(region)
      .with_frames(self.frames)
      .with_frame_delay(Duration::from_millis(self.delay_ms))
      .with_strategy(if self.sequential { Strategy::Sequential } else { Strategy::Parallel })
      .with_preview_block(self.preview_block)
      .with_seed(self.seed)
      .validate()?)
  }
}

fn main() -> Result<()> {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .try_init();

  let args = Args::parse();
  let config = args.config()?;
  let seed = config.seed.unwrap_or_else(rand::random);
  tracing::info!(seed, region = %config.region, "starting exploration");

  let explorer = Explorer::new(config)?;
  let mut renderer = ImageRenderer::new(args.colormap);
  if let Some(dir) = &args.output {
    renderer = renderer.with_output(dir)?;
  }
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);

  let frames = explorer.run(&mut renderer, &mut rng)?;
  tracing::info!(frames, saved = renderer.saved().len(), "done");
  Ok(())
}
