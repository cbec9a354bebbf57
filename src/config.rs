use {
  crate::{
    error::{Error, Result},
    geometry::{validate_size, GridSize, Region},
    raster::Strategy,
    zoom::ZoomFactor
  },
  std::time::Duration
};

/// Everything one exploration run needs, passed explicitly into the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
  pub size: GridSize,
  pub max_iter: u32,
  pub zoom_factor: ZoomFactor,
  /// Starting region; every following frame is nested inside it.
  pub region: Region,
  pub frames: usize,
  /// Pause after each presented frame.
  pub frame_delay: Duration,
  pub strategy: Strategy,
  /// When set, a coarse preview with tiles of this size is presented before each frame.
  pub preview_block: Option<u32>,
  /// `None` lets the driver pick a seed.
  pub seed: Option<u64>
}

impl Default for ExplorerConfig {
  fn default() -> Self {
    Self {
      size: GridSize::new(1000, 800),
      max_iter: 100,
      zoom_factor: ZoomFactor::default(),
      region: Region::default(),
      frames: 10,
      frame_delay: Duration::from_millis(1250),
      strategy: Strategy::Parallel,
      preview_block: None,
      seed: None
    }
  }
}

impl ExplorerConfig {
  /// Region and zoom factor are valid by construction; this checks the rest.
  pub fn validate(self) -> Result<Self> {
    validate_size(self.size)?;
    if self.preview_block == Some(0) {
      return Err(Error::InvalidBlockSize);
    }
    Ok(self)
  }

  pub fn with_size(self, width: u32, height: u32) -> Self {
    Self { size: GridSize::new(width, height), ..self }
  }

  pub fn with_max_iter(self, max_iter: u32) -> Self {
    Self { max_iter, ..self }
  }

  pub fn with_zoom_factor(self, zoom_factor: ZoomFactor) -> Self {
    Self { zoom_factor, ..self }
  }

  pub fn with_region(self, region: Region) -> Self {
    Self { region, ..self }
  }

  pub fn with_frames(self, frames: usize) -> Self {
    Self { frames, ..self }
  }

  pub fn with_frame_delay(self, frame_delay: Duration) -> Self {
    Self { frame_delay, ..self }
  }

  pub fn with_strategy(self, strategy: Strategy) -> Self {
    Self { strategy, ..self }
  }

  pub fn with_preview_block(self, preview_block: Option<u32>) -> Self {
    Self { preview_block, ..self }
  }

  pub fn with_seed(self, seed: Option<u64>) -> Self {
    Self { seed, ..self }
  }
}
