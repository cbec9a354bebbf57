//! The zoom animation: rasterize the current region, hand the grid to a [`Renderer`], shrink
//! the region at random, repeat.

use {
  crate::{
    config::ExplorerConfig,
    error::Result,
    geometry::Region,
    profile,
    raster::{rasterize_preview, rasterize_with, EscapeGrid},
    zoom::random_zoom
  },
  rand::Rng
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameKind {
  /// Coarse tiles, shown while the full frame is being computed.
  Preview,
  Full
}

#[derive(Debug, Clone)]
pub struct Frame {
  pub index: usize,
  pub kind: FrameKind,
  pub region: Region,
  pub grid: EscapeGrid
}

/// Receives every frame, e.g. to put it on screen or into a file.
pub trait Renderer {
  fn present(&mut self, frame: &Frame) -> Result<()>;
}

impl<F> Renderer for F where F: FnMut(&Frame) -> Result<()> {
  fn present(&mut self, frame: &Frame) -> Result<()> {
    self(frame)
  }
}

#[derive(Debug, Clone)]
pub struct Explorer {
  config: ExplorerConfig
}

impl Explorer {
  pub fn new(config: ExplorerConfig) -> Result<Self> {
    Ok(Self { config: config.validate()? })
  }

  pub fn config(&self) -> &ExplorerConfig {
    &self.config
  }

  /// Full frame of `region` with the configured size, bound and strategy.
  pub fn frame(&self, index: usize, region: Region) -> Result<Frame> {
    let ExplorerConfig { size, max_iter, strategy, .. } = self.config;
    let grid = profile!(
      format!("frame #{}", index),
      rasterize_with(strategy, &region, size, max_iter)?
    );
    Ok(Frame { index, kind: FrameKind::Full, region, grid })
  }

  /// Coarse frame of `region`, `None` unless a preview block size is configured.
  pub fn preview(&self, index: usize, region: Region) -> Result<Option<Frame>> {
    let ExplorerConfig { size, max_iter, preview_block, .. } = self.config;
    preview_block.map(|block| {
      let grid = rasterize_preview(&region, size, block, max_iter)?;
      Ok(Frame { index, kind: FrameKind::Preview, region, grid })
    }).transpose()
  }

  /// Lazy sequence of the configured number of full frames. The first frame shows the initial
  /// region, each following one a random sub-region of its predecessor.
  ///
  /// Stops after the first error.
  pub fn frames<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Frames<'a, R> {
    Frames {
      explorer: self,
      rng,
      region: Some(self.config.region),
      index: 0
    }
  }

  /// Drives `renderer` through the whole animation, sleeping `frame_delay` after each frame.
  /// Returns the number of full frames presented.
  pub fn run<R: Rng + ?Sized>(&self, renderer: &mut impl Renderer, rng: &mut R) -> Result<usize> {
    let mut region = self.config.region;
    for index in 0..self.config.frames {
      if index > 0 {
        region = random_zoom(&region, self.config.zoom_factor, rng)?;
      }
      tracing::info!(frame = index, %region, "rendering");

      if let Some(preview) = self.preview(index, region)? {
        renderer.present(&preview)?;
      }
      renderer.present(&self.frame(index, region)?)?;

      if !self.config.frame_delay.is_zero() {
        std::thread::sleep(self.config.frame_delay);
      }
    }
    Ok(self.config.frames)
  }
}

pub struct Frames<'a, R: ?Sized> {
  explorer: &'a Explorer,
  rng: &'a mut R,
  region: Option<Region>,
  index: usize
}

impl<'a, R: Rng + ?Sized> Iterator for Frames<'a, R> {
  type Item = Result<Frame>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.index >= self.explorer.config.frames {
      return None;
    }
    let region = self.region.take()?;
    let frame = self.explorer.frame(self.index, region);
    if frame.is_ok() && self.index + 1 < self.explorer.config.frames {
      match random_zoom(&region, self.explorer.config.zoom_factor, &mut *self.rng) {
        Ok(next) => self.region = Some(next),
        Err(e) => {
          tracing::warn!(frame = self.index, "cannot zoom any further: {}", e);
          self.index = self.explorer.config.frames;
        }
      }
    }
    self.index += 1;
    tracing::debug!(frame = self.index - 1, "frame ready");
    Some(frame)
  }
}
