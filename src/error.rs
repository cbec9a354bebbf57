//! Error taxonomy of the crate.
//!
//! Every error here is a contract violation detected before any work is done: nothing is retried,
//! and nothing is downgraded to a default value.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid grid dimensions {width}x{height}: both sides must be positive")]
  InvalidDimensions { width: u32, height: u32 },

  #[error("invalid region [{xmin}, {xmax}] x [{ymin}, {ymax}]: bounds must be finite with min < max")]
  InvalidRegion { xmin: f64, xmax: f64, ymin: f64, ymax: f64 },

  #[error("invalid zoom factor {0}: must be finite and greater than 1")]
  InvalidZoomFactor(f64),

  #[error("negative iteration bound {0}")]
  NegativeIterationBound(i64),

  #[error("iteration bound {0} does not fit into 32 bits")]
  IterationBoundOverflow(i64),

  #[error("preview block size must be positive")]
  InvalidBlockSize,

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
