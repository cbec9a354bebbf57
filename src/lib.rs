//! Escape-time rendering of the Mandelbrot set, and a random-zoom exploration built on top of it.
//!
//! The crate is split into the numeric core ([`escape`], [`raster`], [`zoom`]), an explicit
//! run configuration ([`config`]), the frame loop ([`explorer`]) and, behind the `drawing`
//! feature, colormaps and an image-backed renderer ([`drawing`]).
//!
//! # Basic usage
//! ```
//! # use {
//! #   mandelzoom::{
//! #     geometry::{GridSize, Region},
//! #     raster::rasterize,
//! #     zoom::{random_zoom, ZoomFactor},
//! #   },
//! #   rand::SeedableRng,
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let region = Region::new(-2.0, 1.0, -1.5, 1.5)?;
//! // escape counts of a 100x80 sampling, first axis along the real axis
//! let grid = rasterize(&region, GridSize::new(100, 80), 100)?;
//! assert_eq!(grid.shape(), (100, 80));
//!
//! // a random sub-region half the size, reproducible through the seed
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let next = random_zoom(&region, ZoomFactor::new(2.0)?, &mut rng)?;
//! assert!(region.contains(&next));
//! # Ok(())
//! # }
//! ```
//!
//! The whole animation is driven by [`explorer::Explorer`], which feeds every frame to a
//! [`explorer::Renderer`]. Any `FnMut(&Frame) -> Result<()>` is a renderer; with the `drawing`
//! feature, [`drawing::ImageRenderer`] paints frames into `RgbaImage`s and can save them.

pub mod error;
pub mod geometry;
pub mod escape;
pub mod raster;
pub mod zoom;
pub mod view;
pub mod config;
pub mod explorer;
#[cfg(feature = "drawing")]
pub mod drawing;
pub mod util;

#[doc(hidden)]
pub use tracing as __tracing;
