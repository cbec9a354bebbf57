use {
  crate::{
    error::{Error, Result},
    geometry::Region
  },
  rand::Rng
};

/// How many times each successive region shrinks along both axes. Always finite and `> 1`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
  pub fn new(factor: f64) -> Result<Self> {
    if !factor.is_finite() || factor <= 1.0 {
      return Err(Error::InvalidZoomFactor(factor));
    }
    Ok(Self(factor))
  }

  pub fn get(self) -> f64 {
    self.0
  }
}

impl Default for ZoomFactor {
  fn default() -> Self {
    Self(2.0)
  }
}

impl TryFrom<f64> for ZoomFactor {
  type Error = Error;

  fn try_from(factor: f64) -> Result<Self> {
    Self::new(factor)
  }
}

/// Picks a sub-region `zoom` times smaller than `region`, placed uniformly at random so that it
/// never leaves the parent bounds.
///
/// The randomness comes entirely from `rng`; seed it to replay an exploration.
/// Fails only once `f64` runs out of precision and the new extent collapses to a point.
pub fn random_zoom<R: Rng + ?Sized>(region: &Region, zoom: ZoomFactor, rng: &mut R) -> Result<Region> {
  let x_zoom_range = region.width() / zoom.get();
  let y_zoom_range = region.height() / zoom.get();

  let x_min = rng.gen_range(region.xmin()..=(region.xmax() - x_zoom_range).max(region.xmin()));
  let y_min = rng.gen_range(region.ymin()..=(region.ymax() - y_zoom_range).max(region.ymin()));

  // rounding of `min + range` may overshoot the parent by an ulp
  Region::new(
    x_min,
    (x_min + x_zoom_range).min(region.xmax()),
    y_min,
    (y_min + y_zoom_range).min(region.ymax())
  )
}
