//! Plane and pixel coordinate spaces, regions and grid sizes.
//!
//! The real axis grows to the right and the imaginary axis grows upwards. Pixel space has its
//! origin in the top-left corner, like an image buffer.

use {
  crate::error::{Error, Result},
  euclid::{Box2D, Point2D, Size2D},
  num_complex::Complex
};

/// Complex plane basis
#[derive(Debug, Copy, Clone)]
pub struct PlaneSpace;
/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// A point of the complex plane, `re + im·i`.
pub type Coordinate = Complex<f64>;
pub type PlanePoint = Point2D<f64, PlaneSpace>;
pub type GridSize = Size2D<u32, PixelSpace>;

/// Axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]` of the complex plane.
///
/// Always satisfies `xmin < xmax` and `ymin < ymax` with finite bounds; the only way to obtain
/// one is through [`Region::new`], so every `Region` in circulation is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region(Box2D<f64, PlaneSpace>);

impl Region {
  pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
    let finite = [xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite());
    if !finite || xmin >= xmax || ymin >= ymax {
      return Err(Error::InvalidRegion { xmin, xmax, ymin, ymax });
    }
    Ok(Self(Box2D::new(
      Point2D::new(xmin, ymin),
      Point2D::new(xmax, ymax)
    )))
  }

  /// Region of the given extents, centred on `center`.
  pub fn from_center(center: PlanePoint, width: f64, height: f64) -> Result<Self> {
    Self::new(
      center.x - width / 2.0,
      center.x + width / 2.0,
      center.y - height / 2.0,
      center.y + height / 2.0
    )
  }

  pub fn xmin(&self) -> f64 { self.0.min.x }
  pub fn xmax(&self) -> f64 { self.0.max.x }
  pub fn ymin(&self) -> f64 { self.0.min.y }
  pub fn ymax(&self) -> f64 { self.0.max.y }

  pub fn width(&self) -> f64 { self.0.width() }
  pub fn height(&self) -> f64 { self.0.height() }

  pub fn center(&self) -> PlanePoint {
    self.0.center()
  }

  /// `[xmin, xmax, ymin, ymax]`, the order image viewers take an extent in.
  pub fn extent(&self) -> [f64; 4] {
    [self.xmin(), self.xmax(), self.ymin(), self.ymax()]
  }

  /// Whether `other` lies entirely inside `self`, boundary included.
  pub fn contains(&self, other: &Region) -> bool {
    other.xmin() >= self.xmin() && other.xmax() <= self.xmax() &&
    other.ymin() >= self.ymin() && other.ymax() <= self.ymax()
  }

  pub fn to_box2d(&self) -> Box2D<f64, PlaneSpace> {
    self.0
  }
}

impl Default for Region {
  /// The classic full view of the set, `[-2, 1] x [-1.5, 1.5]`.
  fn default() -> Self {
    Self(Box2D::new(
      Point2D::new(-2.0, -1.5),
      Point2D::new(1.0, 1.5)
    ))
  }
}

impl std::fmt::Display for Region {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{:.6e}, {:.6e}] x [{:.6e}, {:.6e}]", self.xmin(), self.xmax(), self.ymin(), self.ymax())
  }
}

impl std::str::FromStr for Region {
  type Err = anyhow::Error;

  /// Parses `xmin,xmax,ymin,ymax`.
  fn from_str(s: &str) -> anyhow::Result<Self> {
    let values = s.split(',')
      .map(|v| v.trim().parse::<f64>())
      .collect::<std::result::Result<Vec<_>, _>>()?;
    match values.as_slice() {
      &[xmin, xmax, ymin, ymax] => Ok(Region::new(xmin, xmax, ymin, ymax)?),
      _ => anyhow::bail!("expected four comma-separated bounds `xmin,xmax,ymin,ymax`, got {:?}", s)
    }
  }
}

/// Checks a pixel grid size, so that nothing gets allocated for an empty grid.
pub fn validate_size(size: GridSize) -> Result<GridSize> {
  if size.width == 0 || size.height == 0 {
    return Err(Error::InvalidDimensions { width: size.width, height: size.height });
  }
  Ok(size)
}
