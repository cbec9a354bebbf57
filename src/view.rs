//! Interactive-style view: a camera centred on a point of the plane, zoomed in or out around
//! clicked pixels and dragged by pixel offsets.

use {
  crate::{
    error::Result,
    geometry::{validate_size, GridSize, PixelSpace, PlaneSpace, PlanePoint, Region},
    zoom::ZoomFactor
  },
  euclid::{Point2D, Vector2D}
};

/// Width of the plane visible at `zoom_level = 1`.
pub const BASE_VIEW_WIDTH: f64 = 3.0;
/// Iteration bound never grows past this while zooming in.
pub const MAX_ITER_CAP: u32 = 100_000;
const ITER_GROWTH: f64 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
  In,
  Out
}

/// A view of the plane sized to a pixel grid.
///
/// Click-to-zoom exploration, one rendered frame per interaction:
///
/// ```
/// # use {
/// #   mandelzoom::{
/// #     geometry::GridSize,
/// #     raster::rasterize,
/// #     view::{Camera, ZoomDirection},
/// #     zoom::ZoomFactor,
/// #   },
/// #   euclid::{Point2D, Vector2D},
/// # };
/// # fn main() -> anyhow::Result<()> {
/// let mut camera = Camera::new(GridSize::new(64, 48))?;
/// let factor = ZoomFactor::new(2.0)?;
/// for click in [Point2D::new(10, 20), Point2D::new(40, 30)] {
///   let target = camera.pixel_to_plane(click)?;
///   camera.zoom_at(click, factor, ZoomDirection::In)?;
///   assert_eq!(camera.center, target);
///   let grid = rasterize(&camera.region()?, camera.size(), camera.max_iter)?;
///   assert_eq!(grid.shape(), (64, 48));
/// }
/// assert_eq!(camera.zoom_level, 4.0);
/// assert_eq!(camera.max_iter, 121);
///
/// camera.pan(Vector2D::new(-8, 4))?;
/// camera.reset();
/// assert_eq!(camera, Camera::new(GridSize::new(64, 48))?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
  pub center: PlanePoint,
  pub zoom_level: f64,
  pub max_iter: u32,
  size: GridSize
}

impl Camera {
  pub fn new(size: GridSize) -> Result<Self> {
    Ok(Self {
      center: Point2D::new(-0.5, 0.0),
      zoom_level: 1.0,
      max_iter: 100,
      size: validate_size(size)?
    })
  }

  pub fn with_center(self, center: PlanePoint) -> Self {
    Self { center, ..self }
  }

  pub fn with_zoom_level(self, zoom_level: f64) -> Self {
    Self { zoom_level, ..self }
  }

  pub fn size(&self) -> GridSize {
    self.size
  }

  /// The visible region; its aspect ratio follows the pixel grid.
  pub fn region(&self) -> Result<Region> {
    let width = BASE_VIEW_WIDTH / self.zoom_level;
    let height = width * self.size.height as f64 / self.size.width as f64;
    Region::from_center(self.center, width, height)
  }

  /// Plane distance between neighbouring pixel samples. Matches [`crate::raster::linspace`], so
  /// the first and last pixel of each axis sit on the region boundary.
  fn pixel_step(&self, region: &Region) -> Vector2D<f64, PlaneSpace> {
    let intervals = |n: u32| n.max(2) as f64 - 1.0;
    Vector2D::new(
      region.width() / intervals(self.size.width),
      region.height() / intervals(self.size.height)
    )
  }

  /// The plane point sampled at `pixel` in a rendered view: row 0 is `ymax`, column 0 is `xmin`.
  pub fn pixel_to_plane(&self, pixel: Point2D<u32, PixelSpace>) -> Result<PlanePoint> {
    let region = self.region()?;
    let step = self.pixel_step(&region);
    // row `y` shows imaginary-axis sample `height - 1 - y`
    let row = self.size.height as f64 - 1.0 - pixel.y as f64;
    Ok(Point2D::new(
      region.xmin() + pixel.x as f64 * step.x,
      region.ymin() + row * step.y
    ))
  }

  /// Recentres on `pixel`, then zooms by `factor`. Zooming in also deepens the iteration bound
  /// by 10%, up to [`MAX_ITER_CAP`].
  pub fn zoom_at(&mut self, pixel: Point2D<u32, PixelSpace>, factor: ZoomFactor, direction: ZoomDirection) -> Result<()> {
    let center = self.pixel_to_plane(pixel)?;
    let zoom_level = match direction {
      ZoomDirection::In => self.zoom_level * factor.get(),
      ZoomDirection::Out => self.zoom_level / factor.get()
    };
    let next = self.clone()
      .with_center(center)
      .with_zoom_level(zoom_level);
    next.region()?;

    *self = next;
    if direction == ZoomDirection::In {
      self.max_iter = ((self.max_iter as f64 * ITER_GROWTH) as u32).min(MAX_ITER_CAP);
    }
    tracing::debug!(center = ?self.center, zoom_level = self.zoom_level, max_iter = self.max_iter, "zoom");
    Ok(())
  }

  /// Moves the view by whole pixels: positive `x` moves right, positive `y` moves down the
  /// rendered image.
  pub fn pan(&mut self, delta: Vector2D<i64, PixelSpace>) -> Result<()> {
    let region = self.region()?;
    let step = self.pixel_step(&region);
    let offset = Vector2D::new(delta.x as f64 * step.x, -(delta.y as f64) * step.y);
    let next = self.clone().with_center(self.center + offset);
    next.region()?;
    *self = next;
    Ok(())
  }

  pub fn reset(&mut self) {
    let size = self.size;
    *self = Self {
      center: Point2D::new(-0.5, 0.0),
      zoom_level: 1.0,
      max_iter: 100,
      size
    };
  }
}
