use {
  crate::{
    error::Result,
    explorer::{Frame, FrameKind, Renderer},
    raster::EscapeGrid
  },
  image::RgbaImage,
  std::path::{Path, PathBuf}
};

mod colormap;
#[cfg(test)] mod tests;
pub use colormap::Colormap;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// An escape grid paired with the colormap it should be painted with.
#[derive(Debug, Copy, Clone)]
pub struct Texture<'a> {
  pub grid: &'a EscapeGrid,
  pub colormap: Colormap
}

impl EscapeGrid {
  pub fn texture(&self, colormap: Colormap) -> Texture<'_> {
    Texture { grid: self, colormap }
  }
}

/// Fills the whole image, the real axis horizontally and `ymax` on the top row.
/// Grids of a different size than the image are sampled nearest-neighbour.
impl Draw<RgbaImage> for Texture<'_> {
  fn draw(&self, image: &mut RgbaImage) {
    let (width, height) = self.grid.shape();
    let (img_w, img_h) = image.dimensions();
    let max_iter = self.grid.max_iter();

    itertools::iproduct!(0..img_h, 0..img_w)
      .for_each(|(y, x)| {
        let i = (x as u64 * width as u64 / img_w as u64) as u32;
        let j = height - 1 - (y as u64 * height as u64 / img_h as u64) as u32;
        if let (Some(count), Some(smooth)) = (self.grid.get(i, j), self.grid.smooth(i, j)) {
          image.put_pixel(x, y, self.colormap.color_smooth(count, smooth, max_iter));
        }
      });
  }
}

/// Image of the same size as `grid`.
pub fn render(grid: &EscapeGrid, colormap: Colormap) -> RgbaImage {
  let (width, height) = grid.shape();
  let mut image = RgbaImage::new(width, height);
  grid.texture(colormap).draw(&mut image);
  image
}

/// Paints every presented frame; full frames are optionally saved as `frame_NNNN.png`.
#[derive(Debug, Default)]
pub struct ImageRenderer {
  colormap: Colormap,
  output: Option<PathBuf>,
  last: Option<RgbaImage>,
  saved: Vec<PathBuf>
}

impl ImageRenderer {
  pub fn new(colormap: Colormap) -> Self {
    Self { colormap, ..Default::default() }
  }

  /// Creates `dir` if missing.
  pub fn with_output(mut self, dir: impl AsRef<Path>) -> Result<Self> {
    std::fs::create_dir_all(dir.as_ref())?;
    self.output = Some(dir.as_ref().to_path_buf());
    Ok(self)
  }

  /// Most recently presented frame, preview or full.
  pub fn last_image(&self) -> Option<&RgbaImage> {
    self.last.as_ref()
  }

  pub fn saved(&self) -> &[PathBuf] {
    &self.saved
  }
}

impl Renderer for ImageRenderer {
  fn present(&mut self, frame: &Frame) -> Result<()> {
    let image = render(&frame.grid, self.colormap);
    if let (Some(dir), FrameKind::Full) = (&self.output, frame.kind) {
      let path = dir.join(format!("frame_{:04}.png", frame.index));
      image.save(&path)?;
      tracing::debug!(path = %path.display(), "frame saved");
      self.saved.push(path);
    }
    self.last = Some(image);
    Ok(())
  }
}
