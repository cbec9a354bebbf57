use {
  crate::{
    error::{Error, Result},
    escape::{escape_time_smooth, smooth_count},
    geometry::{validate_size, Coordinate, GridSize, Region}
  },
  std::fmt::{Debug, Formatter}
};


/// `num` evenly spaced samples over `[start, end]`, both endpoints included.
/// A single sample is `start`.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
  match num {
    0 => vec![],
    1 => vec![start],
    _ => {
      let step = (end - start) / (num - 1) as f64;
      let mut samples = (0..num)
        .map(|i| start + i as f64 * step)
        .collect::<Vec<_>>();
      samples[num - 1] = end;
      samples
    }
  }
}

/// How the grid cells get evaluated. The output is identical for every strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
  Sequential,
  #[default]
  Parallel
}

/// Escape counts of a `width x height` sampling of a region, with their continuous
/// (smoothed) counterparts for banding-free coloring.
///
/// The first axis indexes real-axis samples, the second imaginary-axis samples, so `get(i, j)`
/// is the count at `(x_i, y_j)`. Renderers have to transpose it to put the real axis horizontally,
/// see [`EscapeGrid::transposed_rows`].
#[derive(Clone, PartialEq)]
pub struct EscapeGrid {
  data: Vec<u32>,
  smooth: Vec<f32>,
  width: u32,
  height: u32,
  max_iter: u32
}

impl EscapeGrid {
  /// Column-major: column `i` holds all imaginary-axis samples of `x_i`.
  fn from_columns(data: Vec<u32>, smooth: Vec<f32>, size: GridSize, max_iter: u32) -> Self {
    debug_assert_eq!(data.len(), cell_count(size));
    debug_assert_eq!(smooth.len(), data.len());
    Self {
      data,
      smooth,
      width: size.width,
      height: size.height,
      max_iter
    }
  }

  /// `(width, height)`
  pub fn shape(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  pub fn max_iter(&self) -> u32 {
    self.max_iter
  }

  pub fn get(&self, i: u32, j: u32) -> Option<u32> {
    (i < self.width && j < self.height)
      .then(|| self.data[self.offset(i, j)])
  }

  /// Smoothed count of cell `(i, j)`, see [`smooth_count`]. Equals the integer count for
  /// points that did not escape.
  pub fn smooth(&self, i: u32, j: u32) -> Option<f32> {
    (i < self.width && j < self.height)
      .then(|| self.smooth[self.offset(i, j)])
  }

  #[inline]
  fn offset(&self, i: u32, j: u32) -> usize {
    i as usize * self.height as usize + j as usize
  }

  /// All counts sampled at `x_i`, bottom to top.
  pub fn column(&self, i: u32) -> Option<&[u32]> {
    let h = self.height as usize;
    let i = i as usize;
    (i < self.width as usize).then(|| &self.data[i * h..(i + 1) * h])
  }

  /// `((i, j), count)` for every cell.
  pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), u32)> + '_ {
    let height = self.height as usize;
    self.data.iter().enumerate().map(move |(offset, &count)|
      (((offset / height) as u32, (offset % height) as u32), count)
    )
  }

  /// Screen order: row 0 is the top of the image (`ymax`), pixels left to right (`xmin..xmax`).
  pub fn transposed_rows(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
    (0..self.height).rev().map(move |j| {
      (0..self.width)
        .map(|i| self.data[self.offset(i, j)])
        .collect()
    })
  }

  /// Number of cells per escape count, indices `0..=c` where `c` is the largest count in the grid.
  /// Sized by the data, so a huge `max_iter` costs nothing unless some cell actually reaches it.
  pub fn histogram(&self) -> Vec<u64> {
    let top = self.data.iter().copied().max().unwrap_or(0);
    let mut bins = vec![0u64; top as usize + 1];
    self.data.iter().for_each(|&count| bins[count as usize] += 1);
    bins
  }
}

impl Debug for EscapeGrid {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    let size = self.data.capacity() * std::mem::size_of::<u32>() +
      self.smooth.capacity() * std::mem::size_of::<f32>();
    f.debug_struct("EscapeGrid")
      .field("width", &self.width)
      .field("height", &self.height)
      .field("max_iter", &self.max_iter)
      .field("size", &size.file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}

fn cell_count(size: GridSize) -> usize {
  size.width as usize * size.height as usize
}

/// `(count, smoothed count)` of `x + y·i`.
#[inline]
fn evaluate(x: f64, y: f64, max_iter: u32) -> (u32, f32) {
  let (count, modulus) = escape_time_smooth(Coordinate::new(x, y), max_iter);
  (count, smooth_count(count, modulus, max_iter))
}

fn samples(region: &Region, size: GridSize) -> (Vec<f64>, Vec<f64>) {
  (
    linspace(region.xmin(), region.xmax(), size.width as usize),
    linspace(region.ymin(), region.ymax(), size.height as usize)
  )
}

/// Sequential reference rasterization: `grid[i][j] = escape_time(x_i + y_j·i, max_iter)`.
#[tracing::instrument(level = "debug", skip(region, size), fields(width = size.width, height = size.height))]
pub fn rasterize(region: &Region, size: GridSize, max_iter: u32) -> Result<EscapeGrid> {
  let size = validate_size(size)?;
  let (x_values, y_values) = samples(region, size);

  let (data, smooth) = itertools::iproduct!(x_values.iter(), y_values.iter())
    .map(|(&x, &y)| evaluate(x, y, max_iter))
    .unzip();
  Ok(EscapeGrid::from_columns(data, smooth, size, max_iter))
}

/// Same grid as [`rasterize`], columns evaluated on the rayon thread pool.
#[tracing::instrument(level = "debug", skip(region, size), fields(width = size.width, height = size.height))]
pub fn rasterize_par(region: &Region, size: GridSize, max_iter: u32) -> Result<EscapeGrid> {
  use rayon::prelude::*;

  let size = validate_size(size)?;
  let (x_values, y_values) = samples(region, size);

  let h = size.height as usize;
  let mut data = vec![0u32; cell_count(size)];
  let mut smooth = vec![0f32; cell_count(size)];
  data.par_chunks_mut(h)
    .zip(smooth.par_chunks_mut(h))
    .zip(x_values.par_iter())
    .for_each(|((column, smooth_column), &x)| column.iter_mut()
      .zip(smooth_column.iter_mut())
      .zip(y_values.iter())
      .for_each(|((cell, smooth_cell), &y)| (*cell, *smooth_cell) = evaluate(x, y, max_iter))
    );
  Ok(EscapeGrid::from_columns(data, smooth, size, max_iter))
}

pub fn rasterize_with(strategy: Strategy, region: &Region, size: GridSize, max_iter: u32) -> Result<EscapeGrid> {
  match strategy {
    Strategy::Sequential => rasterize(region, size, max_iter),
    Strategy::Parallel => rasterize_par(region, size, max_iter)
  }
}

/// Coarse pass: one evaluation per `block x block` tile, copied over the whole tile.
///
/// A tile is represented by the sample nearest its centre, so `block = 1` is exactly
/// [`rasterize`]. Tiles on the right and bottom edges may be clipped.
#[tracing::instrument(level = "debug", skip(region, size), fields(width = size.width, height = size.height))]
pub fn rasterize_preview(region: &Region, size: GridSize, block: u32, max_iter: u32) -> Result<EscapeGrid> {
  use rayon::prelude::*;

  let size = validate_size(size)?;
  if block == 0 {
    return Err(Error::InvalidBlockSize);
  }
  let (x_values, y_values) = samples(region, size);
  let representative = |index: u32, len: u32| {
    let tile_start = index - index % block;
    (tile_start + block / 2).min(len - 1) as usize
  };

  let h = size.height as usize;
  let mut data = vec![0u32; cell_count(size)];
  let mut smooth = vec![0f32; cell_count(size)];
  data.par_chunks_mut(h)
    .zip(smooth.par_chunks_mut(h))
    .enumerate()
    .filter(|(i, _)| *i as u32 % block == 0)
    .for_each(|(i, (column, smooth_column))| {
      let x = x_values[representative(i as u32, size.width)];
      column.chunks_mut(block as usize)
        .zip(smooth_column.chunks_mut(block as usize))
        .enumerate()
        .for_each(|(tile, (cells, smooth_cells))| {
          let y = y_values[representative(tile as u32 * block, size.height)];
          let (count, smoothed) = evaluate(x, y, max_iter);
          cells.fill(count);
          smooth_cells.fill(smoothed);
        });
    });

  // replicate each evaluated column over the rest of its tile
  for i in 0..size.width as usize {
    let source = i - i % block as usize;
    if source != i {
      data.copy_within(source * h..(source + 1) * h, i * h);
      smooth.copy_within(source * h..(source + 1) * h, i * h);
    }
  }
  Ok(EscapeGrid::from_columns(data, smooth, size, max_iter))
}
