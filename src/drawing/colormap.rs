use image::{Luma, Pixel, Rgba};

/// Maps an escape count to a color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Colormap {
  /// Black through red and yellow to white, linear in the escape count.
  #[default]
  Hot,
  /// Phase-shifted sine waves per channel over the smoothed count; points that never escape
  /// are black.
  Sine,
  Grayscale
}

// (x, y) knots of matplotlib's `hot` channels
const HOT_RED: [(f32, f32); 3] = [(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)];
const HOT_GREEN: [(f32, f32); 4] = [(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)];
const HOT_BLUE: [(f32, f32); 3] = [(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)];

fn piecewise_linear(knots: &[(f32, f32)], t: f32) -> f32 {
  knots.windows(2)
    .find(|w| t <= w[1].0)
    .map(|w| {
      let (x0, y0) = w[0];
      let (x1, y1) = w[1];
      y0 + (t - x0) / (x1 - x0) * (y1 - y0)
    })
    .unwrap_or(knots[knots.len() - 1].1)
}

fn channel(value: f32) -> u8 {
  (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Colormap {
  pub fn color(self, count: u32, max_iter: u32) -> Rgba<u8> {
    self.color_smooth(count, count as f32, max_iter)
  }

  /// Like [`Colormap::color`], with the smoothed count of the cell for maps that vary
  /// continuously. `Hot` and `Grayscale` only look at `count`.
  pub fn color_smooth(self, count: u32, smooth: f32, max_iter: u32) -> Rgba<u8> {
    let t = if max_iter == 0 { 0.0 } else { count.min(max_iter) as f32 / max_iter as f32 };
    match self {
      Colormap::Hot => Rgba([
        channel(piecewise_linear(&HOT_RED, t)),
        channel(piecewise_linear(&HOT_GREEN, t)),
        channel(piecewise_linear(&HOT_BLUE, t)),
        255
      ]),
      Colormap::Sine if count >= max_iter => Rgba([0, 0, 0, 255]),
      Colormap::Sine => {
        let wave = |phase: f64| ((0.1 * smooth as f64 + phase).sin() * 127.0 + 128.0) as u8;
        Rgba([wave(0.0), wave(2.1), wave(4.2), 255])
      }
      Colormap::Grayscale => Luma([channel(t)]).to_rgba()
    }
  }
}

impl std::str::FromStr for Colormap {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> anyhow::Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "hot" => Ok(Colormap::Hot),
      "sine" => Ok(Colormap::Sine),
      "gray" | "grayscale" => Ok(Colormap::Grayscale),
      _ => anyhow::bail!("unknown colormap {:?}, expected one of: hot, sine, gray", s)
    }
  }
}
