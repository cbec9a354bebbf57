use {
  super::*,
  crate::{
    config::ExplorerConfig,
    escape::{escape_time, escape_time_smooth, smooth_count},
    explorer::Explorer,
    geometry::{Coordinate, GridSize, Region},
    raster::rasterize,
    view::Camera
  },
  anyhow::Result,
  euclid::Point2D,
  image::Rgba,
  rand::prelude::*,
  std::time::Duration
};

#[test] fn hot_endpoints() {
  assert_eq!(Colormap::Hot.color(0, 100), Rgba([11, 0, 0, 255]));
  assert_eq!(Colormap::Hot.color(100, 100), Rgba([255, 255, 255, 255]));
  let mid = Colormap::Hot.color(50, 100);
  assert_eq!(mid.0[0], 255);
  assert!(mid.0[1] > 0 && mid.0[1] < 255);
  assert_eq!(mid.0[2], 0);
  // no division by zero for an empty bound
  assert_eq!(Colormap::Hot.color(0, 0), Colormap::Hot.color(0, 1));
}

#[test] fn sine_interior_is_black() {
  assert_eq!(Colormap::Sine.color(64, 64), Rgba([0, 0, 0, 255]));
  assert_eq!(Colormap::Sine.color(0, 64), Rgba([128, 237, 17, 255]));
  assert_eq!(Colormap::Grayscale.color(32, 64), Rgba([128, 128, 128, 255]));
}

#[test] fn sine_follows_smoothed_count() {
  // both escape after one update, from |z| = 3 and |z| = 5
  let (n3, z3) = escape_time_smooth(Coordinate::new(3.0, 0.0), 64);
  let (n5, z5) = escape_time_smooth(Coordinate::new(5.0, 0.0), 64);
  assert_eq!((n3, n5), (1, 1));
  let near = Colormap::Sine.color_smooth(n3, smooth_count(n3, z3, 64), 64);
  let far = Colormap::Sine.color_smooth(n5, smooth_count(n5, z5, 64), 64);
  assert_ne!(near, far);
  // integer-only maps ignore the smoothed value
  assert_eq!(
    Colormap::Hot.color_smooth(1, smooth_count(n3, z3, 64), 64),
    Colormap::Hot.color_smooth(1, smooth_count(n5, z5, 64), 64)
  );
}

#[test] fn render_uses_smoothed_count() -> Result<()> {
  let grid = rasterize(&Region::new(3.0, 5.0, 0.0, 1.0)?, GridSize::new(2, 1), 64)?;
  assert_eq!((grid.get(0, 0), grid.get(1, 0)), (Some(1), Some(1)));
  let image = render(&grid, Colormap::Sine);
  assert_ne!(image.get_pixel(0, 0), image.get_pixel(1, 0));
  Ok(())
}

#[test] fn colormap_names() -> Result<()> {
  assert_eq!("hot".parse::<Colormap>()?, Colormap::Hot);
  assert_eq!("Sine".parse::<Colormap>()?, Colormap::Sine);
  assert_eq!("gray".parse::<Colormap>()?, Colormap::Grayscale);
  assert!("jet".parse::<Colormap>().is_err());
  Ok(())
}

#[test] fn render_orientation() -> Result<()> {
  let region = Region::new(-2.0, 1.0, -1.5, 1.5)?;
  let grid = rasterize(&region, GridSize::new(4, 3), 10)?;
  let image = render(&grid, Colormap::Grayscale);
  assert_eq!(image.dimensions(), (4, 3));

  for (y, row) in grid.transposed_rows().enumerate() {
    for (x, count) in row.into_iter().enumerate() {
      assert_eq!(*image.get_pixel(x as u32, y as u32), Colormap::Grayscale.color(count, 10));
    }
  }
  Ok(())
}

#[test] fn camera_pixels_match_rendered_pixels() -> Result<()> {
  // [-2.5, 0.5] x [-1, 2], 0.1 between samples
  let camera = Camera::new(GridSize::new(31, 31))?.with_center(Point2D::new(-1.0, 0.5));
  let region = camera.region()?;
  let grid = rasterize(&region, camera.size(), 50)?;
  let image = render(&grid, Colormap::Hot);

  let top_left = camera.pixel_to_plane(Point2D::new(0, 0))?;
  assert!((top_left.x - region.xmin()).abs() < 1e-12);
  assert!((top_left.y - region.ymax()).abs() < 1e-12);

  // (-1, 2) escapes at once, (-1, -1) after three updates
  let expected = [((15, 0), 1), ((15, 30), 3)];
  for ((x, y), count) in expected {
    let point = camera.pixel_to_plane(Point2D::new(x, y))?;
    let evaluated = escape_time(Coordinate::new(point.x, point.y), 50);
    assert_eq!(evaluated, count);
    assert_eq!(*image.get_pixel(x, y), Colormap::Hot.color(evaluated, 50));
  }
  assert_ne!(image.get_pixel(15, 0), image.get_pixel(15, 30));
  Ok(())
}

#[test] fn draw_upscaled() -> Result<()> {
  let grid = rasterize(&Region::default(), GridSize::new(2, 2), 10)?;
  let mut image = RgbaImage::new(4, 4);
  grid.texture(Colormap::Hot).draw(&mut image);
  // top-left quadrant is grid cell (0, 1)
  let expected = Colormap::Hot.color(grid.get(0, 1).unwrap(), 10);
  for (x, y) in itertools::iproduct!(0..2, 0..2) {
    assert_eq!(*image.get_pixel(x, y), expected);
  }
  Ok(())
}

#[test] fn renderer_keeps_last_frame() -> Result<()> {
  let explorer = Explorer::new(ExplorerConfig::default()
    .with_size(32, 24)
    .with_max_iter(30)
    .with_frames(3)
    .with_preview_block(Some(8))
    .with_frame_delay(Duration::ZERO))?;
  let mut renderer = ImageRenderer::new(Colormap::Sine);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  explorer.run(&mut renderer, &mut rng)?;

  assert_eq!(renderer.last_image().map(|image| image.dimensions()), Some((32, 24)));
  assert!(renderer.saved().is_empty());
  Ok(())
}

#[test] fn renderer_saves_full_frames() -> Result<()> {
  let dir = std::env::temp_dir().join(format!("mandelzoom-frames-{}", std::process::id()));
  let explorer = Explorer::new(ExplorerConfig::default()
    .with_size(16, 16)
    .with_max_iter(20)
    .with_frames(2)
    .with_preview_block(Some(4))
    .with_frame_delay(Duration::ZERO))?;
  let mut renderer = ImageRenderer::new(Colormap::Hot).with_output(&dir)?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  explorer.run(&mut renderer, &mut rng)?;

  assert_eq!(renderer.saved(), &[dir.join("frame_0000.png"), dir.join("frame_0001.png")]);
  let reloaded = image::open(&renderer.saved()[1])?.to_rgba8();
  assert_eq!(Some(&reloaded), renderer.last_image());
  std::fs::remove_dir_all(&dir)?;
  Ok(())
}

#[test] #[ignore] fn zoom_sequence() -> Result<()> {
  let explorer = Explorer::new(ExplorerConfig::default()
    .with_frame_delay(Duration::ZERO))?;
  let mut renderer = ImageRenderer::new(Colormap::Hot).with_output("test/zoom")?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  explorer.run(&mut renderer, &mut rng)?;
  Ok(())
}
