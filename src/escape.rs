use {
  crate::error::{Error, Result},
  num_complex::Complex,
  num_traits::Float
};

/// Escape-time of the orbit `z ← z² + c`, starting from `z = 0`.
///
/// Returns the first `n < max_iter` for which `|z| > 2` holds before the `n`-th update,
/// or `max_iter` if the orbit stays bounded for `max_iter` steps.
/// `max_iter = 0` returns 0 without iterating.
pub fn escape_time<T: Float>(c: Complex<T>, max_iter: u32) -> u32 {
  escape_time_smooth(c, max_iter).0
}

/// [`escape_time`] together with `|z|` at the moment the loop stopped.
pub fn escape_time_smooth<T: Float>(c: Complex<T>, max_iter: u32) -> (u32, T) {
  let two = T::one() + T::one();
  let mut z = Complex::new(T::zero(), T::zero());
  for n in 0..max_iter {
    let modulus = z.norm();
    if modulus > two {
      return (n, modulus);
    }
    z = z * z + c;
  }
  (max_iter, z.norm())
}

/// Continuous escape count `count + 1 - log2(log2 |z|)`, removes the banding between
/// integer counts. Only meaningful for escaped orbits (`|z| > 2`); bounded ones keep `count`.
pub fn smooth_count<T: Float>(count: u32, modulus: T, max_iter: u32) -> f32 {
  let two = T::one() + T::one();
  if count >= max_iter || !(modulus > two) {
    return count as f32;
  }
  let modulus = modulus.to_f64().unwrap_or(f64::MAX);
  (count as f64 + 1.0 - modulus.log2().log2()) as f32
}

/// Converts a signed iteration bound, as it may come from a config file or the command line.
pub fn iteration_bound(max_iter: i64) -> Result<u32> {
  if max_iter < 0 {
    return Err(Error::NegativeIterationBound(max_iter));
  }
  u32::try_from(max_iter).map_err(|_| Error::IterationBoundOverflow(max_iter))
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::prelude::*
  };

  #[test] fn origin_never_escapes() {
    for max_iter in [1, 2, 10, 100, 1000] {
      assert_eq!(escape_time(Complex::new(0.0, 0.0), max_iter), max_iter);
    }
  }

  #[test] fn zero_bound() {
    assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 0);
    assert_eq!(escape_time(Complex::new(5.0, -3.0), 0), 0);
  }

  #[test] fn far_points_escape_after_one_update() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    for _ in 0..1000 {
      let angle = rng.gen_range(-std::f64::consts::PI..=std::f64::consts::PI);
      let r = rng.gen_range(2.0 + 1e-9..1e6);
      let c = Complex::from_polar(r, angle);
      assert_eq!(escape_time(c, 50), 1, "c = {}", c);
    }
    // the bound wins when it is reached first
    assert_eq!(escape_time(Complex::new(3.0, 0.0), 1), 1);
  }

  #[test] fn boundary_radius_is_exclusive() {
    // c = -2: orbit 0, -2, 2, 2, ... never exceeds 2
    assert_eq!(escape_time(Complex::new(-2.0, 0.0), 64), 64);
    // c = 0.25 is the cusp of the main cardioid
    assert_eq!(escape_time(Complex::new(0.25, 0.0), 64), 64);
  }

  #[test] fn known_escape_counts() {
    // c = 1: 0, 1, 2, 5 -> |5| > 2 seen before the 4th update
    assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 3);
    // c = i: 0, i, -1+i, -i, -1+i, ... is periodic
    assert_eq!(escape_time(Complex::new(0.0, 1.0), 200), 200);
    // c = 0.5: 0, .5, .75, 1.0625, 1.6289.., 3.153.. -> 5
    assert_eq!(escape_time(Complex::new(0.5, 0.0), 100), 5);
  }

  #[test] fn single_precision() {
    assert_eq!(escape_time(Complex::new(0.0f32, 0.0), 20), 20);
    assert_eq!(escape_time(Complex::new(1.0f32, 0.0), 10), 3);
  }

  #[test] fn final_modulus() {
    // c = 1: 0, 1, 2, 5
    assert_eq!(escape_time_smooth(Complex::new(1.0, 0.0), 10), (3, 5.0));
    assert_eq!(escape_time_smooth(Complex::new(0.0, 0.0), 4), (4, 0.0));
    assert_eq!(escape_time_smooth(Complex::new(3.0, 4.0), 0), (0, 0.0));
  }

  #[test] fn smooth_count_separates_equal_counts() {
    let (n3, z3) = escape_time_smooth(Complex::new(3.0, 0.0), 50);
    let (n5, z5) = escape_time_smooth(Complex::new(5.0, 0.0), 50);
    assert_eq!(n3, n5);
    let (s3, s5) = (smooth_count(n3, z3, 50), smooth_count(n5, z5, 50));
    assert!(s3 > s5, "{} <= {}", s3, s5);
    // 1 + 1 - log2(log2(4)) = 1
    assert_eq!(smooth_count(1, 4.0f64, 50), 1.0);
    // bounded orbits keep their count
    assert_eq!(smooth_count(50, 0.3f64, 50), 50.0);
  }

  #[test] fn signed_bounds() {
    assert_eq!(iteration_bound(0).ok(), Some(0));
    assert_eq!(iteration_bound(100).ok(), Some(100));
    assert!(matches!(iteration_bound(-1), Err(Error::NegativeIterationBound(-1))));
    assert!(matches!(iteration_bound(i64::MAX), Err(Error::IterationBoundOverflow(_))));
  }
}
