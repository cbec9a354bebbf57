/// Evaluates `$expr`, logging how long it took under the given title at `debug` level.
#[macro_export]
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::__tracing::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
