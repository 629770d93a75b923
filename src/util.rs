/// Linear interpolation between two scalars.
///
/// Written as a weighted sum rather than `a + (b - a) * t` so that the
/// endpoints are reproduced exactly at `t = 0` and `t = 1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// The evenly spaced interior factors `k / (n + 1)` for `k` in `1..=n`.
pub fn interior_factors(n: usize) -> impl Iterator<Item = f64> {
    let denom = (n + 1) as f64;
    (1..=n).map(move |k| k as f64 / denom)
}
