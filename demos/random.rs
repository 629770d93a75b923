//! A simple test program that evaluates a curve through random points.
//!
//! This creates a curve from a sequence of random control points, samples
//! it, and outputs an SVG of the control polygon and the curve.

use rand::distributions::{Distribution, Uniform};

use kurbo::{BezPath, Point};

use casteljau::{CurveEvaluator, DEFAULT_DIVISIONS};

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();
    const N: usize = 6;
    let pts = (0..N)
        .map(|_| {
            let x = Uniform::from(0.0..500.0).sample(&mut rng);
            let y = Uniform::from(0.0..500.0).sample(&mut rng);
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    let mut curve = CurveEvaluator::new(&pts).expect("points are not empty");
    let path = curve.to_bez_path(DEFAULT_DIVISIONS);
    log::info!("midpoint of curve: {:?}", curve.evaluate(0.5));

    let mut polygon = BezPath::new();
    polygon.move_to(pts[0]);
    for pt in &pts[1..] {
        polygon.line_to(*pt);
    }
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#ccc" />
      <path d="{}" fill="none" stroke="#000" />"##,
        polygon.to_svg(),
        path.to_svg()
    );
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
