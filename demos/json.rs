//! Load a curve description from a JSON file and print it as SVG.
//!
//! The file holds a `CurveSpec`, for example:
//!
//! ```json
//! { "points": [{"x": 50, "y": 450}, {"x": 50, "y": 50}, {"x": 450, "y": 50}], "divisions": 40 }
//! ```

use kurbo::BezPath;

use casteljau::{chord_division_points, CurveSpec};

fn main() {
    env_logger::init();
    let path = std::env::args().nth(1).expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let spec: CurveSpec = serde_json::from_str(&data).unwrap();
    let mut curve = match spec.evaluator() {
        Ok(curve) => curve,
        Err(e) => {
            log::error!("can't build curve: {}", e);
            std::process::exit(1);
        }
    };
    let bp = curve.to_bez_path(spec.divisions);
    let mut chord = BezPath::new();
    chord.move_to(curve.first());
    chord.line_to(curve.last());
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />
      <path d="{}" fill="none" stroke="#ccc" />"##,
        bp.to_svg(),
        chord.to_svg()
    );
    // Tick marks at the same factors along the chord, for comparison.
    for pt in chord_division_points(&spec.points, spec.divisions).unwrap_or_default() {
        println!(
            r##"      <circle cx="{}" cy="{}" r="1.5" fill="#ccc" />"##,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
