//! Evenly spaced points along the straight line between two points.
//!
//! This is the two-point case of [`CurveEvaluator`](crate::CurveEvaluator),
//! computed in closed form.

use kurbo::Point;

use crate::error::{Error, EMPTY_POINTS};
use crate::util;

/// Divide the segment from `a` to `b` into `divisions + 1` equal parts and
/// return the `divisions` points between them.
///
/// Neither `a` nor `b` is included. Zero divisions gives an empty result.
pub fn even_division_points(a: Point, b: Point, divisions: usize) -> Vec<Point> {
    util::interior_factors(divisions)
        .map(|t| Point::new(util::lerp(a.x, b.x, t), util::lerp(a.y, b.y, t)))
        .collect()
}

/// Like [`even_division_points`], between the first and last of `pts`.
///
/// Points in between are ignored. Returns [`Error::InvalidInput`] if `pts`
/// is empty.
pub fn chord_division_points(pts: &[Point], divisions: usize) -> Result<Vec<Point>, Error> {
    match (pts.first(), pts.last()) {
        (Some(&a), Some(&b)) => Ok(even_division_points(a, b, divisions)),
        _ => Err(EMPTY_POINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveEvaluator;

    #[test]
    fn quarters() {
        let pts = even_division_points(Point::new(0., 0.), Point::new(8., -4.), 3);
        assert_eq!(
            pts,
            vec![Point::new(2., -1.), Point::new(4., -2.), Point::new(6., -3.)]
        );
    }

    #[test]
    fn zero_divisions() {
        assert!(even_division_points(Point::ORIGIN, Point::new(1., 1.), 0).is_empty());
    }

    #[test]
    fn agrees_with_two_point_curve() {
        let a = Point::new(-12.5, 3.);
        let b = Point::new(140., 77.25);
        let mut curve = CurveEvaluator::new(&[a, b]).unwrap();
        let sampled = curve.sample_curve(17);
        let divided = even_division_points(a, b, 17);
        assert_eq!(sampled.len(), divided.len());
        for (p, q) in sampled.iter().zip(&divided) {
            assert!((*p - *q).hypot() < 1e-9);
        }
    }

    #[test]
    fn chord_uses_first_and_last() {
        let pts = [
            Point::new(0., 0.),
            Point::new(500., 500.),
            Point::new(10., 0.),
        ];
        let divided = chord_division_points(&pts, 4).unwrap();
        assert_eq!(divided[0], Point::new(2., 0.));
        assert_eq!(divided[3], Point::new(8., 0.));
    }

    #[test]
    fn chord_single_point() {
        let p = Point::new(3., 4.);
        assert_eq!(chord_division_points(&[p], 2), Ok(vec![p, p]));
    }

    #[test]
    fn chord_empty_is_error() {
        assert_eq!(
            chord_division_points(&[], 5),
            Err(Error::InvalidInput("empty control point set"))
        );
    }
}
