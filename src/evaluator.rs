//! Evaluation of a curve through an ordered set of control points.

use kurbo::{BezPath, Point};

use crate::error::{Error, EMPTY_POINTS};
use crate::table::InterpolationTable;
use crate::util;

/// The number of interior samples used when no count is given.
pub const DEFAULT_DIVISIONS: usize = 30;

/// A curve defined by N control points, evaluated by De Casteljau reduction.
///
/// The x and y coordinates are kept in separate arrays and reduced
/// independently through a shared interpolation table. The table is
/// scratch space reused by every evaluation, which is why evaluation takes
/// `&mut self`; an evaluator shared between threads needs external locking.
///
/// With two control points the curve is the straight line between them, with
/// four it is the cubic Bézier of that control polygon, and so on. A single
/// control point is a degenerate curve that is that point everywhere.
#[derive(Clone, Debug)]
pub struct CurveEvaluator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    table: InterpolationTable,
}

impl CurveEvaluator {
    /// Create an evaluator for the given control points.
    ///
    /// Returns [`Error::InvalidInput`] if `pts` is empty.
    pub fn new(pts: &[Point]) -> Result<CurveEvaluator, Error> {
        if pts.is_empty() {
            return Err(EMPTY_POINTS);
        }
        log::debug!("creating evaluator for {} control points", pts.len());
        Ok(CurveEvaluator {
            xs: pts.iter().map(|p| p.x).collect(),
            ys: pts.iter().map(|p| p.y).collect(),
            table: InterpolationTable::new(pts.len()),
        })
    }

    /// The number of control points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether there are no control points, which construction and
    /// [`set_points`](CurveEvaluator::set_points) never allow.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// A copy of the current control points, in order.
    pub fn points(&self) -> Vec<Point> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }

    /// The first control point, where the curve starts.
    pub fn first(&self) -> Point {
        Point::new(self.xs[0], self.ys[0])
    }

    /// The last control point, where the curve ends.
    pub fn last(&self) -> Point {
        let n = self.len() - 1;
        Point::new(self.xs[n], self.ys[n])
    }

    /// Move a single control point, as when it is dragged.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of range.
    pub fn set_point(&mut self, ix: usize, p: Point) {
        self.xs[ix] = p.x;
        self.ys[ix] = p.y;
    }

    /// Replace all the control points.
    ///
    /// The interpolation table is only reallocated if the number of points
    /// changes. On error, the evaluator is left unchanged.
    pub fn set_points(&mut self, pts: &[Point]) -> Result<(), Error> {
        if pts.is_empty() {
            return Err(EMPTY_POINTS);
        }
        self.xs.clear();
        self.ys.clear();
        self.xs.extend(pts.iter().map(|p| p.x));
        self.ys.extend(pts.iter().map(|p| p.y));
        self.table.resize(pts.len());
        Ok(())
    }

    /// Evaluate the curve at the given parametric factor.
    ///
    /// A factor of 0.0 gives the first control point and 1.0 the last. No
    /// range check is done; factors outside `0.0..=1.0` extrapolate.
    pub fn evaluate(&mut self, factor: f64) -> Point {
        let x = self.table.reduce(&self.xs, factor);
        let y = self.table.reduce(&self.ys, factor);
        Point::new(x, y)
    }

    /// Sample `divisions` points evenly spaced in factor strictly between the
    /// endpoints.
    ///
    /// The samples are at factors `k / (divisions + 1)` for `k` in
    /// `1..=divisions`, so neither endpoint is included; see
    /// [`polyline`](CurveEvaluator::polyline) for that.
    pub fn sample_curve(&mut self, divisions: usize) -> Vec<Point> {
        log::trace!(
            "sampling {} points on a curve of {} control points",
            divisions,
            self.len()
        );
        util::interior_factors(divisions)
            .map(|t| self.evaluate(t))
            .collect()
    }

    /// The samples of [`sample_curve`](CurveEvaluator::sample_curve) with the
    /// first and last control points added at either end.
    pub fn polyline(&mut self, divisions: usize) -> Vec<Point> {
        let mut result = Vec::with_capacity(divisions + 2);
        result.push(self.first());
        result.extend(self.sample_curve(divisions));
        result.push(self.last());
        result
    }

    /// Render the curve as a path of straight line segments through the
    /// [`polyline`](CurveEvaluator::polyline).
    pub fn to_bez_path(&mut self, divisions: usize) -> BezPath {
        let mut path = BezPath::new();
        let mut pts = self.polyline(divisions).into_iter();
        if let Some(p) = pts.next() {
            path.move_to(p);
        }
        for p in pts {
            path.line_to(p);
        }
        path
    }
}
