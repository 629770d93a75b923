//! A serializable description of a curve and how densely to sample it.

use kurbo::Point;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Error;
use crate::evaluator::{CurveEvaluator, DEFAULT_DIVISIONS};

/// The control points of a curve, along with a sample count.
///
/// This is the form in which a curve is saved or loaded; an evaluator is
/// built from it with [`CurveSpec::evaluator`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct CurveSpec {
    pub points: Vec<Point>,
    /// Number of interior samples.
    #[cfg_attr(feature = "serde", serde(default = "default_divisions"))]
    pub divisions: usize,
}

#[cfg(feature = "serde")]
fn default_divisions() -> usize {
    DEFAULT_DIVISIONS
}

impl CurveSpec {
    pub fn new(points: Vec<Point>) -> CurveSpec {
        CurveSpec {
            points,
            divisions: DEFAULT_DIVISIONS,
        }
    }

    pub fn with_divisions(mut self, divisions: usize) -> CurveSpec {
        self.divisions = divisions;
        self
    }

    pub fn evaluator(&self) -> Result<CurveEvaluator, Error> {
        CurveEvaluator::new(&self.points)
    }

    /// The interior samples of the curve, as per
    /// [`CurveEvaluator::sample_curve`].
    pub fn sample(&self) -> Result<Vec<Point>, Error> {
        Ok(self.evaluator()?.sample_curve(self.divisions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let spec = CurveSpec::new(vec![Point::ORIGIN, Point::new(1., 1.)]);
        assert_eq!(spec.divisions, DEFAULT_DIVISIONS);
        assert_eq!(spec.sample().unwrap().len(), DEFAULT_DIVISIONS);
    }

    #[test]
    fn empty_spec_fails_to_sample() {
        let spec = CurveSpec::new(Vec::new()).with_divisions(4);
        assert!(spec.evaluator().is_err());
        assert_eq!(
            spec.sample(),
            Err(Error::InvalidInput("empty control point set"))
        );
    }

    #[test]
    fn sample_uses_divisions() {
        let spec = CurveSpec::new(vec![Point::new(0., 0.), Point::new(4., 0.)]).with_divisions(3);
        assert_eq!(
            spec.sample().unwrap(),
            vec![Point::new(1., 0.), Point::new(2., 0.), Point::new(3., 0.)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn load_from_json() {
        let json = r#"{"points": [{"x": 0.0, "y": 0.0}, {"x": 0.0, "y": 100.0},
            {"x": 100.0, "y": 100.0}, {"x": 100.0, "y": 0.0}]}"#;
        let spec: CurveSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.divisions, DEFAULT_DIVISIONS);
        assert_eq!(spec.points.len(), 4);
        let mut curve = spec.evaluator().unwrap();
        assert_eq!(curve.evaluate(0.5), Point::new(50., 75.));

        let saved = serde_json::to_string(&spec.with_divisions(5)).unwrap();
        let reloaded: CurveSpec = serde_json::from_str(&saved).unwrap();
        assert_eq!(reloaded.divisions, 5);
    }
}
