//! Curve interpolation through a set of control points.
//!
//! This crate evaluates the smooth curve defined by an ordered set of 2D
//! control points using [De Casteljau's algorithm]: repeated linear
//! interpolation between adjacent values until a single value remains.
//!
//! It is intended as the numeric core of an interactive curve editor. Drawing,
//! hit-testing and dragging of the control points are left to the caller;
//! this crate only takes points in and gives points out.
//!
//! ```
//! use casteljau::CurveEvaluator;
//! use kurbo::Point;
//!
//! let pts = [
//!     Point::new(0., 0.),
//!     Point::new(0., 100.),
//!     Point::new(100., 100.),
//!     Point::new(100., 0.),
//! ];
//! let mut curve = CurveEvaluator::new(&pts).unwrap();
//! assert_eq!(curve.evaluate(0.5), Point::new(50., 75.));
//! assert_eq!(curve.sample_curve(30).len(), 30);
//! ```
//!
//! [De Casteljau's algorithm]: https://en.wikipedia.org/wiki/De_Casteljau%27s_algorithm

mod division;
mod error;
mod evaluator;
mod spec;
mod table;
mod util;

pub use division::{chord_division_points, even_division_points};
pub use error::Error;
pub use evaluator::{CurveEvaluator, DEFAULT_DIVISIONS};
pub use spec::CurveSpec;
