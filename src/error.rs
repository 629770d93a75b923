//! Errors reported by curve construction and sampling.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not describe a curve, such as an empty set of
    /// control points.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

pub(crate) const EMPTY_POINTS: Error = Error::InvalidInput("empty control point set");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        assert_eq!(
            EMPTY_POINTS.to_string(),
            "invalid input: empty control point set"
        );
    }
}
