use std::fmt;

use nalgebra::distance;

use super::error::PipelineError;
use crate::transfer::{identity, TransferFn};
use crate::Point;

/// Tolerances used by round-trip checks.
#[derive(Clone, Copy, Debug)]
pub struct PipelineCfg {
    pub eps_roundtrip: f64,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            eps_roundtrip: 1e-9,
        }
    }
}

/// Fold maps into one that applies them in iteration order (first item first).
pub fn compose_in_order<I>(fns: I) -> TransferFn
where
    I: IntoIterator<Item = TransferFn>,
{
    fns.into_iter()
        .reduce(|acc, next| -> TransferFn { Box::new(move |p: Point| next(acc(p))) })
        .unwrap_or_else(identity)
}

/// Composed forward/backward maps of a step list. Immutable once built.
pub struct Pipeline {
    forward: TransferFn,
    backward: TransferFn,
    len: usize,
}

impl Pipeline {
    pub(crate) fn from_parts(forward: TransferFn, backward: TransferFn, len: usize) -> Self {
        Self {
            forward,
            backward,
            len,
        }
    }

    /// Map a point through every step in declared order.
    #[inline]
    pub fn forward(&self, p: Point) -> Point {
        (self.forward)(p)
    }

    /// Undo `forward`: inverse steps, last step first.
    #[inline]
    pub fn backward(&self, p: Point) -> Point {
        (self.backward)(p)
    }

    /// Number of declared steps (identity steps included).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consume the pipeline and hand out the two closures.
    pub fn into_parts(self) -> (TransferFn, TransferFn) {
        (self.forward, self.backward)
    }

    /// Distance between `p` and `backward(forward(p))`.
    #[inline]
    pub fn round_trip_error(&self, p: Point) -> f64 {
        distance(&p, &self.backward(self.forward(p)))
    }

    /// Largest round-trip error over `points` (0 for an empty slice).
    pub fn max_round_trip_error(&self, points: &[Point]) -> f64 {
        points
            .iter()
            .map(|p| self.round_trip_error(*p))
            .fold(0.0, f64::max)
    }

    /// Ok with the max error if every point returns within `cfg.eps_roundtrip`.
    pub fn check_round_trip(&self, points: &[Point], cfg: PipelineCfg) -> Result<f64, PipelineError> {
        let max_err = self.max_round_trip_error(points);
        if max_err.is_finite() && max_err <= cfg.eps_roundtrip {
            Ok(max_err)
        } else {
            Err(PipelineError::RoundTripExceeded {
                max_err,
                eps: cfg.eps_roundtrip,
            })
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("len", &self.len).finish_non_exhaustive()
    }
}
