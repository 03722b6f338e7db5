//! Random well-formed step lists (seeded, replayable).
//!
//! Purpose
//! - Feed round-trip checks, the CLI `sample`/`check` commands, and benches with
//!   reproducible pipelines.
//!
//! Model
//! - Each step is an `Angle` with probability `angle_prob`, otherwise a `Trace`.
//! - Angles are uniform in `[0, 2π)`, offsets uniform in `[-max_offset, max_offset]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::TransferStep;

/// Largest half-width accepted by the uniform draws; wider ranges overflow.
const MAX_HALF_WIDTH: f64 = 1e300;

/// Finite, non-negative half-width; falls back to `default` for NaN/inf.
fn half_width(v: f64, default: f64) -> f64 {
    if v.is_finite() {
        v.abs().min(MAX_HALF_WIDTH)
    } else {
        default
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StepCfg {
    pub len: usize,
    /// Probability of drawing a rotation step. Clamped to [0, 1].
    pub angle_prob: f64,
    /// Half-width of the translation range per axis.
    pub max_offset: f64,
}

impl Default for StepCfg {
    fn default() -> Self {
        Self {
            len: 4,
            angle_prob: 0.5,
            max_offset: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn rng(&self) -> StdRng {
        // splitmix-style mixing so neighbouring indices give unrelated streams
        let mixed = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(self.index.rotate_left(17));
        StdRng::seed_from_u64(mixed)
    }
}

/// Draw a step list where every step carries its required parameters.
pub fn draw_steps(cfg: StepCfg, token: ReplayToken) -> Vec<TransferStep> {
    let mut rng = token.rng();
    let p = if cfg.angle_prob.is_nan() {
        0.5
    } else {
        cfg.angle_prob.clamp(0.0, 1.0)
    };
    let r = half_width(cfg.max_offset, StepCfg::default().max_offset);
    (0..cfg.len)
        .map(|_| {
            if rng.gen_bool(p) {
                TransferStep::angle(rng.gen::<f64>() * TAU)
            } else if r > 0.0 {
                TransferStep::trace(rng.gen_range(-r..=r), rng.gen_range(-r..=r))
            } else {
                TransferStep::trace(0.0, 0.0)
            }
        })
        .collect()
}

/// Draw `n` points uniformly in the square `[-half, half]²`.
/// A non-finite `half` samples the unit square instead.
pub fn draw_points(n: usize, half: f64, token: ReplayToken) -> Vec<crate::Point> {
    let mut rng = token.rng();
    let h = half_width(half, 1.0).max(f64::MIN_POSITIVE);
    (0..n)
        .map(|_| crate::Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}
