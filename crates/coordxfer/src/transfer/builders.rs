//! Elementary builders. All four are total: a missing parameter yields `identity()`.

use super::types::{TransferFn, TransferParams};
use crate::Point;

#[inline]
pub fn identity() -> TransferFn {
    Box::new(|p: Point| p)
}

/// Rotation by `theta` with the sign pattern
/// `(x cosθ + y sinθ, y cosθ − x sinθ)`, i.e. the point turns by −θ in a
/// right-handed frame (clockwise for y pointing up).
pub fn rotate(params: &TransferParams) -> TransferFn {
    match params.theta {
        Some(theta) => {
            let (s, c) = theta.sin_cos();
            rotate_sin_cos(s, c)
        }
        None => identity(),
    }
}

fn rotate_sin_cos(s: f64, c: f64) -> TransferFn {
    Box::new(move |p: Point| Point::new(p.x * c + p.y * s, p.y * c - p.x * s))
}

/// Translation by `(x, y)`; needs both components.
pub fn translate(params: &TransferParams) -> TransferFn {
    match (params.x, params.y) {
        (Some(dx), Some(dy)) => Box::new(move |p: Point| Point::new(p.x + dx, p.y + dy)),
        _ => identity(),
    }
}

/// Inverse of `rotate`: rotate by the complementary angle `2π − theta`.
///
/// cos(2π − θ) = cos θ and sin(2π − θ) = −sin θ, so the complementary
/// rotation reuses `theta.sin_cos()` and never forms `2π − θ` in floating
/// point, where large angles lose precision.
pub fn reverse_rotate(params: &TransferParams) -> TransferFn {
    match params.theta {
        Some(theta) => {
            let (s, c) = theta.sin_cos();
            rotate_sin_cos(-s, c)
        }
        None => identity(),
    }
}

/// Inverse of `translate`.
pub fn reverse_translate(params: &TransferParams) -> TransferFn {
    match (params.x, params.y) {
        (Some(dx), Some(dy)) => translate(&TransferParams::offset(-dx, -dy)),
        _ => identity(),
    }
}
