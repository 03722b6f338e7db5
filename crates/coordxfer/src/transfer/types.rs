//! Step kinds and parameters.
//!
//! - `TransferKind`: closed set of elementary transforms.
//! - `TransferParams`: optional `theta`, `x`, `y`; which ones matter depends on the kind.
//! - `TransferStep`: one `(kind, params)` entry of a pipeline definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::builders::{reverse_rotate, reverse_translate, rotate, translate};
use crate::Point;

/// Composed point map. Captures only copied numbers, so it is `Send + Sync`.
pub type TransferFn = Box<dyn Fn(Point) -> Point + Send + Sync>;

/// Builder from parameters to a point map.
pub type Builder = fn(&TransferParams) -> TransferFn;

/// Elementary transform kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    /// Rotation about the origin by `theta`.
    Angle,
    /// Translation by `(x, y)`.
    Trace,
}

impl TransferKind {
    #[inline]
    pub fn forward_builder(self) -> Builder {
        match self {
            TransferKind::Angle => rotate,
            TransferKind::Trace => translate,
        }
    }

    #[inline]
    pub fn reverse_builder(self) -> Builder {
        match self {
            TransferKind::Angle => reverse_rotate,
            TransferKind::Trace => reverse_translate,
        }
    }

    /// Parameters that must be present for this kind to do anything.
    pub fn required_fields(self) -> &'static [MissingField] {
        match self {
            TransferKind::Angle => &[MissingField::Theta],
            TransferKind::Trace => &[MissingField::X, MissingField::Y],
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Angle => write!(f, "angle"),
            TransferKind::Trace => write!(f, "trace"),
        }
    }
}

/// Name of a parameter field, used when reporting incomplete steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissingField {
    Theta,
    X,
    Y,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Theta => write!(f, "theta"),
            MissingField::X => write!(f, "x"),
            MissingField::Y => write!(f, "y"),
        }
    }
}

/// Optional step parameters. Absent fields make the step an identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl TransferParams {
    #[inline]
    pub fn theta(theta: f64) -> Self {
        Self {
            theta: Some(theta),
            ..Self::default()
        }
    }

    #[inline]
    pub fn offset(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    fn has(&self, field: MissingField) -> bool {
        match field {
            MissingField::Theta => self.theta.is_some(),
            MissingField::X => self.x.is_some(),
            MissingField::Y => self.y.is_some(),
        }
    }

    /// Required fields for `kind` that are absent here.
    pub fn missing_fields(&self, kind: TransferKind) -> Vec<MissingField> {
        kind.required_fields()
            .iter()
            .copied()
            .filter(|f| !self.has(*f))
            .collect()
    }

    #[inline]
    pub fn is_complete_for(&self, kind: TransferKind) -> bool {
        kind.required_fields().iter().all(|f| self.has(*f))
    }
}

/// One pipeline entry. Order within a pipeline is significant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferStep {
    pub kind: TransferKind,
    #[serde(default)]
    pub params: TransferParams,
}

impl TransferStep {
    #[inline]
    pub fn new(kind: TransferKind, params: TransferParams) -> Self {
        Self { kind, params }
    }

    #[inline]
    pub fn angle(theta: f64) -> Self {
        Self::new(TransferKind::Angle, TransferParams::theta(theta))
    }

    #[inline]
    pub fn trace(x: f64, y: f64) -> Self {
        Self::new(TransferKind::Trace, TransferParams::offset(x, y))
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.params.is_complete_for(self.kind)
    }

    pub fn forward(&self) -> TransferFn {
        (self.kind.forward_builder())(&self.params)
    }

    pub fn reverse(&self) -> TransferFn {
        (self.kind.reverse_builder())(&self.params)
    }
}
