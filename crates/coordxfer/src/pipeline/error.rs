use std::fmt;

use crate::transfer::{MissingField, TransferKind};

/// Errors surfaced while building or checking a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// No steps were given; there is nothing to fold.
    EmptyPipeline,
    /// Strict mode only: a step lacks parameters its kind requires.
    IncompleteStep {
        index: usize,
        kind: TransferKind,
        missing: Vec<MissingField>,
    },
    /// `backward(forward(p))` strayed from `p` by more than the tolerance.
    RoundTripExceeded { max_err: f64, eps: f64 },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyPipeline => write!(f, "pipeline needs at least one step"),
            PipelineError::IncompleteStep {
                index,
                kind,
                missing,
            } => {
                let names: Vec<String> = missing.iter().map(|m| m.to_string()).collect();
                write!(
                    f,
                    "step {index} ({kind}) is missing parameter(s): {}",
                    names.join(", ")
                )
            }
            PipelineError::RoundTripExceeded { max_err, eps } => write!(
                f,
                "round-trip error {max_err:e} exceeds tolerance {eps:e}"
            ),
        }
    }
}

impl std::error::Error for PipelineError {}
