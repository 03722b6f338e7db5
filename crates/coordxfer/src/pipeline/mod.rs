//! Pipeline construction: compose step lists into forward/backward maps.
//!
//! - `build_pipeline`: lenient; incomplete steps become identities.
//! - `build_pipeline_strict`: rejects incomplete steps via `validate_steps`.
//! - `Pipeline`: the two composed closures plus round-trip diagnostics.
//!
//! Composition order
//! - forward applies step 1 first, then step 2, … then step n.
//! - backward applies the inverse of step n first and the inverse of step 1 last.

mod compose;
mod error;

pub use compose::{compose_in_order, Pipeline, PipelineCfg};
pub use error::PipelineError;

use tracing::{debug, warn};

use crate::transfer::TransferStep;

/// Build a pipeline from an ordered, non-empty step list.
///
/// Steps missing their required parameters contribute nothing (identity).
/// The only failure is an empty step list.
pub fn build_pipeline(steps: &[TransferStep]) -> Result<Pipeline, PipelineError> {
    if steps.is_empty() {
        debug!("refusing to build pipeline from empty step list");
        return Err(PipelineError::EmptyPipeline);
    }
    for (index, step) in steps.iter().enumerate().filter(|(_, s)| !s.is_complete()) {
        warn!(index, kind = %step.kind, params = ?step.params, "incomplete transfer params, step is identity");
    }
    let forward = compose_in_order(steps.iter().map(TransferStep::forward));
    let backward = compose_in_order(steps.iter().rev().map(TransferStep::reverse));
    debug!(steps = steps.len(), "built transfer pipeline");
    Ok(Pipeline::from_parts(forward, backward, steps.len()))
}

/// Reject steps whose kind-specific parameters are incomplete.
///
/// Reports the first offending step.
pub fn validate_steps(steps: &[TransferStep]) -> Result<(), PipelineError> {
    if steps.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }
    for (index, step) in steps.iter().enumerate() {
        let missing = step.params.missing_fields(step.kind);
        if !missing.is_empty() {
            return Err(PipelineError::IncompleteStep {
                index,
                kind: step.kind,
                missing,
            });
        }
    }
    Ok(())
}

/// Opt-in strict variant of `build_pipeline`.
pub fn build_pipeline_strict(steps: &[TransferStep]) -> Result<Pipeline, PipelineError> {
    validate_steps(steps)?;
    build_pipeline(steps)
}
