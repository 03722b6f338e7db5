//! 2D coordinate-transfer composition.
//!
//! A pipeline is declared as an ordered list of elementary steps (rotation
//! about the origin, translation) and compiled into two closures: `forward`
//! runs the steps in order, `backward` undoes them in reverse order.
//!
//! Conventions
//! - Points are `nalgebra::Point2<f64>` and are never mutated in place.
//! - Steps with missing parameters are identities, not errors. Use
//!   `build_pipeline_strict` to reject them up front.

pub mod pipeline;
pub mod transfer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Point type consumed and produced by every transfer function.
pub type Point = nalgebra::Point2<f64>;

pub use pipeline::{build_pipeline, build_pipeline_strict, Pipeline, PipelineCfg, PipelineError};
pub use transfer::{TransferFn, TransferKind, TransferParams, TransferStep};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::pipeline::{
        build_pipeline, build_pipeline_strict, validate_steps, Pipeline, PipelineCfg,
        PipelineError,
    };
    pub use crate::transfer::rand::{draw_steps, ReplayToken, StepCfg};
    pub use crate::transfer::{
        reverse_rotate, reverse_translate, rotate, translate, TransferFn, TransferKind,
        TransferParams, TransferStep,
    };
    pub use crate::Point;
}
