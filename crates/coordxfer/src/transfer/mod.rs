//! Elementary transfer steps.
//!
//! - `types`: step kinds, optional parameters, and the boxed `TransferFn`.
//! - `builders`: the four total builders (rotate, translate, and their inverses).
//! - `rand`: seeded sampler for well-formed step lists.

mod builders;
pub mod rand;
mod types;

pub use builders::{identity, reverse_rotate, reverse_translate, rotate, translate};
pub use types::{Builder, MissingField, TransferFn, TransferKind, TransferParams, TransferStep};

#[cfg(test)]
mod tests;
