//! Core traits and their implementations for the crate's containers.

pub mod traits;
pub mod wrappers;

pub use traits::{Indexing, InnerProduct, MatVec, Scalar};
