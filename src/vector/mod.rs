//! Vector module: the owning dynamic vector type.

pub mod dynamic;
pub use dynamic::DynamicVector;
