//! Matrix module: the square dense matrix type.

pub mod dense;
pub use dense::DynamicMatrix;
