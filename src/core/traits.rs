//! Core element and operation traits for dynmat.

use crate::error::Result;

/// Numeric element type usable in container arithmetic.
///
/// Blanket-implemented for every `Copy + Num` type, so all primitive
/// integers and floats qualify.
pub trait Scalar: Copy + num_traits::Num {}

impl<T: Copy + num_traits::Num> Scalar for T {}

/// Matrix–vector product: y = A · x.
pub trait MatVec<V> {
    /// Compute A · x, failing when the dimensions disagree.
    fn matvec(&self, x: &V) -> Result<V>;
}

/// Inner products.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar>;
}

/// Uniform size query for vectors and matrices.
pub trait Indexing {
    /// Number of elements (vector) or rows (matrix).
    fn size(&self) -> usize;
}
