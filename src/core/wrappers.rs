//! Core trait implementations for `DynamicVector` and `DynamicMatrix`.
//!
//! These let generic code written against [`Indexing`], [`InnerProduct`] and
//! [`MatVec`] use the crate's containers directly:
//!
//! ```rust
//! use dynmat::{DynamicMatrix, DynamicVector, InnerProduct, MatVec};
//!
//! let a = DynamicMatrix::<f64>::identity(3).unwrap();
//! let x = DynamicVector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let y = a.matvec(&x).unwrap();
//! assert_eq!(().dot(&x, &y).unwrap(), 14.0);
//! ```

use crate::core::traits::{Indexing, InnerProduct, MatVec, Scalar};
use crate::error::Result;
use crate::matrix::DynamicMatrix;
use crate::vector::DynamicVector;

/// Implements matrix-vector multiplication for `DynamicMatrix`.
impl<T: Scalar> MatVec<DynamicVector<T>> for DynamicMatrix<T> {
    fn matvec(&self, x: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        self.mul_vector(x)
    }
}

/// Dot product with a stateless context, as in `().dot(&x, &y)`.
impl<T: Scalar> InnerProduct<DynamicVector<T>> for () {
    type Scalar = T;

    fn dot(&self, x: &DynamicVector<T>, y: &DynamicVector<T>) -> Result<T> {
        x.dot(y)
    }
}

impl<T> Indexing for DynamicVector<T> {
    fn size(&self) -> usize {
        DynamicVector::size(self)
    }
}

/// Row count.
impl<T> Indexing for DynamicMatrix<T> {
    fn size(&self) -> usize {
        DynamicMatrix::size(self)
    }
}
