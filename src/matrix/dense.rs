//! Square dense matrix built from row vectors.
//!
//! `DynamicMatrix<T>` keeps a private `DynamicVector<DynamicVector<T>>`: an
//! outer vector of `size` rows, each itself a `DynamicVector<T>` of length
//! `size`. Size, row indexing, equality, cloning and moving all come from
//! the vector type; the matrix only adds the products and sums below.
//!
//! Dimensions are limited to `1..=MAX_MATRIX_SIZE`.
//!
//! # Products
//! - `&m * scalar`: every row scaled.
//! - `&m * &v`: element `i` is `m[i] · v`.
//! - `&a * &b`: plain triple loop, `c[i][j] = Σ_k a[i][k] * b[k][j]`, O(n³).

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::config::limits::check_matrix_size;
use crate::core::traits::Scalar;
use crate::error::{DmError, Result};
use crate::vector::DynamicVector;

/// Square matrix stored as a vector of equally sized row vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T: Default> DynamicMatrix<T> {
    /// `size` × `size` matrix of default (zero) elements.
    pub fn new(size: usize) -> Result<Self> {
        check_matrix_size(size)?;
        let rows = DynamicVector::try_from_fn(size, |_| DynamicVector::new(size))?;
        Ok(Self { rows })
    }
}

impl<T> DynamicMatrix<T> {
    /// Build from row-major nested vectors; every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        check_matrix_size(n)?;
        let mut out = Vec::with_capacity(n);
        for row in rows {
            DmError::ensure_same_size(n, row.len())?;
            out.push(DynamicVector::try_from(row)?);
        }
        Ok(Self { rows: DynamicVector::try_from(out)? })
    }

    /// Entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(size: usize, mut f: F) -> Result<Self> {
        check_matrix_size(size)?;
        let rows = DynamicVector::try_from_fn(size, |i| DynamicVector::from_fn(size, |j| f(i, j)))?;
        Ok(Self { rows })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Checked row access.
    pub fn at(&self, index: usize) -> Result<&DynamicVector<T>> {
        self.rows.at(index)
    }

    /// Checked mutable row access.
    ///
    /// Assigning a whole row of another length through the returned reference
    /// makes later products on this matrix fail with `SizeMismatch`; use
    /// [`DynamicMatrix::set_row`] to replace rows.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut DynamicVector<T>> {
        self.rows.at_mut(index)
    }

    /// Replace row `index`, keeping the matrix square.
    pub fn set_row(&mut self, index: usize, row: DynamicVector<T>) -> Result<()> {
        let n = self.size();
        DmError::ensure_same_size(n, row.size())?;
        *self.rows.at_mut(index)? = row;
        Ok(())
    }

    /// Rows in order.
    pub fn rows(&self) -> std::slice::Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    /// Mutable rows in order; the same length caveat as [`DynamicMatrix::at_mut`] applies.
    pub fn rows_mut(&mut self) -> std::slice::IterMut<'_, DynamicVector<T>> {
        self.rows.iter_mut()
    }

    /// Row lengths all equal to the row count.
    fn ensure_square(&self) -> Result<()> {
        let n = self.size();
        for row in self.rows() {
            DmError::ensure_same_size(n, row.size())?;
        }
        Ok(())
    }
}

impl<T: Scalar> DynamicMatrix<T> {
    /// Ones on the diagonal, zeros elsewhere.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Every row multiplied by `val`.
    pub fn scale(&self, val: T) -> Self {
        Self { rows: self.rows.map(|row| row * val) }
    }

    /// Matrix–vector product; `v` must have `size()` elements.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        DmError::ensure_same_size(self.size(), v.size())?;
        self.rows.try_map_indexed(|_, row| row.dot(v))
    }

    /// Row-by-row sum.
    pub fn add_matrix(&self, other: &Self) -> Result<Self> {
        DmError::ensure_same_size(self.size(), other.size())?;
        self.ensure_square()?;
        other.ensure_square()?;
        let rows = self.rows.try_map_indexed(|i, row| row.add_vector(&other.rows[i]))?;
        Ok(Self { rows })
    }

    /// Row-by-row difference.
    pub fn sub_matrix(&self, other: &Self) -> Result<Self> {
        DmError::ensure_same_size(self.size(), other.size())?;
        self.ensure_square()?;
        other.ensure_square()?;
        let rows = self.rows.try_map_indexed(|i, row| row.sub_vector(&other.rows[i]))?;
        Ok(Self { rows })
    }

    /// Matrix product by the reference triple loop.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self> {
        let n = self.size();
        DmError::ensure_same_size(n, other.size())?;
        self.ensure_square()?;
        other.ensure_square()?;
        log::trace!("multiplying {}x{} matrices", n, n);

        let mut out = Self::from_fn(n, |_, _| T::zero())?;
        for i in 0..n {
            for j in 0..n {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.rows[i][k] * other.rows[k][j];
                }
                out.rows[i][j] = acc;
            }
        }
        Ok(out)
    }
}

impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = DynamicVector<T>;

    fn index(&self, index: usize) -> &DynamicVector<T> {
        &self.rows[index]
    }
}

impl<T> IndexMut<usize> for DynamicMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut DynamicVector<T> {
        &mut self.rows[index]
    }
}

impl<T: Scalar> Mul<T> for &DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, val: T) -> DynamicMatrix<T> {
        self.scale(val)
    }
}

impl<T: Scalar> Mul<T> for DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(mut self, val: T) -> DynamicMatrix<T> {
        for row in self.rows_mut() {
            for a in row.iter_mut() {
                *a = *a * val;
            }
        }
        self
    }
}

impl<T: Scalar> Mul<&DynamicVector<T>> for &DynamicMatrix<T> {
    type Output = Result<DynamicVector<T>>;

    fn mul(self, v: &DynamicVector<T>) -> Self::Output {
        self.mul_vector(v)
    }
}

impl<T: Scalar> Add<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn add(self, other: &DynamicMatrix<T>) -> Self::Output {
        self.add_matrix(other)
    }
}

impl<T: Scalar> Sub<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn sub(self, other: &DynamicMatrix<T>) -> Self::Output {
        self.sub_matrix(other)
    }
}

impl<T: Scalar> Mul<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn mul(self, other: &DynamicMatrix<T>) -> Self::Output {
        self.mul_matrix(other)
    }
}

/// One row per line, elements space-separated, each line ending in `\n`.
impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            fmt::Display::fmt(row, f)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
