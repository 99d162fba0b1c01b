//! Owning, size-bounded one-dimensional container.
//!
//! `DynamicVector<T>` owns a boxed contiguous buffer whose length is fixed at
//! construction and always lies in `1..=MAX_VECTOR_SIZE`. Cloning gives an
//! independent deep copy; moving is O(1) since only the box pointer moves.
//!
//! # Access
//! - `v[i]` is the fast path: no size check of its own, out-of-range use panics.
//! - [`DynamicVector::at`] / [`DynamicVector::at_mut`] validate the index and
//!   return [`DmError::IndexOutOfRange`] instead.
//!
//! # Arithmetic
//! Scalar `+ - *` are infallible and return a fresh vector. Elementwise
//! `+ -` and the dot product `*` require equal sizes, so the operators yield
//! a `Result`:
//!
//! ```rust
//! use dynmat::DynamicVector;
//! let a = DynamicVector::from_slice(&[2, 2, 2, 2, 2]).unwrap();
//! let b = DynamicVector::from_slice(&[5, 5, 5, 5, 5]).unwrap();
//! assert_eq!((&a * &b).unwrap(), 50);
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::config::limits::check_vector_size;
use crate::core::traits::Scalar;
use crate::error::{DmError, Result};

/// Heap-backed vector whose length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicVector<T> {
    data: Box<[T]>,
}

impl<T: Default> DynamicVector<T> {
    /// Build a vector of `size` default-initialized elements (zero for numbers).
    pub fn new(size: usize) -> Result<Self> {
        Self::from_fn(size, |_| T::default())
    }
}

impl<T: Default> Default for DynamicVector<T> {
    /// A single default element.
    fn default() -> Self {
        Self { data: Box::new([T::default()]) }
    }
}

impl<T: Clone> DynamicVector<T> {
    /// Copy the first `size` elements of `buf` into a newly owned buffer.
    ///
    /// # Panics
    /// Panics if `buf` holds fewer than `size` elements.
    pub fn from_buffer(buf: &[T], size: usize) -> Result<Self> {
        assert!(
            buf.len() >= size,
            "DynamicVector::from_buffer requires {} source elements, got {}",
            size,
            buf.len()
        );
        check_vector_size(size)?;
        Ok(Self { data: buf[..size].into() })
    }

    /// Copy a whole slice.
    pub fn from_slice(buf: &[T]) -> Result<Self> {
        Self::from_buffer(buf, buf.len())
    }

    /// `size` copies of `value`.
    pub fn filled(size: usize, value: T) -> Result<Self> {
        check_vector_size(size)?;
        Ok(Self { data: vec![value; size].into_boxed_slice() })
    }
}

impl<T> DynamicVector<T> {
    /// Build a vector whose element `i` is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, f: F) -> Result<Self> {
        check_vector_size(size)?;
        Ok(Self { data: (0..size).map(f).collect() })
    }

    /// Like [`DynamicVector::from_fn`], stopping at the first element that fails.
    pub fn try_from_fn<F: FnMut(usize) -> Result<T>>(size: usize, f: F) -> Result<Self> {
        check_vector_size(size)?;
        let data = (0..size).map(f).collect::<Result<Box<[T]>>>()?;
        Ok(Self { data })
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.size();
        self.data.get(index).ok_or(DmError::IndexOutOfRange { index, size })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size();
        self.data.get_mut(index).ok_or(DmError::IndexOutOfRange { index, size })
    }

    /// Access without any bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < self.size()`.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable access without any bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < self.size()`.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements as a mutable slice; the length stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Give up the container and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Replace the whole contents with `data`, which must keep the current size.
    pub(crate) fn replace_contents(&mut self, data: Vec<T>) -> Result<()> {
        DmError::ensure_same_size(self.size(), data.len())?;
        self.data = data.into_boxed_slice();
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        T: Copy,
        F: Fn(T, T) -> T,
    {
        DmError::ensure_same_size(self.size(), other.size())?;
        let data = self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect();
        Ok(Self { data })
    }

    /// New vector of the same size holding `f` of each element.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> DynamicVector<U> {
        DynamicVector { data: self.iter().map(f).collect() }
    }

    pub(crate) fn try_map_indexed<U, F>(&self, mut f: F) -> Result<DynamicVector<U>>
    where
        F: FnMut(usize, &T) -> Result<U>,
    {
        let data = self
            .iter()
            .enumerate()
            .map(|(i, a)| f(i, a))
            .collect::<Result<Box<[U]>>>()?;
        Ok(DynamicVector { data })
    }
}

impl<T: Scalar> DynamicVector<T> {
    /// Elementwise sum.
    pub fn add_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn sub_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Dot product, accumulated from `T::zero()`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        DmError::ensure_same_size(self.size(), other.size())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = DmError;

    /// Take ownership of `data` without copying.
    fn try_from(data: Vec<T>) -> Result<Self> {
        check_vector_size(data.len())?;
        Ok(Self { data: data.into_boxed_slice() })
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> AsRef<[T]> for DynamicVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for DynamicVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Scalar operators: one element-type value applied to every element.
macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for &DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $method(self, val: T) -> DynamicVector<T> {
                self.map(|&a| a $op val)
            }
        }

        impl<T: Scalar> $trait<T> for DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $method(mut self, val: T) -> DynamicVector<T> {
                for a in self.iter_mut() {
                    *a = *a $op val;
                }
                self
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);

impl<T: Scalar> Add<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;

    fn add(self, other: &DynamicVector<T>) -> Self::Output {
        self.add_vector(other)
    }
}

impl<T: Scalar> Sub<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;

    fn sub(self, other: &DynamicVector<T>) -> Self::Output {
        self.sub_vector(other)
    }
}

impl<T: Scalar> Mul<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = Result<T>;

    fn mul(self, other: &DynamicVector<T>) -> Result<T> {
        self.dot(other)
    }
}

/// Elements in index order, separated by a single space.
impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(a, f)?;
        }
        Ok(())
    }
}
