//! Construction ceilings for vectors and matrices.
//!
//! Both ceilings are fixed at compile time and form part of the public
//! contract: a vector may hold at most [`MAX_VECTOR_SIZE`] elements and a
//! square matrix may have at most [`MAX_MATRIX_SIZE`] rows.

use crate::error::{DmError, Result};

/// Largest element count a `DynamicVector` may be built with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension a `DynamicMatrix` may be built with.
pub const MAX_MATRIX_SIZE: usize = 10_000;

fn check_size(requested: usize, max: usize) -> Result<()> {
    if requested == 0 || requested > max {
        log::debug!("rejecting container size {} (max {})", requested, max);
        return Err(DmError::OutOfRange { requested, max });
    }
    Ok(())
}

/// Accepts `1..=MAX_VECTOR_SIZE`.
pub fn check_vector_size(size: usize) -> Result<()> {
    check_size(size, MAX_VECTOR_SIZE)
}

/// Accepts `1..=MAX_MATRIX_SIZE`.
pub fn check_matrix_size(size: usize) -> Result<()> {
    check_size(size, MAX_MATRIX_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(check_vector_size(1).is_ok());
        assert!(check_vector_size(MAX_VECTOR_SIZE).is_ok());
        assert!(check_matrix_size(MAX_MATRIX_SIZE).is_ok());
    }

    #[test]
    fn zero_and_overflow_are_rejected() {
        for bad in [0, MAX_VECTOR_SIZE + 1] {
            match check_vector_size(bad) {
                Err(DmError::OutOfRange { requested, max }) => {
                    assert_eq!(requested, bad);
                    assert_eq!(max, MAX_VECTOR_SIZE);
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
        assert!(check_matrix_size(MAX_MATRIX_SIZE + 1).is_err());
    }

    #[test]
    fn negative_sizes_wrap_and_are_rejected() {
        let wrapped = (-5i64) as usize;
        assert!(matches!(check_vector_size(wrapped), Err(DmError::OutOfRange { .. })));
        assert!(matches!(check_matrix_size(wrapped), Err(DmError::OutOfRange { .. })));
    }

    #[test]
    fn ceilings_match_published_values() {
        assert_eq!(MAX_VECTOR_SIZE, 100_000_000);
        assert_eq!(MAX_MATRIX_SIZE, 10_000);
    }
}
