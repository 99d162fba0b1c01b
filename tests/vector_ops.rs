//! Tests for DynamicVector: construction bounds, copy and assignment, checked
//! access, equality, and scalar / elementwise / dot arithmetic.

use approx::assert_abs_diff_eq;
use dynmat::{DmError, DynamicVector, MAX_VECTOR_SIZE};
use rand::Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn zero_to_nine() -> DynamicVector<i32> {
    DynamicVector::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
}

#[test]
fn can_create_vector_with_positive_length() {
    for size in [1, 5, 1000] {
        let v = DynamicVector::<i32>::new(size).unwrap();
        assert_eq!(v.size(), size);
    }
}

#[test]
fn cant_create_too_large_vector() {
    init_logging();
    assert!(matches!(
        DynamicVector::<i32>::new(MAX_VECTOR_SIZE + 1),
        Err(DmError::OutOfRange { .. })
    ));
}

#[test]
fn throws_when_create_vector_with_negative_or_zero_length() {
    init_logging();
    let negative = -5i64 as usize;
    assert!(matches!(DynamicVector::<i32>::new(negative), Err(DmError::OutOfRange { .. })));
    assert!(matches!(DynamicVector::<i32>::new(0), Err(DmError::OutOfRange { .. })));
}

#[test]
fn copied_vector_is_equal_to_source_one() {
    let v1 = zero_to_nine();
    let v2 = v1.clone();
    assert_eq!(v1, v2);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let v1 = zero_to_nine();
    let mut v2 = v1.clone();
    assert_ne!(v1.as_slice().as_ptr(), v2.as_slice().as_ptr());
    v2[0] = 100;
    assert_eq!(v1[0], 0);
    assert_ne!(v1, v2);
}

#[test]
fn source_buffer_can_be_dropped_after_construction() {
    let arr = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let v = DynamicVector::from_buffer(&arr, 10).unwrap();
    drop(arr);
    assert_eq!(v, zero_to_nine());
}

#[test]
fn move_transfers_buffer_without_copy() {
    let v1 = zero_to_nine();
    let ptr = v1.as_slice().as_ptr();
    let v2 = v1;
    assert_eq!(v2.as_slice().as_ptr(), ptr);

    let mut v3 = zero_to_nine();
    let taken = std::mem::take(&mut v3);
    assert_eq!(taken, zero_to_nine());
    assert_eq!(v3.size(), 1);
}

#[test]
fn can_set_and_get_element() {
    let mut v = DynamicVector::<i32>::new(4).unwrap();
    v[0] = 4;
    assert_eq!(v[0], 4);
    assert_eq!(*v.at(0).unwrap(), 4);
}

#[test]
fn throws_when_set_element_with_negative_index() {
    let mut v = DynamicVector::<i32>::new(10).unwrap();
    let index = -1isize as usize;
    match v.at_mut(index) {
        Err(DmError::IndexOutOfRange { index: got, size }) => {
            assert_eq!(got, usize::MAX);
            assert_eq!(size, 10);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn throws_when_set_element_with_too_large_index() {
    let mut v = DynamicVector::<i32>::new(10).unwrap();
    assert!(matches!(v.at_mut(10), Err(DmError::IndexOutOfRange { index: 10, size: 10 })));
}

#[test]
fn checked_access_matches_unchecked_in_range() {
    let v = zero_to_nine();
    for i in 0..v.size() {
        assert_eq!(*v.at(i).unwrap(), v[i]);
    }
}

#[test]
#[should_panic]
fn unchecked_index_out_of_range_panics() {
    let v = DynamicVector::<i32>::new(3).unwrap();
    let _ = v[3];
}

#[test]
fn can_assign_vector_to_itself() {
    let mut v = zero_to_nine();
    v = v.clone();
    assert_eq!(v, zero_to_nine());
}

#[test]
fn can_assign_vectors_of_equal_size() {
    let mut v1 = DynamicVector::<i32>::new(10).unwrap();
    let v2 = zero_to_nine();
    v1.clone_from(&v2);
    assert_eq!(v1, v2);
}

#[test]
fn assign_operator_change_vector_size() {
    let mut v1 = DynamicVector::<i32>::new(5).unwrap();
    let v2 = DynamicVector::<i32>::new(10).unwrap();
    let before = v1.size();
    v1 = v2.clone();
    assert_ne!(before, v1.size());
    assert_eq!(v1.size(), 10);
}

#[test]
fn can_assign_vectors_of_different_size() {
    let mut v1 = zero_to_nine();
    let v2 = DynamicVector::<i32>::new(5).unwrap();
    v1.clone_from(&v2);
    assert_eq!(v1, v2);
}

#[test]
fn compare_equal_vectors_return_true() {
    assert!(zero_to_nine() == zero_to_nine());
}

#[test]
fn compare_vector_with_itself_return_true() {
    let v = zero_to_nine();
    assert!(v == v);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let v1 = DynamicVector::<i32>::new(10).unwrap();
    let v2 = DynamicVector::<i32>::new(5).unwrap();
    assert_ne!(v1, v2);
}

#[test]
fn can_add_scalar_to_vector() {
    let v = DynamicVector::<i32>::new(10).unwrap();
    let res = DynamicVector::filled(10, 1).unwrap();
    assert_eq!(&v + 1, res);
}

#[test]
fn can_subtract_scalar_from_vector() {
    let v = DynamicVector::<i32>::new(10).unwrap();
    let res = DynamicVector::filled(10, -1).unwrap();
    assert_eq!(&v - 1, res);
}

#[test]
fn can_multiply_scalar_by_vector() {
    let v = DynamicVector::<i32>::filled(10, 1).unwrap();
    let res = DynamicVector::filled(10, 10).unwrap();
    assert_eq!(&v * 10, res);
}

#[test]
fn scalar_ops_apply_to_every_element_and_keep_source() {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..50).map(|_| rng.gen_range(-10.0..10.0)).collect();
    let v = DynamicVector::from_slice(&data).unwrap();
    let c = 2.5;
    let shifted = &v + c;
    let scaled = &v * c;
    for i in 0..v.size() {
        assert_abs_diff_eq!(shifted[i], data[i] + c, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[i], data[i] * c, epsilon = 1e-12);
    }
    assert_eq!(v.as_slice(), data.as_slice());
}

#[test]
fn can_add_vectors_with_equal_size() {
    let mut v1 = DynamicVector::<i32>::new(10).unwrap();
    let v2 = DynamicVector::<i32>::new(10).unwrap();
    for i in 0..5 {
        v1[i] = 10;
    }
    let sum = (&v2 + &v1).unwrap();
    assert_eq!(sum, v1);
}

#[test]
fn cant_add_vectors_with_not_equal_size() {
    init_logging();
    let v1 = DynamicVector::<i32>::new(5).unwrap();
    let v2 = DynamicVector::<i32>::new(10).unwrap();
    assert!(matches!(&v1 + &v2, Err(DmError::SizeMismatch { expected: 5, actual: 10 })));
}

#[test]
fn can_subtract_vectors_with_equal_size() {
    let v1 = DynamicVector::from_slice(&[5, 5, 5, 5, 5]).unwrap();
    let v2 = v1.clone();
    let res = DynamicVector::<i32>::new(5).unwrap();
    assert_eq!((&v2 - &v1).unwrap(), res);
}

#[test]
fn cant_subtract_vectors_with_not_equal_size() {
    let v1 = DynamicVector::<i32>::new(5).unwrap();
    let v2 = DynamicVector::<i32>::new(10).unwrap();
    assert!(matches!(v1.sub_vector(&v2), Err(DmError::SizeMismatch { .. })));
}

#[test]
fn can_multiply_vectors_with_equal_size() {
    let v1 = DynamicVector::from_slice(&[2, 2, 2, 2, 2]).unwrap();
    let v2 = DynamicVector::from_slice(&[5, 5, 5, 5, 5]).unwrap();
    assert_eq!((&v1 * &v2).unwrap(), 50);
}

#[test]
fn cant_multiply_vectors_with_not_equal_size() {
    let v1 = DynamicVector::<i32>::new(5).unwrap();
    let v2 = DynamicVector::<i32>::new(10).unwrap();
    assert!(matches!(&v1 * &v2, Err(DmError::SizeMismatch { .. })));
}

#[test]
fn dot_product_matches_manual_sum() {
    let mut rng = rand::thread_rng();
    let n = 64;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let y: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let vx = DynamicVector::from_slice(&x).unwrap();
    let vy = DynamicVector::from_slice(&y).unwrap();
    let expected: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
    assert_abs_diff_eq!(vx.dot(&vy).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn failed_operation_leaves_operands_unchanged() {
    let v1 = zero_to_nine();
    let v2 = DynamicVector::filled(3, 7).unwrap();
    assert!((&v1 + &v2).is_err());
    assert_eq!(v1, zero_to_nine());
    assert_eq!(v2, DynamicVector::filled(3, 7).unwrap());
}
