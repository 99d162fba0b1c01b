//! Construction limits shared by all containers.

pub mod limits;
pub use limits::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE, check_matrix_size, check_vector_size};
