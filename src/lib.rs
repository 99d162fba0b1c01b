//! dynmat: size-bounded dynamic vector and square matrix containers
//!
//! This crate provides an owning one-dimensional `DynamicVector<T>` and a square
//! `DynamicMatrix<T>` composed of row vectors, with scalar, elementwise and
//! product arithmetic, checked and unchecked indexing, and whitespace-delimited
//! text I/O.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod matrix;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::DmError;
pub use io::*;
pub use matrix::*;
pub use vector::*;
