//! # Bounds-checked numeric containers
//!
//! Two generic value types for numeric code that wants predictable ownership
//! and strict size validation: a bounds-checked dense [`Vector`] and an
//! upper-triangular [`TriangularMatrix`] built from rows of that vector.
//!
//! Both types have deep-copy semantics: cloning or assigning always produces
//! independently owned storage, and assignment (`clone_from`) may change the
//! receiver's size. Construction validates the requested size against a
//! build-time bound, element access is checked on every call, and elementwise
//! addition and subtraction validate that the operands have equal size. All
//! failures are reported through [`Error`]; nothing panics except the
//! `Index` and operator impls that std conventions require, and those
//! delegate to the checked API first.
//!
//! ```
//! use trimat::{TriangularMatrix, Vector};
//!
//! let mut m = TriangularMatrix::<i32>::new(3)?;
//! *m.element_mut(0, 2)? += 8;
//!
//! let zero = TriangularMatrix::<i32>::new(3)?;
//! assert_eq!(m.checked_add(&zero)?, m);
//!
//! let v = Vector::from_data(vec![1, 2])?;
//! assert_eq!(m.row(1)?.len(), v.len());
//! # Ok::<(), trimat::Error>(())
//! ```
#![warn(missing_docs)]

pub use error::{Error, Result};
pub use matrix::{MAX_MATRIX_SIZE, TriangularMatrix};
pub use vector::{MAX_VECTOR_SIZE, Vector};

pub mod error;
pub mod matrix;
pub mod vector;
