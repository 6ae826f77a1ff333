//! Matriz: small dense-matrix arithmetic library in pure Rust.
//!
//! Matriz provides a single row-major `f64` matrix type with construction,
//! element-wise addition, matrix multiplication, transposition, flat-array
//! import, and truncated console rendering. Operations borrow immutable
//! inputs and return fresh matrices; failures are explicit error values,
//! never panics.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
//! let b = Matrix::from_slice(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//! assert_eq!(product.get(0, 0), 58.0);
//! assert_eq!(product.get(1, 1), 154.0);
//!
//! let sum = a.add(&a).unwrap();
//! assert_eq!(sum.get(1, 2), 12.0);
//!
//! assert_eq!(a.transpose().shape(), (3, 2));
//! println!("{a}");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The core Matrix type and its operations
//! - [`error`]: Error kinds for precondition violations
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
