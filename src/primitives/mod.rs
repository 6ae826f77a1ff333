//! Core compute primitives (Matrix).
//!
//! The foundation type for all matrix arithmetic and rendering.

mod matrix;

pub use matrix::Matrix;
