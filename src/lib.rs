//! Lineal: compile-time-sized linear algebra primitives in pure Rust.
//!
//! Fixed-dimension vectors and matrices of floating-point elements, with
//! the dimensions carried in the type as const generics. Storage is inline
//! (no heap allocation), operand shapes are checked by the compiler, and
//! equality is tolerance-based so that algebraically equivalent results
//! compare equal despite rounding.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! // A 3-column x 2-row matrix and a 3-vector.
//! let m = Matrix::from_rows([
//!     [1.0_f32, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//! ]);
//! let v = Vector::from_array([1.0_f32, 1.0, 1.0]);
//!
//! // Matrix on the left: one dot product per row.
//! assert_eq!(m * v, Vector::from_array([6.0, 15.0]));
//!
//! // Vector on the left: one dot product per column.
//! let w = Vector::from_array([1.0_f32, 1.0]);
//! assert_eq!(w * m, Vector::from_array([5.0, 7.0, 9.0]));
//! ```
//!
//! # Modules
//!
//! - [`vector`]: fixed-length [`Vector<T, N>`](Vector)
//! - [`matrix`]: fixed-size [`Matrix<T, N, M>`](Matrix), `N` columns by `M` rows
//! - [`traits`]: the [`Scalar`] element trait, implemented for `f32`/`f64`
//! - [`error`]: [`LinealError`] and the crate [`Result`] alias
//! - [`prelude`]: convenience re-exports
//!
//! Serialization for both container types (flat element sequences) is
//! available behind the `serde` feature flag.

pub mod error;
pub mod matrix;
pub mod prelude;
pub mod traits;
pub mod vector;

#[cfg(feature = "serde")]
mod serde;

pub use error::{LinealError, Result};
pub use matrix::Matrix;
pub use traits::Scalar;
pub use vector::Vector;
