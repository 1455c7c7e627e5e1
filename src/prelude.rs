//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//!
//! let v: Vector<f64, 3> = Vector::ones();
//! let m: Matrix<f64, 3, 3> = Matrix::zeros();
//! assert_eq!(m * v, Vector::zeros());
//! ```

pub use crate::error::{LinealError, Result};
pub use crate::matrix::Matrix;
pub use crate::traits::Scalar;
pub use crate::vector::Vector;
