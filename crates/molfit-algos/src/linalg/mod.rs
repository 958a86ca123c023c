//! Linear algebra utilities
//!
//! Small row-major 3×3 matrix kernels used by the alignment pipeline:
//!
//! - [`mat3`] — 3×3 row-major matrix operations (multiply, transpose, determinant)
//! - [`svd3`] — Analytical 3×3 SVD decomposition (Jacobi eigenvalue method)

pub mod mat3;
pub mod svd3;

pub use svd3::{svd3, JacobiSvd, Svd3, SvdSolver};
