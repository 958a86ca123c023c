//! Numerical kernels for molfit
//!
//! This crate provides the computational core of molfit:
//! - Analytical 3×3 SVD decomposition
//! - Kabsch algorithm for optimal rigid-body rotation
//! - RMSD between paired coordinate sets
//! - Centroid and pre-centering helpers

pub mod align;
pub mod centers;
pub mod linalg;
pub mod rmsd;

pub use align::{kabsch, kabsch_with_solver, rotate, KabschParams, KabschResult};
pub use centers::{centered, centroid};
pub use linalg::{svd3, JacobiSvd, Svd3, SvdSolver};
pub use rmsd::rmsd;

/// Errors from alignment algorithms
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    #[error("Coordinate sets have different lengths: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("Empty coordinate set")]
    EmptyPointSet,

    #[error("SVD failed: covariance matrix has non-finite entries")]
    SvdFailed,
}
