//! Rigid-body alignment
//!
//! Kabsch algorithm for the optimal rotation between two paired
//! coordinate sets, plus the helper to apply a rotation to a set.

pub mod kabsch;

pub use kabsch::{kabsch, kabsch_with_solver, rotate, KabschParams, KabschResult};
