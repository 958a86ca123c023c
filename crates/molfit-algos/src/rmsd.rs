//! Root-mean-square deviation between paired coordinate sets

use crate::AlignError;

/// Compute the RMSD between two equal-length coordinate sets.
///
/// sqrt((1/N)·Σᵢ |aᵢ − bᵢ|²). The sets must be non-empty and of the
/// same length; no superposition is performed.
pub fn rmsd(a: &[[f64; 3]], b: &[[f64; 3]]) -> Result<f64, AlignError> {
    if a.len() != b.len() {
        return Err(AlignError::LengthMismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(AlignError::EmptyPointSet);
    }

    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| {
            let dx = p[0] - q[0];
            let dy = p[1] - q[1];
            let dz = p[2] - q[2];
            dx * dx + dy * dy + dz * dz
        })
        .sum();

    Ok((sum / a.len() as f64).sqrt())
}
