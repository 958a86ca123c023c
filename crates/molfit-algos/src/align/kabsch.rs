//! Kabsch algorithm for optimal rigid-body rotation
//!
//! Given two paired sets of 3D points, finds the proper rotation U that
//! minimizes the RMSD of rotated-P against Q, and reports that minimum.
//!
//! The rotation is computed from the cross-covariance C = Pᵀ·Q. The
//! inputs are used as given: if translation matters, center both sets
//! first (see [`crate::centers::centered`]).

use lin_alg::f64::Mat3;

use crate::linalg::mat3;
use crate::linalg::svd3::{JacobiSvd, Svd3, SvdSolver};
use crate::rmsd::rmsd;
use crate::AlignError;

/// Which optional quantities [`kabsch`] should report
#[derive(Debug, Clone, Copy, Default)]
pub struct KabschParams {
    /// Also report the RMSD of the unrotated sets
    pub raw_rmsd: bool,
    /// Also report the optimal rotation matrix
    pub rotation: bool,
}

/// Result of a Kabsch fit
#[derive(Debug, Clone)]
pub struct KabschResult {
    /// RMSD after applying the optimal rotation
    pub rmsd: f64,
    /// RMSD of the sets as given, when requested
    pub raw_rmsd: Option<f64>,
    /// The optimal rotation U (row-major; rotated points are p·U),
    /// when requested
    pub rotation: Option<Mat3>,
    /// Number of point pairs used
    pub n_points: usize,
}

/// Compute the optimal rotation of `p` onto `q` and the minimized RMSD.
///
/// Both slices must be non-empty and of equal length. Uses the built-in
/// Jacobi SVD; see [`kabsch_with_solver`] to substitute another
/// decomposition.
pub fn kabsch(
    p: &[[f64; 3]],
    q: &[[f64; 3]],
    params: &KabschParams,
) -> Result<KabschResult, AlignError> {
    kabsch_with_solver(p, q, params, &JacobiSvd)
}

/// [`kabsch`] with an explicit SVD provider.
pub fn kabsch_with_solver<S: SvdSolver>(
    p: &[[f64; 3]],
    q: &[[f64; 3]],
    params: &KabschParams,
    solver: &S,
) -> Result<KabschResult, AlignError> {
    let n = p.len();
    if n != q.len() {
        return Err(AlignError::LengthMismatch(n, q.len()));
    }
    if n == 0 {
        return Err(AlignError::EmptyPointSet);
    }

    let c = covariance(p, q);
    let mut svd = solver.decompose(&c)?;
    correct_reflection(&mut svd);

    // U = V·Wᵀ in the usual Kabsch notation; with our factors that is
    // the product of the left singular vectors and the transposed right
    // singular vectors.
    let u = mat3::mat_mul(&svd.u, &svd.vt);
    let rotated = rotate(p, &u);
    let best = rmsd(&rotated, q)?;

    Ok(KabschResult {
        rmsd: best,
        raw_rmsd: if params.raw_rmsd {
            Some(rmsd(p, q)?)
        } else {
            None
        },
        rotation: if params.rotation {
            Some(mat3::to_mat3(&u))
        } else {
            None
        },
        n_points: n,
    })
}

/// Cross-covariance matrix C = Pᵀ·Q
///
/// C[a][b] = Σᵢ p[i][a]·q[i][b]. Callers are responsible for shape
/// checks; the orchestrator validates before calling.
fn covariance(p: &[[f64; 3]], q: &[[f64; 3]]) -> [[f64; 3]; 3] {
    let mut c = [[0.0f64; 3]; 3];
    for (pi, qi) in p.iter().zip(q.iter()) {
        for a in 0..3 {
            for b in 0..3 {
                c[a][b] += pi[a] * qi[b];
            }
        }
    }
    c
}

/// Reflection guard: force the composed rotation to be proper.
///
/// When det(U)·det(Vᵀ) < 0 the decomposition composes to a reflection;
/// negating the smallest singular value and the last column of U flips
/// it back to a rotation. A product of exactly zero (degenerate
/// covariance, e.g. collinear points) is left uncorrected.
fn correct_reflection(svd: &mut Svd3) {
    let d = mat3::det(&svd.u) * mat3::det(&svd.vt);
    if d < 0.0 {
        svd.s[2] = -svd.s[2];
        for row in &mut svd.u {
            row[2] = -row[2];
        }
    }
}

/// Rotate every point: p'ᵢ = pᵢ·U (row-vector convention)
pub fn rotate(points: &[[f64; 3]], u: &[[f64; 3]; 3]) -> Vec<[f64; 3]> {
    points
        .iter()
        .map(|p| {
            [
                p[0] * u[0][0] + p[1] * u[1][0] + p[2] * u[2][0],
                p[0] * u[0][1] + p[1] * u[1][1] + p[2] * u[2][1],
                p[0] * u[0][2] + p[1] * u[1][2] + p[2] * u[2][2],
            ]
        })
        .collect()
}
