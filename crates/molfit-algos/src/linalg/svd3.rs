//! Analytical 3×3 SVD decomposition
//!
//! Computes A = U · diag(S) · Vᵀ for a 3×3 matrix using the Jacobi
//! eigenvalue algorithm on AᵀA (symmetric positive semi-definite).
//!
//! All matrices use row-major layout: `m[row][col]`. The returned factors
//! are an honest decomposition of the input: no handedness is forced on
//! U or V, so their determinant signs carry the reflection information
//! the Kabsch corrector needs.

use crate::linalg::mat3;
use crate::AlignError;

/// Singular values below this are treated as zero when building U
const SIGMA_EPS: f64 = 1e-10;

/// Result of 3×3 SVD decomposition: A = U · diag(S) · Vᵀ
#[derive(Debug, Clone)]
pub struct Svd3 {
    /// Left singular vectors (3×3 orthogonal matrix, columns are vectors)
    pub u: [[f64; 3]; 3],
    /// Singular values (sorted descending, non-negative)
    pub s: [f64; 3],
    /// Right singular vectors transposed (rows are vectors)
    pub vt: [[f64; 3]; 3],
}

/// A provider of 3×3 singular value decompositions.
///
/// The alignment pipeline only depends on this contract, so the
/// reflection-guard and rotation-composition logic can be exercised with
/// hand-built fixtures instead of the numeric path.
pub trait SvdSolver {
    /// Decompose `matrix` into U · diag(S) · Vᵀ
    fn decompose(&self, matrix: &[[f64; 3]; 3]) -> Result<Svd3, AlignError>;
}

/// Default solver backed by [`svd3`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSvd;

impl SvdSolver for JacobiSvd {
    fn decompose(&self, matrix: &[[f64; 3]; 3]) -> Result<Svd3, AlignError> {
        if matrix.iter().flatten().any(|x| !x.is_finite()) {
            return Err(AlignError::SvdFailed);
        }
        Ok(svd3(matrix))
    }
}

/// Compute the SVD of a 3×3 row-major matrix
pub fn svd3(matrix: &[[f64; 3]; 3]) -> Svd3 {
    // 1. AᵀA is symmetric positive semi-definite
    let ata = mat3::mat_mul(&mat3::transpose(matrix), matrix);

    // 2. Jacobi eigendecomposition of AᵀA
    let (eigenvalues, eigvec_cols) = jacobi_eigen_3x3(&ata);

    // 3. Sort by descending eigenvalue, singular values are the square roots
    let mut order = [0usize, 1, 2];
    if eigenvalues[order[0]] < eigenvalues[order[1]] {
        order.swap(0, 1);
    }
    if eigenvalues[order[0]] < eigenvalues[order[2]] {
        order.swap(0, 2);
    }
    if eigenvalues[order[1]] < eigenvalues[order[2]] {
        order.swap(1, 2);
    }

    let s = [
        eigenvalues[order[0]].max(0.0).sqrt(),
        eigenvalues[order[1]].max(0.0).sqrt(),
        eigenvalues[order[2]].max(0.0).sqrt(),
    ];
    let v_cols = [
        eigvec_cols[order[0]],
        eigvec_cols[order[1]],
        eigvec_cols[order[2]],
    ];

    // 4. U columns: u_i = A · v_i / sigma_i
    let mut u_cols = [[0.0f64; 3]; 3];
    for i in 0..3 {
        if s[i] > SIGMA_EPS {
            let av = mat3::mat_vec(matrix, &v_cols[i]);
            let inv_s = 1.0 / s[i];
            u_cols[i] = [av[0] * inv_s, av[1] * inv_s, av[2] * inv_s];
        }
    }

    // Complete the basis for rank-deficient input. The missing columns
    // pair with zero singular values, so any orthonormal completion
    // leaves U · diag(S) · Vᵀ unchanged.
    if s[0] > SIGMA_EPS && s[1] > SIGMA_EPS && s[2] <= SIGMA_EPS {
        u_cols[2] = cross(&u_cols[0], &u_cols[1]);
        normalize(&mut u_cols[2]);
    } else if s[0] > SIGMA_EPS && s[1] <= SIGMA_EPS {
        u_cols[1] = arbitrary_perpendicular(&u_cols[0]);
        u_cols[2] = cross(&u_cols[0], &u_cols[1]);
        normalize(&mut u_cols[2]);
    } else if s[0] <= SIGMA_EPS {
        u_cols = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    }

    // 5. Assemble row-major outputs. Columns of U are u_cols; rows of Vᵀ
    // are the right singular vectors.
    let u = [
        [u_cols[0][0], u_cols[1][0], u_cols[2][0]],
        [u_cols[0][1], u_cols[1][1], u_cols[2][1]],
        [u_cols[0][2], u_cols[1][2], u_cols[2][2]],
    ];
    let vt = v_cols;

    Svd3 { u, s, vt }
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: &mut [f64; 3]) {
    let len = dot(v, v).sqrt();
    if len > 1e-15 {
        v[0] /= len;
        v[1] /= len;
        v[2] /= len;
    }
}

fn arbitrary_perpendicular(v: &[f64; 3]) -> [f64; 3] {
    let candidate = if v[0].abs() < v[1].abs() && v[0].abs() < v[2].abs() {
        [1.0, 0.0, 0.0]
    } else if v[1].abs() < v[2].abs() {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, 0.0, 1.0]
    };
    let mut perp = cross(v, &candidate);
    normalize(&mut perp);
    perp
}

/// Jacobi eigenvalue algorithm for 3×3 symmetric matrices.
///
/// Returns (eigenvalues, eigenvector_columns).
/// Uses cyclic Jacobi rotations until convergence.
fn jacobi_eigen_3x3(m: &[[f64; 3]; 3]) -> ([f64; 3], [[f64; 3]; 3]) {
    let mut a = *m;

    // Eigenvector matrix (starts as identity, accumulates rotations)
    let mut v = [[1.0f64, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    // Cyclic Jacobi: sweep through (0,1), (0,2), (1,2) pairs
    for _ in 0..50 {
        // Convergence: sum of squares of off-diagonal elements
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        if off < 1e-30 {
            break;
        }

        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q].abs() < 1e-15 {
                continue;
            }
            jacobi_rotate(&mut a, &mut v, p, q);
        }
    }

    let eigenvalues = [a[0][0], a[1][1], a[2][2]];

    // Column j of v is the j-th eigenvector
    let eigvec_cols = [
        [v[0][0], v[1][0], v[2][0]],
        [v[0][1], v[1][1], v[2][1]],
        [v[0][2], v[1][2], v[2][2]],
    ];

    (eigenvalues, eigvec_cols)
}

/// Apply a single Jacobi rotation to eliminate a[p][q].
fn jacobi_rotate(a: &mut [[f64; 3]; 3], v: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    // Rotation angle
    let (c, s) = if (app - aqq).abs() < 1e-15 {
        // Equal diagonal elements
        let inv_sqrt2 = 1.0 / 2.0f64.sqrt();
        (inv_sqrt2, if apq > 0.0 { inv_sqrt2 } else { -inv_sqrt2 })
    } else {
        let tau = (aqq - app) / (2.0 * apq);
        let t = if tau >= 0.0 {
            1.0 / (tau + (1.0 + tau * tau).sqrt())
        } else {
            -1.0 / (-tau + (1.0 + tau * tau).sqrt())
        };
        let c = 1.0 / (1.0 + t * t).sqrt();
        (c, t * c)
    };

    // A' = GᵀAG where G is the Givens rotation in the (p,q) plane
    a[p][p] = c * c * app - 2.0 * s * c * apq + s * s * aqq;
    a[q][q] = s * s * app + 2.0 * s * c * apq + c * c * aqq;
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    // Off-diagonal elements involving the remaining index
    let r = 3 - p - q;
    let arp = a[r][p];
    let arq = a[r][q];
    a[r][p] = c * arp - s * arq;
    a[p][r] = a[r][p];
    a[r][q] = s * arp + c * arq;
    a[q][r] = a[r][q];

    // Accumulate eigenvectors: V' = V · G
    for i in 0..3 {
        let vip = v[i][p];
        let viq = v[i][q];
        v[i][p] = c * vip - s * viq;
        v[i][q] = s * vip + c * viq;
    }
}
