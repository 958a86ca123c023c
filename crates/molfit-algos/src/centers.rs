//! Centroid and pre-centering helpers
//!
//! The Kabsch pipeline does not translate its inputs; callers that want
//! rotation about the common center subtract the centroid first.

use lin_alg::f64::Vec3;

use crate::AlignError;

/// Arithmetic mean point of a non-empty coordinate set
pub fn centroid(points: &[[f64; 3]]) -> Result<Vec3, AlignError> {
    if points.is_empty() {
        return Err(AlignError::EmptyPointSet);
    }

    let mut sum = [0.0f64; 3];
    for p in points {
        sum[0] += p[0];
        sum[1] += p[1];
        sum[2] += p[2];
    }
    let inv_n = 1.0 / points.len() as f64;
    Ok(Vec3::new(sum[0] * inv_n, sum[1] * inv_n, sum[2] * inv_n))
}

/// Copy of `points` translated so its centroid is the origin
pub fn centered(points: &[[f64; 3]]) -> Result<Vec<[f64; 3]>, AlignError> {
    let c = centroid(points)?;
    Ok(points
        .iter()
        .map(|p| [p[0] - c.x, p[1] - c.y, p[2] - c.z])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_set() {
        let points = vec![[1.0, 1.0, 1.0]; 10];
        let c = centroid(&points).unwrap();
        assert_eq!(c.x, 1.0);
        assert_eq!(c.y, 1.0);
        assert_eq!(c.z, 1.0);
    }

    #[test]
    fn test_mean_of_opposite_points() {
        let points = vec![[2.0, -4.0, 6.0], [-2.0, 4.0, -6.0]];
        let c = centroid(&points).unwrap();
        assert_eq!(c.x, 0.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_empty_set() {
        assert!(matches!(centroid(&[]), Err(AlignError::EmptyPointSet)));
        assert!(matches!(centered(&[]), Err(AlignError::EmptyPointSet)));
    }

    #[test]
    fn test_centered_has_zero_centroid() {
        let points = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let shifted = centered(&points).unwrap();
        let c = centroid(&shifted).unwrap();
        assert!(c.x.abs() < 1e-12);
        assert!(c.y.abs() < 1e-12);
        assert!(c.z.abs() < 1e-12);
    }
}
