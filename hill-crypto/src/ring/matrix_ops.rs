use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// Reduces every entry of `M` into `[0, modulus - 1]`.
pub fn normalize_matrix(M: &Matrix, ring: &Ring) -> Matrix {
    M.map(|row| row.map(|v| ring.normalize(v)))
}

/// Computes `det(M) = M00·M11 − M01·M10` modulo the ring's modulus.
pub fn determinant(M: &Matrix, ring: &Ring) -> i64 {
    ring.sub(ring.mul(M[0][0], M[1][1]), ring.mul(M[0][1], M[1][0]))
}

/// The adjugate `[[M11, −M01], [−M10, M00]]`, reduced into the ring.
pub fn adjugate(M: &Matrix, ring: &Ring) -> Matrix {
    [
        [ring.normalize(M[1][1]), ring.neg(M[0][1])],
        [ring.neg(M[1][0]), ring.normalize(M[0][0])],
    ]
}

/// Multiplies every entry of `M` by the scalar `k`.
pub fn scalar_mul(k: i64, M: &Matrix, ring: &Ring) -> Matrix {
    M.map(|row| row.map(|v| ring.mul(k, v)))
}

/// M·x where M is 2×2 and x is a column pair.
pub fn matrix_vector_mul(M: &Matrix, x: &Vector, ring: &Ring) -> Vector {
    M.map(|row| ring.add(ring.mul(row[0], x[0]), ring.mul(row[1], x[1])))
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
pub fn matrix_mul(A: &Matrix, B: &Matrix, ring: &Ring) -> Matrix {
    let mut C = [[0i64; 2]; 2];
    for (i, row) in C.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = ring.add(ring.mul(A[i][0], B[0][j]), ring.mul(A[i][1], B[1][j]));
        }
    }
    C
}

/// The 2×2 identity matrix.
pub fn identity_matrix() -> Matrix {
    [[1, 0], [0, 1]]
}

/// Inverse of `M` in the ring: `det(M)^-1 · adj(M)`.
///
/// # Errors
///
/// Returns `HillCryptoError::NotInvertible` when the determinant is not a unit of the ring.
pub fn matrix_inverse(M: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let det = determinant(M, ring);
    let det_inv = ring.inv(det).map_err(|_| {
        HillCryptoError::NotInvertible(format!(
            "Matrix determinant {} shares a factor with modulus {}",
            det,
            ring.modulus()
        ))
    })?;

    Ok(scalar_mul(det_inv, &adjugate(M, ring), ring))
}

/// Builds a 2×2 matrix from loosely shaped rows.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidKeyShape` unless there are exactly two rows of two entries.
pub fn matrix_from_rows(rows: &[Vec<i64>]) -> Result<Matrix, HillCryptoError> {
    if rows.len() != 2 {
        return Err(HillCryptoError::InvalidKeyShape(format!(
            "Expected 2 rows, got {}",
            rows.len()
        )));
    }

    let mut M = [[0i64; 2]; 2];
    for (i, row) in rows.iter().enumerate() {
        M[i] = row.as_slice().try_into().map_err(|_| {
            HillCryptoError::InvalidKeyShape(format!(
                "Row {} has length {} but expected 2",
                i,
                row.len()
            ))
        })?;
    }
    Ok(M)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: Matrix = [[5, 8], [17, 3]];
    const SINGULAR_KEY: Matrix = [[3, 3], [2, 5]];

    fn test_ring() -> Ring {
        Ring::hill()
    }

    #[test]
    fn test_determinant() {
        let ring = test_ring();
        // 15 - 136 = -121 = 14 mod 27
        assert_eq!(determinant(&KEY, &ring), 14);
        // 15 - 6 = 9
        assert_eq!(determinant(&SINGULAR_KEY, &ring), 9);
        assert_eq!(determinant(&[[-1, 0], [0, 1]], &ring), 26);
    }

    #[test]
    fn test_adjugate() {
        let ring = test_ring();
        assert_eq!(adjugate(&KEY, &ring), [[3, 19], [10, 5]]);
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let ring = test_ring();
        // R1: 5*7 + 8*4 = 67 = 13 mod 27
        // R2: 17*7 + 3*4 = 131 = 23 mod 27
        assert_eq!(matrix_vector_mul(&KEY, &[7, 4], &ring), [13, 23]);
        // R1: 5*11 + 8*15 = 175 = 13 mod 27
        // R2: 17*11 + 3*15 = 232 = 16 mod 27
        assert_eq!(matrix_vector_mul(&KEY, &[11, 15], &ring), [13, 16]);
    }

    #[test]
    fn test_matrix_mul_ok() {
        let ring = test_ring();
        let a = [[1, 2], [3, 4]];
        let b = [[5, 6], [7, 8]];
        // [[19, 22], [43, 50]] mod 27
        assert_eq!(matrix_mul(&a, &b, &ring), [[19, 22], [16, 23]]);
        assert_eq!(matrix_mul(&a, &identity_matrix(), &ring), a);
    }

    #[test]
    fn test_matrix_inverse_ok() -> Result<(), HillCryptoError> {
        let ring = test_ring();
        // det = 14, 14^-1 = 2, adj = [[3, 19], [10, 5]]
        let inv = matrix_inverse(&KEY, &ring)?;
        assert_eq!(inv, [[6, 11], [20, 10]]);
        assert_eq!(matrix_mul(&KEY, &inv, &ring), identity_matrix());
        assert_eq!(matrix_mul(&inv, &KEY, &ring), identity_matrix());
        Ok(())
    }

    #[test]
    fn test_matrix_inverse_normalizes_entries() -> Result<(), HillCryptoError> {
        let ring = test_ring();
        let shifted = [[5 + 27, 8 - 54], [17 - 27, 3 + 270]];
        assert_eq!(normalize_matrix(&shifted, &ring), KEY);
        assert_eq!(matrix_inverse(&shifted, &ring)?, matrix_inverse(&KEY, &ring)?);
        Ok(())
    }

    #[test]
    fn test_matrix_inverse_singular() {
        let ring = test_ring();
        assert!(matches!(
            matrix_inverse(&SINGULAR_KEY, &ring),
            Err(HillCryptoError::NotInvertible(_))
        ));
        assert!(matrix_inverse(&[[1, 2], [2, 4]], &ring).is_err());
    }

    #[test]
    fn test_matrix_from_rows() -> Result<(), HillCryptoError> {
        assert_eq!(matrix_from_rows(&[vec![5, 8], vec![17, 3]])?, KEY);
        assert!(matches!(
            matrix_from_rows(&[vec![5, 8]]),
            Err(HillCryptoError::InvalidKeyShape(_))
        ));
        assert!(matches!(
            matrix_from_rows(&[vec![5, 8], vec![17, 3, 1]]),
            Err(HillCryptoError::InvalidKeyShape(_))
        ));
        assert!(matrix_from_rows(&[vec![], vec![]]).is_err());
        Ok(())
    }
}
