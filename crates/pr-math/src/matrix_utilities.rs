//! Matrix decompositions, wrapping nalgebra's.

use crate::array::Array;
use crate::matrix::Matrix;
use pr_core::{
    errors::{Error, Result},
    Real,
};

/// Thin singular value decomposition `A = U · diag(S) · Vᵀ`.
///
/// For an `n × m` matrix, `U` is `n × k`, `S` has length `k` and `Vᵀ` is
/// `k × m`, with `k = min(n, m)`.
pub struct SVD {
    /// Left singular vectors (column unitary matrix).
    pub u: Matrix,
    /// Singular values.
    pub singular_values: Array,
    /// Right singular vectors transposed.
    pub v_t: Matrix,
}

impl SVD {
    /// Compute the SVD of `m`.
    pub fn new(m: &Matrix) -> Result<Self> {
        let svd = m.inner().clone().svd(true, true);
        let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
            return Err(Error::Runtime("SVD did not produce singular vectors".into()));
        };
        Ok(Self {
            u: Matrix::from(u),
            singular_values: Array::from(svd.singular_values),
            v_t: Matrix::from(v_t),
        })
    }

    /// Largest singular value (0 for an empty decomposition).
    pub fn max_singular_value(&self) -> Real {
        self.singular_values.iter().copied().fold(0.0, Real::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    #[test]
    fn svd_reconstructs_matrix() {
        let a = Matrix::from(DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 1.0, 2.0, 1.0, 3.0]));
        let svd = SVD::new(&a).unwrap();
        assert_eq!(svd.u.rows(), 3);
        assert_eq!(svd.u.cols(), 2);
        assert_eq!(svd.v_t.rows(), 2);
        for i in 0..3 {
            for j in 0..2 {
                let mut x = 0.0;
                for k in 0..2 {
                    x += svd.u[(i, k)] * svd.singular_values[k] * svd.v_t[(k, j)];
                }
                assert!((x - a[(i, j)]).abs() < 1e-12, "A[{i},{j}] = {x}");
            }
        }
    }

    #[test]
    fn degenerate_matrix_has_one_nonzero_singular_value() {
        let a = Matrix::from(DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]));
        let svd = SVD::new(&a).unwrap();
        let smax = svd.max_singular_value();
        assert!((smax - 70.0_f64.sqrt()).abs() < 1e-12, "smax = {smax}");
        assert_eq!(svd.singular_values.iter().filter(|&&s| s > 1e-10 * smax).count(), 1);
    }
}
