//! General linear least-squares regression.
//!
//! Uses SVD to solve the linear regression problem
//! $\mathbf{y} = \mathbf{A}\,\boldsymbol{\beta} + \boldsymbol{\varepsilon}$,
//! where $\mathbf{A}$ is the design matrix built from basis functions.
//!
//! Small singular values are discarded, so rank-deficient and
//! under-determined systems (fewer observations than basis functions)
//! yield the minimum-norm solution instead of failing. Longstaff-Schwartz
//! regressions hit that case whenever only a handful of paths are in the
//! money.

use crate::array::Array;
use crate::matrix::Matrix;
use crate::matrix_utilities::SVD;
use pr_core::{
    errors::{Error, Result},
    Real,
};

/// Result of an ordinary least-squares fit.
#[derive(Debug, Clone)]
pub struct LinearLeastSquaresRegression {
    /// Fitted coefficients β (one per basis function).
    coefficients: Array,
    /// Fitted values A β.
    fitted_values: Array,
}

impl LinearLeastSquaresRegression {
    /// Fit the model given a pre-built *n × m* design matrix.
    pub fn from_design_matrix(a: &Matrix, y: &[Real]) -> Result<Self> {
        let n = a.rows();
        let m = a.cols();
        if y.len() != n {
            return Err(Error::InvalidArgument(format!(
                "y has {} observations but the design matrix has {n} rows",
                y.len()
            )));
        }
        if n == 0 || m == 0 {
            return Err(Error::InvalidArgument(
                "regression needs at least one observation and one basis function".into(),
            ));
        }

        let svd = SVD::new(a)?;
        let threshold = n.max(m) as Real * f64::EPSILON * svd.max_singular_value();

        // β = V · diag(1/sᵢ) · Uᵀ · y, keeping only sᵢ > threshold
        let y_arr = Array::from_slice(y);
        let ut_y = svd.u.transpose().mul_vec(&y_arr);

        let mut coefficients = vec![0.0; m];
        for (k, &s) in svd.singular_values.iter().enumerate() {
            if s > threshold {
                let ratio = ut_y[k] / s;
                for (j, c) in coefficients.iter_mut().enumerate() {
                    *c += ratio * svd.v_t[(k, j)];
                }
            }
        }

        let coefficients = Array::from_vec(coefficients);
        let fitted_values = a.mul_vec(&coefficients);

        Ok(Self {
            coefficients,
            fitted_values,
        })
    }

    /// Fitted coefficients β.
    pub fn coefficients(&self) -> &Array {
        &self.coefficients
    }

    /// Fitted values A β, one per observation.
    pub fn fitted_values(&self) -> &Array {
        &self.fitted_values
    }
}
