//! Continuation-value regression for Longstaff-Schwartz.
//!
//! The backward sweep only depends on the [`RegressionBasis`] capability;
//! the power and Laguerre bases are interchangeable.

use pr_core::{errors::Result, Real, Size};
use pr_math::{LinearLeastSquaresRegression, Matrix};

/// A fixed set of basis functions `φ₀ … φₘ₋₁` evaluated at one point.
pub trait RegressionBasis: Send + Sync {
    /// Number of basis functions.
    fn size(&self) -> Size;

    /// Write `φⱼ(x)` into `out[j]` for every `j`; `out.len() == self.size()`.
    fn evaluate(&self, x: Real, out: &mut [Real]);

    /// Short human-readable name.
    fn name(&self) -> &str;
}

/// Monomials `{1, x, …, x^degree}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBasis {
    degree: Size,
}

impl PowerBasis {
    /// Monomials up to and including `x^degree`.
    pub fn new(degree: Size) -> Self {
        Self { degree }
    }
}

impl Default for PowerBasis {
    /// `{1, x, x²}`.
    fn default() -> Self {
        Self::new(2)
    }
}

impl RegressionBasis for PowerBasis {
    fn size(&self) -> Size {
        self.degree + 1
    }

    fn evaluate(&self, x: Real, out: &mut [Real]) {
        let mut power = 1.0;
        for o in out.iter_mut() {
            *o = power;
            power *= x;
        }
    }

    fn name(&self) -> &str {
        "power"
    }
}

/// A constant plus the first three weighted Laguerre polynomials:
///
/// * `L₀(x) = e^{−x/2}`
/// * `L₁(x) = e^{−x/2}(1 − x)`
/// * `L₂(x) = e^{−x/2}(1 − 2x + x²/2)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaguerreBasis;

impl RegressionBasis for LaguerreBasis {
    fn size(&self) -> Size {
        4
    }

    fn evaluate(&self, x: Real, out: &mut [Real]) {
        let w = (-x / 2.0).exp();
        out[0] = 1.0;
        out[1] = w;
        out[2] = w * (1.0 - x);
        out[3] = w * (1.0 - 2.0 * x + x * x / 2.0);
    }

    fn name(&self) -> &str {
        "laguerre"
    }
}

/// Configuration-level choice of basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegressionBasisKind {
    /// [`PowerBasis`] of the given degree.
    Power {
        /// Highest power of `x`.
        degree: Size,
    },
    /// [`LaguerreBasis`].
    #[default]
    Laguerre,
}

impl RegressionBasis for RegressionBasisKind {
    fn size(&self) -> Size {
        match *self {
            RegressionBasisKind::Power { degree } => PowerBasis::new(degree).size(),
            RegressionBasisKind::Laguerre => LaguerreBasis.size(),
        }
    }

    fn evaluate(&self, x: Real, out: &mut [Real]) {
        match *self {
            RegressionBasisKind::Power { degree } => PowerBasis::new(degree).evaluate(x, out),
            RegressionBasisKind::Laguerre => LaguerreBasis.evaluate(x, out),
        }
    }

    fn name(&self) -> &str {
        match self {
            RegressionBasisKind::Power { .. } => "power",
            RegressionBasisKind::Laguerre => "laguerre",
        }
    }
}

/// An ordinary least-squares fit over the in-the-money paths of one step.
#[derive(Debug, Clone)]
pub struct RegressionFit {
    /// Fitted coefficients, one per basis function.
    pub coefficients: Vec<Real>,
    /// Fitted value for every observation, in input order.
    pub fitted_values: Vec<Real>,
}

/// Fits the continuation value against a basis.
pub struct RegressionEngine<'a> {
    basis: &'a dyn RegressionBasis,
}

impl<'a> RegressionEngine<'a> {
    /// Create an engine over `basis`.
    pub fn new(basis: &'a dyn RegressionBasis) -> Self {
        Self { basis }
    }

    /// Regress `y` on the basis evaluated at `x`.
    ///
    /// Callers pass strike-scaled inputs so that basis values stay near
    /// unit magnitude.
    pub fn fit(&self, x: &[Real], y: &[Real]) -> Result<RegressionFit> {
        let n = x.len();
        let m = self.basis.size();
        let mut design = Matrix::zeros(n, m);
        let mut row = vec![0.0; m];
        for (i, &xi) in x.iter().enumerate() {
            self.basis.evaluate(xi, &mut row);
            for (j, &phi) in row.iter().enumerate() {
                design[(i, j)] = phi;
            }
        }
        let ols = LinearLeastSquaresRegression::from_design_matrix(&design, y)?;
        Ok(RegressionFit {
            coefficients: ols.coefficients().to_vec(),
            fitted_values: ols.fitted_values().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn power_basis_values() {
        let mut out = [0.0; 3];
        PowerBasis::default().evaluate(1.5, &mut out);
        assert_eq!(out, [1.0, 1.5, 2.25]);
    }

    #[test]
    fn laguerre_basis_values() {
        let mut out = [0.0; 4];
        LaguerreBasis.evaluate(0.0, &mut out);
        assert_eq!(out, [1.0, 1.0, 1.0, 1.0]);
        LaguerreBasis.evaluate(2.0, &mut out);
        let w = (-1.0_f64).exp();
        assert_abs_diff_eq!(out[1], w, epsilon = 1e-15);
        assert_abs_diff_eq!(out[2], -w, epsilon = 1e-15);
        assert_abs_diff_eq!(out[3], -w, epsilon = 1e-15);
    }

    #[test]
    fn kind_delegates_to_concrete_basis() {
        let kind = RegressionBasisKind::Power { degree: 3 };
        assert_eq!(kind.size(), 4);
        assert_eq!(RegressionBasisKind::default().size(), 4);
        assert_eq!(RegressionBasisKind::default().name(), "laguerre");
    }

    #[test]
    fn recovers_exact_quadratic() {
        let x: Vec<Real> = (0..10).map(|i| 0.5 + 0.1 * i as Real).collect();
        let y: Vec<Real> = x.iter().map(|&v| 0.3 - 0.2 * v + 0.05 * v * v).collect();
        let basis = PowerBasis::default();
        let fit = RegressionEngine::new(&basis).fit(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.coefficients[0], 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.coefficients[1], -0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.coefficients[2], 0.05, epsilon = 1e-9);
        for (f, t) in fit.fitted_values.iter().zip(&y) {
            assert_abs_diff_eq!(*f, *t, epsilon = 1e-10);
        }
    }

    #[test]
    fn empty_subset_is_an_error() {
        let basis = LaguerreBasis;
        assert!(RegressionEngine::new(&basis).fit(&[], &[]).is_err());
    }
}
