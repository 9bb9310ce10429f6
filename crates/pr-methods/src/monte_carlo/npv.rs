//! Net present value of simulated cash flows.

use crate::monte_carlo::{CashFlowMatrix, PathMatrix};
use pr_core::{require_arg, errors::Result, Rate, Real, Time};
use pr_instruments::Payoff;
use pr_math::SampleStatistics;

/// A Monte Carlo price estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpvEstimate {
    /// Mean of the per-path discounted totals.
    pub value: Real,
    /// Sample standard deviation over `√paths`.
    pub standard_error: Real,
}

impl NpvEstimate {
    /// Discount every stored vector of `cash_flows` back to the valuation date.
    ///
    /// Vector `k` (earliest first) is discounted by `exp(−rate·dt)^(k+1)`,
    /// i.e. it is taken to pay at time `(k + 1)·dt`.
    pub fn discount(cash_flows: &CashFlowMatrix, rate: Rate, dt: Time) -> Self {
        let step = (-rate * dt).exp();
        let mut totals = vec![0.0; cash_flows.paths()];
        let mut factor = 1.0;
        for flows in cash_flows.iter() {
            factor *= step;
            for (t, &cf) in totals.iter_mut().zip(flows) {
                *t += cf * factor;
            }
        }
        Self::from_samples(&totals)
    }

    /// Mean and standard error of per-path values.
    pub fn from_samples(values: &[Real]) -> Self {
        let stats = SampleStatistics::from_samples(values);
        Self {
            value: stats.mean(),
            standard_error: stats.error_estimate(),
        }
    }
}

/// European estimate from the same paths: the mean of `payoff(S_T)·e^{−rT}`.
pub fn simulated_european(
    paths: &PathMatrix,
    payoff: Payoff,
    strike: Real,
    rate: Rate,
    horizon: Time,
) -> Result<NpvEstimate> {
    require_arg!(paths.rows() >= 2, "path matrix needs at least one time step");
    let discount = (-rate * horizon).exp();
    let values: Vec<Real> = paths
        .terminal()
        .iter()
        .map(|&s| payoff.evaluate(s, strike) * discount)
        .collect();
    Ok(NpvEstimate::from_samples(&values))
}
