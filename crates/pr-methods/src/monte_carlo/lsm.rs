//! Longstaff-Schwartz least-squares Monte Carlo for early-exercise payoffs.
//!
//! The sweep walks the path matrix backwards from the last time row to
//! row 1; the valuation date itself is never an exercise date. At each
//! row the continuation value of the in-the-money paths is estimated by
//! regressing the realised future cash flow on the current price, both
//! scaled by the strike. A path exercises when the fitted continuation
//! value is below its intrinsic value.
//!
//! The regression target is the undiscounted running sum of the future
//! cash flows, not the one-step discounted continuation value. Reference
//! values produced by this pricer depend on that convention.

use crate::monte_carlo::{
    CashFlowMatrix, NpvEstimate, PathMatrix, RegressionBasis, RegressionBasisKind,
    RegressionEngine, RegressionFit,
};
use pr_core::{errors::Result, require_arg, Rate, Real, Size, Time};
use pr_instruments::Payoff;
use tracing::{debug, trace};

/// Configuration of the LSM pricer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LsmSettings {
    /// Regression basis for the continuation value; Laguerre by default.
    pub basis: RegressionBasisKind,
}

/// What happened at one backward step.
#[derive(Debug, Clone)]
pub struct StepDiagnostics {
    /// Time row of the path matrix.
    pub row: Size,
    /// The continuation fit, absent when no path was in the money.
    pub fit: Option<RegressionFit>,
    /// Number of in-the-money paths.
    pub in_the_money: Size,
    /// Number of paths exercising at this row.
    pub exercised: Size,
    /// `(path, cash flow)` of every exercise decided at this row, in path
    /// order. Earlier rows may still override these.
    pub exercises: Vec<(Size, Real)>,
}

/// Output of an LSM run.
#[derive(Debug, Clone)]
pub struct LsmResult {
    /// Discounted price estimate.
    pub estimate: NpvEstimate,
    /// Final cash flows, earliest row first.
    pub cash_flows: CashFlowMatrix,
    /// Per-row diagnostics, in sweep order (latest row first).
    pub steps: Vec<StepDiagnostics>,
}

impl LsmResult {
    /// The price estimate.
    pub fn value(&self) -> Real {
        self.estimate.value
    }

    /// Standard error of the price estimate.
    pub fn standard_error(&self) -> Real {
        self.estimate.standard_error
    }
}

/// Prices an early-exercise payoff over a given set of simulated paths.
#[derive(Debug, Clone)]
pub struct LsmPricer<B = RegressionBasisKind> {
    payoff: Payoff,
    strike: Real,
    discount_rate: Rate,
    horizon: Time,
    basis: B,
}

impl LsmPricer<RegressionBasisKind> {
    /// Create a pricer using the basis chosen in `settings`.
    pub fn from_settings(
        payoff: Payoff,
        strike: Real,
        discount_rate: Rate,
        horizon: Time,
        settings: &LsmSettings,
    ) -> Self {
        Self::new(payoff, strike, discount_rate, horizon, settings.basis)
    }
}

impl<B: RegressionBasis> LsmPricer<B> {
    /// Create a pricer.
    pub fn new(payoff: Payoff, strike: Real, discount_rate: Rate, horizon: Time, basis: B) -> Self {
        Self {
            payoff,
            strike,
            discount_rate,
            horizon,
            basis,
        }
    }

    /// Run the backward sweep over `paths` and discount the resulting cash
    /// flows with `dt = horizon / rows`, `rows` counting the valuation date.
    ///
    /// Fails with `InvalidArgument` if the matrix has fewer than two time
    /// rows or if the strike or horizon is not positive.
    pub fn price(&self, paths: &PathMatrix) -> Result<LsmResult> {
        let rows = paths.rows();
        require_arg!(rows >= 2, "path matrix needs at least one time step, got {rows} rows");
        require_arg!(self.strike > 0.0, "strike must be positive, got {}", self.strike);
        require_arg!(self.horizon > 0.0, "horizon must be positive, got {}", self.horizon);

        let strike = self.strike;
        let last = rows - 1;
        let mut cash_flows =
            CashFlowMatrix::new(last, self.payoff.intrinsic_row(paths.row(last), strike));
        let mut realized = cash_flows.realized();
        let engine = RegressionEngine::new(&self.basis);
        let mut steps = Vec::with_capacity(last.saturating_sub(1));

        for row in (1..last).rev() {
            let prices = paths.row(row);
            let intrinsic = self.payoff.intrinsic_row(prices, strike);
            let in_the_money: Vec<Size> = (0..intrinsic.len())
                .filter(|&p| intrinsic[p] > 0.0)
                .collect();

            let mut early = vec![0.0; paths.paths()];
            let fit = if in_the_money.is_empty() {
                None
            } else {
                let x: Vec<Real> = in_the_money.iter().map(|&p| prices[p] / strike).collect();
                let y: Vec<Real> = in_the_money.iter().map(|&p| realized[p] / strike).collect();
                let fit = engine.fit(&x, &y)?;
                for (&p, &continuation) in in_the_money.iter().zip(&fit.fitted_values) {
                    if continuation * strike < intrinsic[p] {
                        early[p] = intrinsic[p];
                    }
                }
                Some(fit)
            };

            let exercises: Vec<(Size, Real)> = early
                .iter()
                .copied()
                .enumerate()
                .filter(|&(_, cf)| cf != 0.0)
                .collect();
            let exercised = exercises.len();
            trace!(row, in_the_money = in_the_money.len(), exercised, "lsm step");
            realized = cash_flows.record_exercise_date(row, early)?;
            steps.push(StepDiagnostics {
                row,
                fit,
                in_the_money: in_the_money.len(),
                exercised,
                exercises,
            });
        }

        let dt = self.horizon / rows as Real;
        let estimate = NpvEstimate::discount(&cash_flows, self.discount_rate, dt);
        debug!(
            value = estimate.value,
            standard_error = estimate.standard_error,
            basis = self.basis.name(),
            "lsm estimate"
        );
        Ok(LsmResult {
            estimate,
            cash_flows,
            steps,
        })
    }
}
