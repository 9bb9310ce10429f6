//! Simulated European versus Longstaff-Schwartz American put prices.
//!
//! [`price_table`] reproduces the layout of Table 1 in Longstaff and
//! Schwartz (2001): closed-form European, simulated European and LSM
//! American put values over a grid of spots, volatilities and maturities.

use crate::analytic_european_engine::BsmOption;
use pr_core::{errors::Result, Price, Rate, Real, Size, Time, Volatility};
use pr_instruments::Payoff;
use pr_math::seeded_rng;
use pr_methods::{simulate_gbm, simulated_european, LsmPricer, LsmSettings, NpvEstimate};
use rand::Rng;
use tracing::{debug, info};

/// Simulated European and LSM American put prices on shared paths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceComparison {
    /// Mean discounted terminal put payoff.
    pub simulated_european: Price,
    /// Standard error of `simulated_european`.
    pub simulated_european_se: Real,
    /// LSM American put estimate.
    pub lsm_american: Price,
    /// Standard error of `lsm_american`.
    pub lsm_american_se: Real,
}

/// Simulate `paths` GBM paths under the risk-neutral drift and price a
/// European and an American put on them.
///
/// The LSM regression uses the Laguerre basis.
#[allow(clippy::too_many_arguments)]
pub fn simulate_and_price<R: Rng + ?Sized>(
    paths: Size,
    steps: Size,
    strike: Price,
    discount_rate: Rate,
    spot: Price,
    sigma: Volatility,
    horizon: Time,
    rng: &mut R,
) -> Result<PriceComparison> {
    let settings = LsmSettings::default();
    price_on_paths(paths, steps, strike, discount_rate, spot, sigma, horizon, &settings, rng)
}

#[allow(clippy::too_many_arguments)]
fn price_on_paths<R: Rng + ?Sized>(
    paths: Size,
    steps: Size,
    strike: Price,
    discount_rate: Rate,
    spot: Price,
    sigma: Volatility,
    horizon: Time,
    settings: &LsmSettings,
    rng: &mut R,
) -> Result<PriceComparison> {
    let matrix = simulate_gbm(spot, discount_rate, sigma, paths, steps, horizon, rng)?;
    let european = simulated_european(&matrix, Payoff::Put, strike, discount_rate, horizon)?;
    let american = LsmPricer::from_settings(Payoff::Put, strike, discount_rate, horizon, settings)
        .price(&matrix)?
        .estimate;
    Ok(PriceComparison {
        simulated_european: european.value,
        simulated_european_se: european.standard_error,
        lsm_american: american.value,
        lsm_american_se: american.standard_error,
    })
}

/// Grid and simulation settings for [`price_table`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSettings {
    /// Paths per grid point; must be even.
    pub paths: Size,
    /// Time steps per path, independent of maturity.
    pub steps: Size,
    /// Put strike.
    pub strike: Price,
    /// Risk-free rate, also the simulation drift.
    pub discount_rate: Rate,
    /// Seed of the single generator shared by the whole table.
    pub seed: u64,
    /// Spot prices.
    pub spots: Vec<Price>,
    /// Volatilities.
    pub vols: Vec<Volatility>,
    /// Maturities in years.
    pub maturities: Vec<Time>,
    /// LSM configuration.
    pub lsm: LsmSettings,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            paths: 100_000,
            steps: 50,
            strike: 40.0,
            discount_rate: 0.06,
            seed: 42,
            spots: vec![36.0, 38.0, 40.0, 42.0, 44.0],
            vols: vec![0.2, 0.4],
            maturities: vec![1.0, 2.0],
            lsm: LsmSettings::default(),
        }
    }
}

/// One grid point of the table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    /// `"{spot} {sigma} {maturity}"`, e.g. `"36 0.2 1"`.
    pub key: String,
    /// Spot price.
    pub spot: Price,
    /// Volatility.
    pub sigma: Volatility,
    /// Maturity.
    pub maturity: Time,
    /// Closed-form European put.
    pub european: Price,
    /// Simulated European put.
    pub simulated_european: NpvEstimate,
    /// LSM American put.
    pub lsm_american: NpvEstimate,
}

impl TableRow {
    /// Early-exercise premium over the closed-form European value.
    pub fn early_exercise_value(&self) -> Real {
        self.lsm_american.value - self.european
    }
}

/// Price every `(spot, sigma, maturity)` combination, in that nesting order.
///
/// A single generator seeded with `settings.seed` feeds all grid points,
/// so the table is reproducible as a whole.
pub fn price_table(settings: &TableSettings) -> Result<Vec<TableRow>> {
    let mut rng = seeded_rng(settings.seed);
    let mut rows =
        Vec::with_capacity(settings.spots.len() * settings.vols.len() * settings.maturities.len());

    for &spot in &settings.spots {
        for &sigma in &settings.vols {
            for &maturity in &settings.maturities {
                let (_, european) = BsmOption::new(
                    spot,
                    settings.strike,
                    maturity,
                    sigma,
                    settings.discount_rate,
                    0.0,
                )
                .fair_value();
                let cmp = price_on_paths(
                    settings.paths,
                    settings.steps,
                    settings.strike,
                    settings.discount_rate,
                    spot,
                    sigma,
                    maturity,
                    &settings.lsm,
                    &mut rng,
                )?;
                let key = format!("{spot} {sigma} {maturity}");
                debug!(
                    key = %key,
                    european,
                    simulated = cmp.simulated_european,
                    american = cmp.lsm_american,
                    "table row"
                );
                rows.push(TableRow {
                    key,
                    spot,
                    sigma,
                    maturity,
                    european,
                    simulated_european: NpvEstimate {
                        value: cmp.simulated_european,
                        standard_error: cmp.simulated_european_se,
                    },
                    lsm_american: NpvEstimate {
                        value: cmp.lsm_american,
                        standard_error: cmp.lsm_american_se,
                    },
                });
            }
        }
    }

    info!(rows = rows.len(), paths = settings.paths, "price table complete");
    Ok(rows)
}
