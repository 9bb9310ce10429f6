//! Binomial lattice engine for European payoffs.
//!
//! Cox-Ross-Rubinstein style recombining tree: `u = exp(σ√Δt)`, `d = 1/u`
//! and risk-neutral up-probability `q_u = (e^{(r−q)Δt} − d)/(u − d)`.
//!
//! The terminal payoff is applied on level `steps − 1`, one level short of
//! the store height, and `Δt = horizon / steps`. Both are long-standing
//! conventions of this engine and the published reference values depend on
//! them.

use crate::lattice::LatticeStore;
use pr_core::{errors::Result, require_arg, DiscountFactor, Integer, Real, Size, Time};
use pr_instruments::OptionContract;
use tracing::debug;

/// Per-step parameters of the binomial tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialParameters {
    /// Time increment per step.
    pub dt: Time,
    /// Up factor `u`.
    pub up: Real,
    /// Down factor `d = 1/u`.
    pub down: Real,
    /// Per-step compounding factor `R = exp(r·Δt)`.
    pub growth: Real,
    /// Risk-neutral probability of an up move.
    pub p_up: Real,
    /// Risk-neutral probability of a down move.
    pub p_down: Real,
}

impl BinomialParameters {
    /// Derive the tree parameters from the contract's market data.
    ///
    /// Fails with `InvalidArgument` for a zero step count, a non-positive
    /// horizon or a non-positive volatility (the latter collapses `u − d`
    /// to zero).
    pub fn from_contract(contract: &OptionContract) -> Result<Self> {
        require_arg!(contract.steps >= 1, "binomial tree needs at least one step");
        require_arg!(
            contract.horizon > 0.0,
            "horizon must be positive, got {}",
            contract.horizon
        );
        require_arg!(
            contract.volatility > 0.0,
            "volatility must be positive, got {}",
            contract.volatility
        );

        let dt = contract.horizon / contract.steps as Real;
        let up = (contract.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (contract.discount_rate * dt).exp();
        let p_up =
            (((contract.discount_rate - contract.dividend_yield) * dt).exp() - down) / (up - down);

        Ok(Self {
            dt,
            up,
            down,
            growth,
            p_up,
            p_down: 1.0 - p_up,
        })
    }

    /// One-step discount factor `1/R`.
    pub fn discount(&self) -> DiscountFactor {
        1.0 / self.growth
    }
}

/// The populated price and value lattices of one pricing run.
#[derive(Debug, Clone)]
pub struct BinomialLattices {
    /// Simulated underlying prices; node `(0, 0)` is the spot.
    pub prices: LatticeStore,
    /// Option values, filled from the terminal level backwards.
    pub values: LatticeStore,
    /// Parameters the lattices were built with.
    pub parameters: BinomialParameters,
}

impl BinomialLattices {
    /// The fair value, i.e. the root of the value lattice.
    pub fn fair_value(&self) -> Result<Real> {
        self.values.get(0, 0)
    }
}

/// Prices a European payoff by backward risk-neutral induction.
///
/// There is no early-exercise comparison at interior nodes.
#[derive(Debug, Clone)]
pub struct BinomialLatticeEngine {
    contract: OptionContract,
}

impl BinomialLatticeEngine {
    /// Create an engine for `contract`.
    pub fn new(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// The contract being priced.
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Build both lattices and return them for inspection.
    pub fn calculate(&self) -> Result<BinomialLattices> {
        let params = BinomialParameters::from_contract(&self.contract)?;
        let steps = self.contract.steps;
        debug!(
            up = params.up,
            down = params.down,
            p_up = params.p_up,
            p_down = params.p_down,
            growth = params.growth,
            "binomial parameters"
        );

        let height = Integer::try_from(steps).map_err(|_| {
            pr_core::Error::InvalidArgument(format!("too many steps for a lattice: {steps}"))
        })?;
        let prices = self.forward_prices(&params, height)?;
        let values = self.backward_values(&params, &prices, height)?;

        Ok(BinomialLattices {
            prices,
            values,
            parameters: params,
        })
    }

    fn forward_prices(&self, params: &BinomialParameters, height: Integer) -> Result<LatticeStore> {
        let steps = self.contract.steps;
        let mut prices = LatticeStore::new(height)?;
        prices.set(0, 0, self.contract.spot)?;
        for i in 1..steps {
            // all-up path, then each further node is one more down move
            prices.set(i, 0, prices.get(i - 1, 0)? * params.up)?;
            for j in 1..=i {
                prices.set(i, j, prices.get(i - 1, j - 1)? * params.down)?;
            }
        }
        Ok(prices)
    }

    fn backward_values(
        &self,
        params: &BinomialParameters,
        prices: &LatticeStore,
        height: Integer,
    ) -> Result<LatticeStore> {
        let steps = self.contract.steps;
        let terminal: Size = steps - 1;
        let mut values = LatticeStore::new(height)?;
        for j in 0..=terminal {
            values.set(terminal, j, self.contract.payoff_at(prices.get(terminal, j)?))?;
        }

        let discount = params.discount();
        for i in (0..terminal).rev() {
            for j in 1..=i + 1 {
                let v = discount
                    * (params.p_up * values.get(i + 1, j - 1)?
                        + params.p_down * values.get(i + 1, j)?);
                values.set(i, j - 1, v)?;
            }
        }
        Ok(values)
    }
}
