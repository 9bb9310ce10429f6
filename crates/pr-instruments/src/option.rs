//! The option contract priced by the lattice engine.

use crate::payoff::Payoff;
use pr_core::{Price, Rate, Real, Size, Time, Volatility};

/// An immutable option contract together with the market parameters the
/// binomial engine needs.
///
/// `horizon` is a generic time horizon in years; the lattice step is
/// `horizon / steps`.
#[derive(Debug, Clone, Copy)]
pub struct OptionContract {
    /// Spot price of the underlying.
    pub spot: Price,
    /// Strike price.
    pub strike: Price,
    /// Payoff evaluated on the terminal layer.
    pub payoff: Payoff,
    /// Continuously compounded discount rate.
    pub discount_rate: Rate,
    /// Continuous dividend yield (cost of carry is `r − q`).
    pub dividend_yield: Rate,
    /// Volatility of the underlying.
    pub volatility: Volatility,
    /// Time horizon in years.
    pub horizon: Time,
    /// Number of lattice steps.
    pub steps: Size,
}

impl OptionContract {
    /// A contract with zero rates and volatility over a one-year, one-step
    /// horizon. Use the `with_*` methods to fill in the market.
    pub fn new(spot: Price, strike: Price, payoff: Payoff) -> Self {
        Self {
            spot,
            strike,
            payoff,
            discount_rate: 0.0,
            dividend_yield: 0.0,
            volatility: 0.0,
            horizon: 1.0,
            steps: 1,
        }
    }

    /// Set the discount rate and dividend yield.
    pub fn with_rates(self, discount_rate: Rate, dividend_yield: Rate) -> Self {
        Self {
            discount_rate,
            dividend_yield,
            ..self
        }
    }

    /// Set the volatility.
    pub fn with_volatility(self, volatility: Volatility) -> Self {
        Self { volatility, ..self }
    }

    /// Set the horizon and the number of lattice steps.
    pub fn with_horizon(self, horizon: Time, steps: Size) -> Self {
        Self {
            horizon,
            steps,
            ..self
        }
    }

    /// Payoff at underlying price `price`.
    pub fn payoff_at(&self, price: Real) -> Real {
        self.payoff.evaluate(price, self.strike)
    }
}
