//! Option payoffs.
//!
//! A payoff is a small tagged variant with a uniform
//! `evaluate(price, strike) → payoff` contract, so the same value can drive
//! a lattice terminal layer and a row of simulated prices.

use pr_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Payoff of an option as a function of the underlying price and strike.
#[derive(Debug, Clone, Copy)]
pub enum Payoff {
    /// `max(S − K, 0)`.
    Call,
    /// `max(K − S, 0)`.
    Put,
    /// Any other payoff `f(S, K)`.
    Custom(fn(Real, Real) -> Real),
}

impl Payoff {
    /// Evaluate the payoff at underlying price `price`.
    pub fn evaluate(&self, price: Real, strike: Real) -> Real {
        match self {
            Payoff::Call => (price - strike).max(0.0),
            Payoff::Put => (strike - price).max(0.0),
            Payoff::Custom(f) => f(price, strike),
        }
    }

    /// Evaluate the payoff for each price of a row.
    pub fn intrinsic_row(&self, prices: &[Real], strike: Real) -> Vec<Real> {
        prices.iter().map(|&s| self.evaluate(s, strike)).collect()
    }

    /// The vanilla option type, if any.
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            Payoff::Call => Some(OptionType::Call),
            Payoff::Put => Some(OptionType::Put),
            Payoff::Custom(_) => None,
        }
    }
}

impl From<OptionType> for Payoff {
    fn from(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Call => Payoff::Call,
            OptionType::Put => Payoff::Put,
        }
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payoff::Call => write!(f, "Call"),
            Payoff::Put => write!(f, "Put"),
            Payoff::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_payoffs() {
        assert_eq!(Payoff::Call.evaluate(45.0, 40.0), 5.0);
        assert_eq!(Payoff::Call.evaluate(35.0, 40.0), 0.0);
        assert_eq!(Payoff::Put.evaluate(35.0, 40.0), 5.0);
        assert_eq!(Payoff::Put.evaluate(45.0, 40.0), 0.0);
    }

    #[test]
    fn custom_payoff() {
        fn digital(s: Real, k: Real) -> Real {
            if s > k {
                1.0
            } else {
                0.0
            }
        }
        let p = Payoff::Custom(digital);
        assert_eq!(p.evaluate(41.0, 40.0), 1.0);
        assert_eq!(p.evaluate(39.0, 40.0), 0.0);
        assert_eq!(p.option_type(), None);
        assert_eq!(p.to_string(), "Custom");
    }

    #[test]
    fn intrinsic_row_is_elementwise() {
        let row = Payoff::Put.intrinsic_row(&[1.09, 1.16, 0.93], 1.10);
        assert!((row[0] - 0.01).abs() < 1e-12);
        assert_eq!(row[1], 0.0);
        assert!((row[2] - 0.17).abs() < 1e-12);
    }

    #[test]
    fn option_type_round_trip() {
        assert_eq!(Payoff::from(OptionType::Put).option_type(), Some(OptionType::Put));
        assert_eq!(Payoff::from(OptionType::Call).option_type(), Some(OptionType::Call));
        assert_eq!(OptionType::Put.to_string(), "Put");
    }
}
