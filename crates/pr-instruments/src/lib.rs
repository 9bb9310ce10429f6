//! # pr-instruments
//!
//! Option payoffs and the immutable option contract consumed by the
//! lattice and Monte Carlo engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Option contract: spot, strike, payoff and market parameters.
pub mod option;

/// Option type and payoff capability.
pub mod payoff;

pub use option::OptionContract;
pub use payoff::{OptionType, Payoff};
