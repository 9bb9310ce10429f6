//! # pr-pricingengines
//!
//! Pricing engines built on top of `pr-methods`.
//!
//! ## Engines
//!
//! - [`BsmOption`]: Black-Scholes-Merton closed form, delta, vega and
//!   implied volatility
//! - [`AnalyticEuropeanEngine`]: the closed form applied to an
//!   [`OptionContract`](pr_instruments::OptionContract)
//! - [`simulate_and_price`] / [`price_table`]: simulated European versus
//!   Longstaff-Schwartz American puts on shared paths

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod lsm_report;

pub use analytic_european_engine::{implied_volatility, AnalyticEuropeanEngine, BsmOption};
pub use lsm_report::{price_table, simulate_and_price, PriceComparison, TableRow, TableSettings};
