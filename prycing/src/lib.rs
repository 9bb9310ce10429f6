//! # prycing
//!
//! Option pricing with a binomial lattice for European payoffs and the
//! Longstaff-Schwartz least-squares Monte Carlo method for American
//! payoffs.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `pr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! prycing = "0.1"
//! ```
//!
//! ```rust
//! use prycing::instruments::{OptionContract, Payoff};
//! use prycing::methods::BinomialLatticeEngine;
//!
//! let contract = OptionContract::new(36.0, 40.0, Payoff::Put)
//!     .with_rates(0.06, 0.0)
//!     .with_volatility(0.2)
//!     .with_horizon(1.0, 500);
//! let value = BinomialLatticeEngine::new(contract)
//!     .calculate()?
//!     .fair_value()?;
//! assert!((value - 3.844).abs() < 0.005);
//! # Ok::<(), prycing::core::Error>(())
//! ```
//!
//! American put by Longstaff-Schwartz on simulated paths:
//!
//! ```rust
//! use prycing::instruments::Payoff;
//! use prycing::math::seeded_rng;
//! use prycing::methods::{simulate_gbm, LsmPricer, LsmSettings};
//!
//! let paths = simulate_gbm(36.0, 0.06, 0.2, 2_000, 50, 1.0, &mut seeded_rng(42))?;
//! let result = LsmPricer::from_settings(Payoff::Put, 40.0, 0.06, 1.0, &LsmSettings::default())
//!     .price(&paths)?;
//! assert!(result.value() > 3.5);
//! # Ok::<(), prycing::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pr_core as core;

/// Mathematical utilities: linear algebra, regression, RNG, statistics.
pub use pr_math as math;

/// Payoffs and option contracts.
pub use pr_instruments as instruments;

/// Numerical methods (binomial lattice, Longstaff-Schwartz Monte Carlo).
pub use pr_methods as methods;

/// Closed-form engine and LSM reports.
pub use pr_pricingengines as pricingengines;
