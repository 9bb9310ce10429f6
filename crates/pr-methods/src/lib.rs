//! # pr-methods
//!
//! Numerical methods: the triangular lattice store, the binomial
//! European engine, and the Longstaff-Schwartz least-squares Monte Carlo
//! framework (path simulation, regression, backward sweep, NPV).
//!
//! # Modules
//!
//! * [`lattice`]: flat triangular storage and binomial backward induction
//! * [`monte_carlo`]: GBM paths, continuation regression, LSM sweep, NPV

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: triangular storage, binomial backward induction.
pub mod lattice;

/// Monte Carlo simulation: path generation, LSM pricing, NPV.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{BinomialLatticeEngine, BinomialLattices, BinomialParameters, LatticeStore};
pub use monte_carlo::{
    simulate_gbm, simulated_european, CashFlowMatrix, GeometricBrownianMotion, LaguerreBasis,
    LsmPricer, LsmResult, LsmSettings, NpvEstimate, PathMatrix, PowerBasis, RegressionBasis,
    RegressionBasisKind, RegressionEngine, RegressionFit,
};
