//! Lattice methods for option pricing.
//!
//! * [`LatticeStore`]: flat, bounds-checked triangular node storage
//! * [`BinomialLatticeEngine`]: forward price lattice and backward
//!   risk-neutral induction for European payoffs

pub mod binomial_engine;
pub mod lattice_store;

pub use binomial_engine::{BinomialLatticeEngine, BinomialLattices, BinomialParameters};
pub use lattice_store::LatticeStore;
