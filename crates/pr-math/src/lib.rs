//! # pr-math
//!
//! Mathematical utilities: array/matrix newtypes over nalgebra, SVD-based
//! linear least squares, the normal distribution (via statrs), a Brent
//! root finder, sample statistics and seeded random number generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional array of reals.
pub mod array;

/// Probability distributions.
pub mod distributions;

/// General linear least-squares regression.
pub mod linear_least_squares;

/// Two-dimensional matrix of reals.
pub mod matrix;

/// Matrix decompositions.
pub mod matrix_utilities;

/// Random number generators.
pub mod random_numbers;

/// 1D root-finding solvers.
pub mod solvers1d;

/// Sample statistics.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use distributions::{normal_cdf, normal_pdf};
pub use linear_least_squares::LinearLeastSquaresRegression;
pub use matrix::Matrix;
pub use random_numbers::{antithetic_normals, seeded_rng, MersenneTwister};
pub use solvers1d::brent;
pub use statistics::SampleStatistics;
