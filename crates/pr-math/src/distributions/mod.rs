//! Probability distributions.
//!
//! The standard normal is the only distribution the pricing code needs;
//! it delegates to `statrs`.

pub mod normal;

pub use normal::{normal_cdf, normal_pdf};
