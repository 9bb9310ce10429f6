//! Random number generation.
//!
//! Simulation code never touches a process-wide generator: every call that
//! needs randomness takes an explicit `&mut R where R: Rng`. The default
//! seeded source is the 64-bit Mersenne Twister from `rand_mt`.

use pr_core::{errors::Result, require_arg, Real};
use rand::Rng;
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// The default seeded generator (MT19937-64).
pub type MersenneTwister = Mt19937GenRand64;

/// Create a Mersenne Twister seeded with `seed`.
pub fn seeded_rng(seed: u64) -> MersenneTwister {
    Mt19937GenRand64::new(seed)
}

/// Draw `n` independent standard-normal deviates.
pub fn standard_normals<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Real> {
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

/// Draw `n` standard-normal deviates as antithetic pairs.
///
/// The first `n / 2` values are fresh draws, the second half are their
/// negations in the same order. `n` must be even.
pub fn antithetic_normals<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<Real>> {
    require_arg!(n % 2 == 0, "antithetic sampling needs an even count, got {n}");
    let mut normals = standard_normals(rng, n / 2);
    normals.extend_from_within(..);
    for z in &mut normals[n / 2..] {
        *z = -*z;
    }
    Ok(normals)
}
