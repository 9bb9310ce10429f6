//! Geometric Brownian motion path simulation with antithetic variates.

use pr_core::{
    errors::{Error, Result},
    require_arg, Rate, Real, Size, Time, Volatility,
};
use pr_math::antithetic_normals;
use rand::Rng;

/// Simulated prices laid out as `steps + 1` time rows by `paths` columns.
///
/// Row 0 is the valuation date.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    paths: Size,
    values: Vec<Real>,
}

impl PathMatrix {
    /// Build a matrix from time rows, each holding one price per path.
    ///
    /// Fails if there are no rows or the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Real>>) -> Result<Self> {
        let paths = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| Error::InvalidArgument("path matrix needs at least one row".into()))?;
        if let Some(bad) = rows.iter().position(|r| r.len() != paths) {
            return Err(Error::InvalidArgument(format!(
                "row {bad} has {} prices, expected {paths}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            paths,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix from per-path price sequences (one inner `Vec` per path).
    pub fn from_paths(paths: &[Vec<Real>]) -> Result<Self> {
        let len = paths.first().map_or(0, Vec::len);
        require_arg!(
            paths.iter().all(|p| p.len() == len),
            "all paths must have the same number of observations"
        );
        let rows = (0..len)
            .map(|t| paths.iter().map(|p| p[t]).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Number of simulated paths (columns).
    pub fn paths(&self) -> Size {
        self.paths
    }

    /// Number of time rows, i.e. `steps + 1`.
    pub fn rows(&self) -> Size {
        if self.paths == 0 {
            0
        } else {
            self.values.len() / self.paths
        }
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.rows().saturating_sub(1)
    }

    /// Prices of every path at time row `t`.
    ///
    /// # Panics
    /// Panics if `t >= self.rows()`.
    pub fn row(&self, t: Size) -> &[Real] {
        &self.values[t * self.paths..(t + 1) * self.paths]
    }

    /// Prices at the last time row.
    pub fn terminal(&self) -> &[Real] {
        self.row(self.rows() - 1)
    }

    /// The price sequence of a single path.
    pub fn path(&self, p: Size) -> Vec<Real> {
        (0..self.rows()).map(|t| self.row(t)[p]).collect()
    }
}

/// Geometric Brownian motion `dS = μ S dt + σ S dW`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricBrownianMotion {
    /// Initial value `S₀`.
    pub start_value: Real,
    /// Drift `μ`.
    pub drift: Rate,
    /// Volatility `σ`.
    pub volatility: Volatility,
}

impl GeometricBrownianMotion {
    /// Create a process.
    pub fn new(start_value: Real, drift: Rate, volatility: Volatility) -> Self {
        Self {
            start_value,
            drift,
            volatility,
        }
    }

    /// Simulate `paths` paths of `steps` exact log-normal steps over `horizon`.
    ///
    /// At every step the first half of the paths receive fresh normal draws
    /// and the second half their negations, so path `p` and path
    /// `p + paths/2` are antithetic twins.
    ///
    /// Fails with `InvalidArgument` if `horizon <= 0` or `paths` is odd.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        paths: Size,
        steps: Size,
        horizon: Time,
        rng: &mut R,
    ) -> Result<PathMatrix> {
        require_arg!(horizon > 0.0, "horizon must be positive, got {horizon}");
        require_arg!(paths % 2 == 0, "number of paths must be even, got {paths}");

        let dt = horizon / steps as Real;
        let diffusion = self.volatility * dt.sqrt();
        let drift = (self.drift - 0.5 * self.volatility * self.volatility) * dt;

        let mut values = Vec::with_capacity(paths * (steps + 1));
        values.resize(paths, self.start_value);
        for t in 1..=steps {
            let normals = antithetic_normals(rng, paths)?;
            let previous = (t - 1) * paths;
            for (p, z) in normals.into_iter().enumerate() {
                let s = values[previous + p] * (drift + diffusion * z).exp();
                values.push(s);
            }
        }
        Ok(PathMatrix { paths, values })
    }
}

/// Simulate GBM paths; see [`GeometricBrownianMotion::simulate`].
pub fn simulate_gbm<R: Rng + ?Sized>(
    start_value: Real,
    drift: Rate,
    volatility: Volatility,
    paths: Size,
    steps: Size,
    horizon: Time,
    rng: &mut R,
) -> Result<PathMatrix> {
    GeometricBrownianMotion::new(start_value, drift, volatility).simulate(paths, steps, horizon, rng)
}
