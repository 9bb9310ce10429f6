//! Sample statistics for Monte Carlo estimators.

use pr_core::Real;
use statrs::statistics::Statistics;

/// Summary of a sample of per-path estimator values.
///
/// The mean is the plain sum divided by the sample size; the standard
/// deviation is Bessel-corrected (`n − 1` denominator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    samples: usize,
    mean: Real,
    std_dev: Real,
}

impl SampleStatistics {
    /// Summarise `values`.
    ///
    /// With no samples the mean is NaN; with fewer than two the standard
    /// deviation (and hence the error estimate) is NaN.
    pub fn from_samples(values: &[Real]) -> Self {
        let samples = values.len();
        let mean = values.iter().sum::<Real>() / samples as Real;
        let std_dev = if samples < 2 {
            Real::NAN
        } else {
            values.std_dev()
        };
        Self {
            samples,
            mean,
            std_dev,
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sample mean.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> Real {
        self.std_dev
    }

    /// Standard error of the mean: `std_dev / √n`.
    pub fn error_estimate(&self) -> Real {
        self.std_dev / (self.samples as Real).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basic_statistics() {
        let s = SampleStatistics::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.samples(), 5);
        assert_abs_diff_eq!(s.mean(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.std_dev(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.error_estimate(), 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn constant_sample_has_zero_error() {
        let s = SampleStatistics::from_samples(&[0.25; 8]);
        assert_abs_diff_eq!(s.mean(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(s.error_estimate(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn degenerate_samples() {
        assert!(SampleStatistics::from_samples(&[]).mean().is_nan());
        let one = SampleStatistics::from_samples(&[2.0]);
        assert_eq!(one.mean(), 2.0);
        assert!(one.error_estimate().is_nan());
    }
}
