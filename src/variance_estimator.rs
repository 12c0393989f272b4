//! Streaming measurement statistics for adaptive measurement noise.

use crate::matrix::Matrix4;
use crate::position_velocity::PositionVelocity;
use num_traits::float::FloatCore;

/// Running (population) statistics over a stream of position/velocity measurements.
///
/// Means, variances and the position/velocity covariance of each axis are accumulated
/// with Welford's online algorithm, one measurement at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceEstimator<T> {
    count: usize,
    /// Running means, in `x, y, vx, vy` order.
    mean: [T; 4],
    /// Sums of squared deviations from the running mean.
    m2: [T; 4],
    /// Co-moment of `x` and `vx`.
    c_x_vx: T,
    /// Co-moment of `y` and `vy`.
    c_y_vy: T,
}

impl<T> Default for VarianceEstimator<T>
where
    T: FloatCore,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VarianceEstimator<T>
where
    T: FloatCore,
{
    /// Initializes an empty estimator.
    pub fn new() -> Self {
        let zero = T::zero();
        Self {
            count: 0,
            mean: [zero; 4],
            m2: [zero; 4],
            c_x_vx: zero,
            c_y_vy: zero,
        }
    }

    /// Adds a measurement to the running statistics.
    pub fn update(&mut self, measurement: &PositionVelocity<T>) {
        self.count += 1;
        let n = T::from(self.count).unwrap_or_else(T::infinity);
        let values = [measurement.x, measurement.y, measurement.vx, measurement.vy];

        let mut delta_before = [T::zero(); 4];
        let mut delta_after = [T::zero(); 4];
        for i in 0..4 {
            delta_before[i] = values[i] - self.mean[i];
            self.mean[i] = self.mean[i] + delta_before[i] / n;
            delta_after[i] = values[i] - self.mean[i];
            self.m2[i] = self.m2[i] + delta_before[i] * delta_after[i];
        }

        self.c_x_vx = self.c_x_vx + delta_before[0] * delta_after[2];
        self.c_y_vy = self.c_y_vy + delta_before[1] * delta_after[3];
    }

    /// Clears all accumulated statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of measurements seen.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the running means of all fields.
    pub fn mean(&self) -> PositionVelocity<T> {
        PositionVelocity::new(self.mean[0], self.mean[1], self.mean[2], self.mean[3])
    }

    /// Returns the population variances of all fields; zero before the first measurement.
    pub fn variance(&self) -> PositionVelocity<T> {
        PositionVelocity::new(
            self.population(self.m2[0]),
            self.population(self.m2[1]),
            self.population(self.m2[2]),
            self.population(self.m2[3]),
        )
    }

    /// Returns the population covariance of `x` and `vx`.
    pub fn covariance_x_vx(&self) -> T {
        self.population(self.c_x_vx)
    }

    /// Returns the population covariance of `y` and `vy`.
    pub fn covariance_y_vy(&self) -> T {
        self.population(self.c_y_vy)
    }

    /// Builds a measurement noise covariance matrix from the running statistics.
    ///
    /// ## Arguments
    /// * `variance_trust` - Scale of the variance terms on the diagonal.
    /// * `covariance_trust` - Scale of the position/velocity cross terms.
    pub fn noise_covariance(&self, variance_trust: T, covariance_trust: T) -> Matrix4<T> {
        let variance = self.variance();
        let cov_x = self.covariance_x_vx() * covariance_trust;
        let cov_y = self.covariance_y_vy() * covariance_trust;

        let zero = T::zero();
        [
            [variance.x * variance_trust, zero, cov_x, zero],
            [zero, variance.y * variance_trust, zero, cov_y],
            [cov_x, zero, variance.vx * variance_trust, zero],
            [zero, cov_y, zero, variance.vy * variance_trust],
        ]
    }

    #[inline]
    fn population(&self, sum: T) -> T {
        match T::from(self.count) {
            Some(n) if self.count > 0 => sum / n,
            _ => T::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn samples() -> [PositionVelocity<f64>; 4] {
        [
            PositionVelocity::new(2.0, 2.0, 1.0, 2.0),
            PositionVelocity::new(3.0, 4.0, 1.0, 1.0),
            PositionVelocity::new(4.0, 4.0, 1.0, 1.0),
            PositionVelocity::new(5.0, 6.0, 1.0, 2.0),
        ]
    }

    #[test]
    fn test_empty_is_zero() {
        let estimator = VarianceEstimator::<f64>::new();
        assert_eq!(estimator.count(), 0);
        assert_eq!(estimator.variance(), PositionVelocity::default());
        assert_eq!(estimator.noise_covariance(0.9, 0.6), [[0.0; 4]; 4]);
    }

    #[test]
    fn test_population_statistics() {
        let mut estimator = VarianceEstimator::new();
        for sample in samples().iter() {
            estimator.update(sample);
        }

        assert_eq!(estimator.count(), 4);

        let mean = estimator.mean();
        assert!((mean.x - 3.5).abs() < TOLERANCE);
        assert!((mean.y - 4.0).abs() < TOLERANCE);
        assert!((mean.vy - 1.5).abs() < TOLERANCE);

        // Population variance, i.e. divided by n and not n - 1.
        let variance = estimator.variance();
        assert!((variance.x - 1.25).abs() < TOLERANCE);
        assert!((variance.y - 2.0).abs() < TOLERANCE);
        assert!(variance.vx.abs() < TOLERANCE);
        assert!((variance.vy - 0.25).abs() < TOLERANCE);

        // vx is constant, so it does not co-vary with x.
        assert!(estimator.covariance_x_vx().abs() < TOLERANCE);
        // y: 2, 4, 4, 6 against vy: 2, 1, 1, 2 → (-2·0.5 + 0 + 0 + 2·0.5) / 4 = 0
        assert!(estimator.covariance_y_vy().abs() < TOLERANCE);
    }

    #[test]
    fn test_covariance_of_correlated_axis() {
        let mut estimator = VarianceEstimator::new();
        for (x, vx) in [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)] {
            estimator.update(&PositionVelocity::new(x, 0.0, vx, 0.0));
        }

        // cov(x, 2x) = 2·var(x) = 2·(2/3)
        assert!((estimator.covariance_x_vx() - 4.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_noise_covariance_applies_trust() {
        let mut estimator = VarianceEstimator::new();
        for (x, vx) in [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)] {
            estimator.update(&PositionVelocity::new(x, 0.0, vx, 0.0));
        }

        let r = estimator.noise_covariance(0.9, 0.6);
        assert!((r[0][0] - 0.9 * 2.0 / 3.0).abs() < TOLERANCE);
        assert!((r[2][2] - 0.9 * 8.0 / 3.0).abs() < TOLERANCE);
        assert!((r[0][2] - 0.6 * 4.0 / 3.0).abs() < TOLERANCE);
        assert_eq!(r[0][2], r[2][0]);
        assert_eq!(r[1][1], 0.0);
        assert_eq!(r[0][1], 0.0);
    }

    #[test]
    fn test_reset() {
        let mut estimator = VarianceEstimator::new();
        for sample in samples().iter() {
            estimator.update(sample);
        }
        estimator.reset();
        assert_eq!(estimator, VarianceEstimator::new());
    }
}
