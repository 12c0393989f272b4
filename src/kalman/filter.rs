use crate::error::FilterError;
use crate::kalman::config::{FilterConfig, NoiseModel, Projection};
use crate::macros::{debug_event, trace_event, warn_event};
use crate::matrix::{add, identity, invert4x4, multiply, subtract, transpose, Column4, Matrix4};
use crate::position_velocity::{Measurement, PositionVelocity};
use crate::variance_estimator::VarianceEstimator;
use crate::Scalar;

/// A linear Kalman filter tracking planar position and velocity.
///
/// The state is `[x, y, vx, vy]`. Each round the caller runs [`predict`](Self::predict)
/// with the elapsed time and then [`correct`](Self::correct) with the new observation.
/// Between corrections the filter keeps an acceleration estimate, the change of the
/// corrected velocity over the last time step, and feeds it into the next prediction as
/// a control input.
///
/// Both steps either update the filter completely or, on error, leave it untouched.
#[derive(Debug, Clone)]
pub struct KalmanFilter<T> {
    config: FilterConfig<T>,
    /// State vector `[x, y, vx, vy]`.
    state: Column4<T>,
    /// Estimate covariance `P`.
    covariance: Matrix4<T>,
    /// Covariance to return to on [`reset`](Self::reset).
    initial_covariance: Matrix4<T>,
    /// The gain of the last correction.
    kalman_gain: Matrix4<T>,
    /// Acceleration `(ax, ay)` applied by the next prediction.
    acceleration: (T, T),
    /// Velocity after the last correction, or the initial velocity.
    last_velocity: (T, T),
    /// Time step of the last prediction.
    time_step: Option<T>,
    statistics: VarianceEstimator<T>,
}

impl<T> KalmanFilter<T>
where
    T: Scalar,
{
    /// Initializes a new [`KalmanFilter`].
    ///
    /// The initial covariance is diagonal, built from
    /// [`FilterConfig::initial_uncertainty`].
    ///
    /// ## Arguments
    /// * `initial_state` - The initial position and velocity estimate.
    /// * `config` - The noise and projection configuration.
    pub fn new(initial_state: PositionVelocity<T>, config: FilterConfig<T>) -> Self {
        let covariance = config.initial_uncertainty.covariance();
        Self::with_covariance(initial_state, covariance, config)
    }

    /// Initializes a new [`KalmanFilter`] with an explicit initial covariance matrix.
    pub fn with_covariance(
        initial_state: PositionVelocity<T>,
        initial_covariance: Matrix4<T>,
        config: FilterConfig<T>,
    ) -> Self {
        let zero = T::zero();
        Self {
            config,
            state: initial_state.to_column(),
            covariance: initial_covariance,
            initial_covariance,
            kalman_gain: [[zero; 4]; 4],
            acceleration: (zero, zero),
            last_velocity: initial_state.velocity(),
            time_step: None,
            statistics: VarianceEstimator::new(),
        }
    }

    /// Restarts the filter at the given state.
    ///
    /// Restores the initial covariance and clears the acceleration estimate, the last gain
    /// and the measurement statistics.
    pub fn reset(&mut self, state: PositionVelocity<T>) {
        let covariance = self.initial_covariance;
        *self = Self::with_covariance(state, covariance, self.config);
    }

    /// Performs a prediction step over the time step `dt`.
    ///
    /// Computes `X = A·X + B·u` and `P = A·P·Aᵀ + Q`, where `u` is the current acceleration
    /// estimate. The time step is kept for the acceleration estimate of the next correction.
    ///
    /// ## Errors
    /// * [`FilterError::InvalidTimeStep`] if `dt` is not a finite, positive number.
    /// * [`FilterError::NonFiniteEstimate`] if the predicted state or covariance overflows.
    pub fn predict(&mut self, dt: T) -> Result<(), FilterError> {
        if !(dt.is_finite() && dt > T::zero()) {
            warn_event!(dt = ?dt.to_f64(), "Rejecting prediction with invalid time step");
            return Err(FilterError::InvalidTimeStep);
        }

        let zero = T::zero();
        let one = T::one();
        let half = one / (one + one);
        let (scale_x, scale_y) = self.position_scale();

        // State transition: velocity feeds position over dt.
        let a: Matrix4<T> = [
            [one, zero, scale_x * dt, zero],
            [zero, one, zero, scale_y * dt],
            [zero, zero, one, zero],
            [zero, zero, zero, one],
        ];

        // Control input: constant acceleration over dt.
        let dt_sq_half = half * dt * dt;
        let b: [[T; 2]; 4] = [
            [scale_x * dt_sq_half, zero],
            [zero, scale_y * dt_sq_half],
            [dt, zero],
            [zero, dt],
        ];
        let u: [[T; 1]; 2] = [[self.acceleration.0], [self.acceleration.1]];

        let ax: Column4<T> = multiply(&a, &self.state)?;
        let bu: Column4<T> = multiply(&b, &u)?;
        let state: Column4<T> = add(&ax, &bu)?;

        let at: Matrix4<T> = transpose(&a)?;
        let ap: Matrix4<T> = multiply(&a, &self.covariance)?;
        let apat: Matrix4<T> = multiply(&ap, &at)?;
        let covariance: Matrix4<T> = add(&apat, &self.config.process_noise.matrix(dt))?;
        Self::ensure_finite(&state, &covariance)?;

        self.state = state;
        self.covariance = covariance;
        self.time_step = Some(dt);

        trace_event!(
            dt = ?dt.to_f64(),
            x = ?state[0][0].to_f64(),
            y = ?state[1][0].to_f64(),
            "Predicted state"
        );
        Ok(())
    }

    /// Performs a correction step with a position and velocity observation.
    ///
    /// Computes `K = P·Hᵀ·(H·P·Hᵀ + R)⁻¹`, `X = X + K·(Y − H·X)` and `P = (I − K·H)·P`
    /// with `H = I`, then updates the acceleration estimate from the change in velocity.
    ///
    /// ## Errors
    /// * [`FilterError::InvalidMeasurement`] if any component of the measurement is not finite.
    /// * [`FilterError::Matrix`] with [`MatrixError::Singular`](crate::MatrixError::Singular)
    ///   if the innovation covariance `H·P·Hᵀ + R` cannot be inverted.
    /// * [`FilterError::NonFiniteEstimate`] if the corrected state or covariance overflows.
    pub fn correct(&mut self, measurement: &Measurement<T>) -> Result<(), FilterError> {
        let finite = measurement.x.is_finite()
            && measurement.y.is_finite()
            && measurement.vx.is_finite()
            && measurement.vy.is_finite();
        if !finite {
            warn_event!("Rejecting measurement with non-finite components");
            return Err(FilterError::InvalidMeasurement);
        }

        let mut statistics = self.statistics;
        statistics.update(measurement);
        let r = match self.config.noise_model {
            NoiseModel::Fixed(r) => r,
            NoiseModel::Adaptive {
                variance_trust,
                covariance_trust,
            } => statistics.noise_covariance(variance_trust, covariance_trust),
        };

        // The filter observes position and velocity directly.
        let h: Matrix4<T> = identity();
        let y: Column4<T> = multiply(&h, &measurement.to_column())?;

        let ht: Matrix4<T> = transpose(&h)?;
        let pht: Matrix4<T> = multiply(&self.covariance, &ht)?;
        let hpht: Matrix4<T> = multiply(&h, &pht)?;
        let innovation_covariance: Matrix4<T> = add(&hpht, &r)?;
        let inverse = invert4x4(&innovation_covariance).map_err(|e| {
            warn_event!(error = %e, "Innovation covariance is not invertible");
            e
        })?;
        let kalman_gain: Matrix4<T> = multiply(&pht, &inverse)?;

        let hx: Column4<T> = multiply(&h, &self.state)?;
        let residual: Column4<T> = subtract(&y, &hx)?;
        let correction: Column4<T> = multiply(&kalman_gain, &residual)?;
        let state: Column4<T> = add(&self.state, &correction)?;

        let kh: Matrix4<T> = multiply(&kalman_gain, &h)?;
        let i_kh: Matrix4<T> = subtract(&identity::<T, 4>(), &kh)?;
        let covariance: Matrix4<T> = multiply(&i_kh, &self.covariance)?;
        Self::ensure_finite(&state, &covariance)?;

        let velocity = (state[2][0], state[3][0]);
        let acceleration = match self.time_step {
            Some(dt) => (
                (velocity.0 - self.last_velocity.0) / dt,
                (velocity.1 - self.last_velocity.1) / dt,
            ),
            None => (T::zero(), T::zero()),
        };

        self.state = state;
        self.covariance = covariance;
        self.kalman_gain = kalman_gain;
        self.statistics = statistics;
        self.last_velocity = velocity;
        self.acceleration = acceleration;

        debug_event!(
            residual_x = ?residual[0][0].to_f64(),
            residual_y = ?residual[1][0].to_f64(),
            gain_x = ?kalman_gain[0][0].to_f64(),
            gain_y = ?kalman_gain[1][1].to_f64(),
            "Corrected state"
        );
        Ok(())
    }

    /// Position change per unit of velocity and time for the first and second axis.
    fn position_scale(&self) -> (T, T) {
        match self.config.projection {
            Projection::Planar => (T::one(), T::one()),
            Projection::Geodetic { earth_radius } => {
                let north = earth_radius.recip().to_degrees();
                let (_, cos_latitude) = self.state[0][0].to_radians().sin_cos_rad();
                let cos_latitude = cos_latitude.abs().max(T::epsilon());
                (north, north / cos_latitude)
            }
        }
    }

    /// Rejects a state or covariance that overflowed or became NaN.
    fn ensure_finite(state: &Column4<T>, covariance: &Matrix4<T>) -> Result<(), FilterError> {
        let finite = state.iter().all(|row| row[0].is_finite())
            && covariance.iter().flatten().all(|value| value.is_finite());
        if finite {
            Ok(())
        } else {
            warn_event!("Rejecting non-finite state estimate");
            Err(FilterError::NonFiniteEstimate)
        }
    }
}

impl<T> KalmanFilter<T> {
    /// Gets the current state estimate.
    pub fn state(&self) -> PositionVelocity<T>
    where
        T: Copy,
    {
        PositionVelocity::from_column(&self.state)
    }

    /// Gets the current estimate covariance matrix `P`.
    pub fn covariance(&self) -> Matrix4<T>
    where
        T: Copy,
    {
        self.covariance
    }

    /// Gets the Kalman gain of the last correction; zero before the first one.
    pub fn kalman_gain(&self) -> Matrix4<T>
    where
        T: Copy,
    {
        self.kalman_gain
    }

    /// Gets the acceleration estimate `(ax, ay)` the next prediction applies.
    pub fn acceleration(&self) -> (T, T)
    where
        T: Copy,
    {
        self.acceleration
    }

    /// Gets the time step of the last prediction, if any.
    pub fn time_step(&self) -> Option<T>
    where
        T: Copy,
    {
        self.time_step
    }

    /// Gets the running statistics of all accepted measurements.
    pub fn statistics(&self) -> &VarianceEstimator<T> {
        &self.statistics
    }

    /// Gets the filter configuration.
    pub fn config(&self) -> &FilterConfig<T> {
        &self.config
    }
}
