use crate::matrix::Matrix4;
use crate::DefaultTuning;
use num_traits::float::FloatCore;

/// Standard deviations of the initial state estimate, used to build the default covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialUncertainty<T> {
    /// Standard deviation of the position along the first axis.
    pub position_x: T,
    /// Standard deviation of the position along the second axis.
    pub position_y: T,
    /// Standard deviation of the velocity along the first axis.
    pub velocity_x: T,
    /// Standard deviation of the velocity along the second axis.
    pub velocity_y: T,
}

impl<T> InitialUncertainty<T> {
    /// Initializes a new [`InitialUncertainty`] with the same sigma for both axes.
    pub const fn new(position: T, velocity: T) -> Self
    where
        T: Copy,
    {
        Self {
            position_x: position,
            position_y: position,
            velocity_x: velocity,
            velocity_y: velocity,
        }
    }

    /// Returns the diagonal covariance matrix `diag(σx², σy², σvx², σvy²)`.
    pub fn covariance(&self) -> Matrix4<T>
    where
        T: FloatCore,
    {
        diagonal(
            self.position_x * self.position_x,
            self.position_y * self.position_y,
            self.velocity_x * self.velocity_x,
            self.velocity_y * self.velocity_y,
        )
    }
}

/// The process noise `Q` added to the covariance on every prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessNoise<T> {
    /// The same matrix is added regardless of the time step.
    Constant(Matrix4<T>),
    /// Position and velocity variances accumulated per unit of time, i.e. `Q = diag(..)·dt`.
    PerUnitTime { position: T, velocity: T },
}

impl<T> ProcessNoise<T>
where
    T: FloatCore,
{
    /// Returns the process noise matrix for the time step `dt`.
    pub fn matrix(&self, dt: T) -> Matrix4<T> {
        match *self {
            ProcessNoise::Constant(q) => q,
            ProcessNoise::PerUnitTime { position, velocity } => {
                diagonal(position * dt, position * dt, velocity * dt, velocity * dt)
            }
        }
    }
}

/// The measurement noise model `R` used during correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseModel<T> {
    /// A fixed measurement noise covariance matrix.
    Fixed(Matrix4<T>),
    /// Measurement noise derived from the running statistics of all measurements seen so far.
    ///
    /// The variances are scaled by `variance_trust`, the position/velocity covariances of
    /// each axis by `covariance_trust`.
    Adaptive {
        variance_trust: T,
        covariance_trust: T,
    },
}

impl<T> NoiseModel<T> {
    /// Fixed, diagonal measurement noise with the given position and velocity variances.
    pub fn fixed_diagonal(position: T, velocity: T) -> Self
    where
        T: FloatCore,
    {
        NoiseModel::Fixed(diagonal(position, position, velocity, velocity))
    }

    /// Adaptive measurement noise with the default trust coefficients.
    pub fn adaptive() -> Self
    where
        T: DefaultTuning,
    {
        NoiseModel::Adaptive {
            variance_trust: T::VARIANCE_TRUST,
            covariance_trust: T::COVARIANCE_TRUST,
        }
    }
}

/// How velocities map onto positions during prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection<T> {
    /// Positions and velocities share one unit system.
    Planar,
    /// Positions are latitude/longitude in degrees, velocities are meters per time unit.
    ///
    /// The northward displacement is converted to degrees of latitude over the sphere of
    /// the given radius; the eastward one additionally shrinks with `cos(latitude)`.
    Geodetic { earth_radius: T },
}

impl<T> Projection<T> {
    /// The geodetic projection on a sphere of the mean Earth radius.
    pub fn geodetic() -> Self
    where
        T: DefaultTuning,
    {
        Projection::Geodetic {
            earth_radius: T::EARTH_RADIUS,
        }
    }
}

/// Tuning of a [`KalmanFilter`](crate::KalmanFilter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig<T> {
    /// Builds the initial covariance for [`KalmanFilter::new`](crate::KalmanFilter::new).
    pub initial_uncertainty: InitialUncertainty<T>,
    /// Noise added to the covariance on every prediction.
    pub process_noise: ProcessNoise<T>,
    /// Source of the measurement noise used on every correction.
    pub noise_model: NoiseModel<T>,
    /// How velocities advance positions during prediction.
    pub projection: Projection<T>,
}

impl<T> Default for FilterConfig<T>
where
    T: FloatCore + DefaultTuning,
{
    fn default() -> Self {
        Self {
            initial_uncertainty: InitialUncertainty::new(T::POSITION_SIGMA, T::VELOCITY_SIGMA),
            process_noise: ProcessNoise::PerUnitTime {
                position: T::POSITION_PROCESS_NOISE,
                velocity: T::VELOCITY_PROCESS_NOISE,
            },
            noise_model: NoiseModel::fixed_diagonal(
                T::POSITION_MEASUREMENT_NOISE,
                T::VELOCITY_MEASUREMENT_NOISE,
            ),
            projection: Projection::Planar,
        }
    }
}

impl<T> FilterConfig<T> {
    /// Replaces the initial uncertainty.
    pub fn with_initial_uncertainty(mut self, value: InitialUncertainty<T>) -> Self {
        self.initial_uncertainty = value;
        self
    }

    /// Replaces the process noise.
    pub fn with_process_noise(mut self, value: ProcessNoise<T>) -> Self {
        self.process_noise = value;
        self
    }

    /// Replaces the measurement noise model.
    pub fn with_noise_model(mut self, value: NoiseModel<T>) -> Self {
        self.noise_model = value;
        self
    }

    /// Replaces the projection.
    pub fn with_projection(mut self, value: Projection<T>) -> Self {
        self.projection = value;
        self
    }
}

#[inline]
fn diagonal<T>(a: T, b: T, c: T, d: T) -> Matrix4<T>
where
    T: FloatCore,
{
    let zero = T::zero();
    [
        [a, zero, zero, zero],
        [zero, b, zero, zero],
        [zero, zero, c, zero],
        [zero, zero, zero, d],
    ]
}
