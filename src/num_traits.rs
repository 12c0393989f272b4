use num_traits::float::FloatCore;

/// Sine and cosine of an angle given in radians.
pub trait SinCos {
    type Output;

    /// Returns `(sin(self), cos(self))`.
    fn sin_cos_rad(self) -> (Self::Output, Self::Output);
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(any(feature = "std", test))]
impl SinCos for f32 {
    type Output = f32;

    #[inline(always)]
    fn sin_cos_rad(self) -> (f32, f32) {
        f32::sin_cos(self)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(any(feature = "std", test))]
impl SinCos for f64 {
    type Output = f64;

    #[inline(always)]
    fn sin_cos_rad(self) -> (f64, f64) {
        f64::sin_cos(self)
    }
}

#[cfg_attr(docsrs, doc(cfg(all(feature = "micromath", not(feature = "std")))))]
#[cfg(all(feature = "micromath", not(any(feature = "std", test))))]
impl SinCos for f32 {
    type Output = f32;

    #[inline(always)]
    fn sin_cos_rad(self) -> (f32, f32) {
        use micromath::F32Ext;
        (F32Ext::sin(self), F32Ext::cos(self))
    }
}

/// The scalar type used by the filter and the matrix routines.
///
/// Implemented for every [`FloatCore`] type that also provides trigonometry,
/// i.e. `f32` and `f64` with the `std` feature, or `f32` with `micromath`.
pub trait Scalar: FloatCore + SinCos<Output = Self> {}

impl<T> Scalar for T where T: FloatCore + SinCos<Output = T> {}

/// Default tuning constants of the tracking filter for a scalar type.
pub trait DefaultTuning: Sized {
    /// Standard deviation of the initial position estimate.
    const POSITION_SIGMA: Self;

    /// Standard deviation of the initial velocity estimate.
    const VELOCITY_SIGMA: Self;

    /// Process noise variance added to each position axis per unit of time.
    const POSITION_PROCESS_NOISE: Self;

    /// Process noise variance added to each velocity axis per unit of time.
    const VELOCITY_PROCESS_NOISE: Self;

    /// Measurement noise variance of a position observation.
    const POSITION_MEASUREMENT_NOISE: Self;

    /// Measurement noise variance of a velocity observation.
    const VELOCITY_MEASUREMENT_NOISE: Self;

    /// Scale applied to sample variances when deriving adaptive measurement noise.
    const VARIANCE_TRUST: Self;

    /// Scale applied to position/velocity covariances when deriving adaptive measurement noise.
    const COVARIANCE_TRUST: Self;

    /// Mean Earth radius, in meters.
    const EARTH_RADIUS: Self;
}

impl DefaultTuning for f32 {
    const POSITION_SIGMA: f32 = 1.0;
    const VELOCITY_SIGMA: f32 = 0.1;
    const POSITION_PROCESS_NOISE: f32 = 0.1;
    const VELOCITY_PROCESS_NOISE: f32 = 0.1;
    const POSITION_MEASUREMENT_NOISE: f32 = 1.0;
    const VELOCITY_MEASUREMENT_NOISE: f32 = 0.1;
    const VARIANCE_TRUST: f32 = 0.9;
    const COVARIANCE_TRUST: f32 = 0.6;
    const EARTH_RADIUS: f32 = 6_371_000.0;
}

impl DefaultTuning for f64 {
    const POSITION_SIGMA: f64 = 1.0;
    const VELOCITY_SIGMA: f64 = 0.1;
    const POSITION_PROCESS_NOISE: f64 = 0.1;
    const VELOCITY_PROCESS_NOISE: f64 = 0.1;
    const POSITION_MEASUREMENT_NOISE: f64 = 1.0;
    const VELOCITY_MEASUREMENT_NOISE: f64 = 0.1;
    const VARIANCE_TRUST: f64 = 0.9;
    const COVARIANCE_TRUST: f64 = 0.6;
    const EARTH_RADIUS: f64 = 6_371_000.0;
}
