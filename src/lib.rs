// Enable no_std mode.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// Ensure allow(unsafe_code) / forbid(unsafe_code) markers.
#![cfg_attr(feature = "unsafe", allow(unsafe_code))]
#![cfg_attr(not(feature = "unsafe"), forbid(unsafe_code))]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # GPS track Kalman filter
//!
//! Fuses noisy, periodic position and velocity observations, such as GPS fixes, into a
//! smoothed track estimate.
//!
//! ```
//! use gps_track_kalman::{FilterConfig, KalmanFilter, PositionVelocity, TelemetryReading};
//!
//! let mut filter = KalmanFilter::new(PositionVelocity::new(1.0, 2.0, 1.0, 1.0), FilterConfig::default());
//!
//! filter.predict(1.0).unwrap();
//! filter.correct(&PositionVelocity::new(2.0, 2.0, 1.0, 2.0)).unwrap();
//!
//! let reading = TelemetryReading::new(8.067295, 80.39655666666667, 20.0, 284.0_f64);
//! filter.predict(1.0).unwrap();
//! filter.correct(&reading.to_measurement()).unwrap();
//!
//! let state = filter.state();
//! assert!(state.x.is_finite() && state.y.is_finite());
//! ```

mod error;
pub mod kalman;
mod macros;
pub mod matrix;
mod num_traits;
mod position_velocity;
mod telemetry_reading;
mod variance_estimator;

pub use crate::error::{FilterError, MatrixError, Shape};
pub use crate::kalman::{
    FilterConfig, InitialUncertainty, KalmanFilter, NoiseModel, ProcessNoise, Projection,
};
pub use crate::matrix::{Column4, Matrix4};
pub use crate::position_velocity::{Measurement, PositionVelocity};
pub use crate::telemetry_reading::TelemetryReading;
pub use crate::variance_estimator::VarianceEstimator;

pub use crate::num_traits::*;
