//! A position/velocity Kalman filter for GPS tracks.

mod config;
mod filter;

pub use config::{FilterConfig, InitialUncertainty, NoiseModel, ProcessNoise, Projection};
pub use filter::KalmanFilter;
