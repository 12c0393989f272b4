//! Replays a recorded GPS track through the filter and prints the estimates.
//!
//! ```text
//! cargo run --example replay --features tracing -- demos/data/track.csv
//! ```

use std::error::Error;

use csv::ReaderBuilder;
use gps_track_kalman::{FilterConfig, KalmanFilter, NoiseModel, Projection, TelemetryReading};
use serde::Deserialize;
use tracing::info;

const DEFAULT_TRACK: &str = "demos/data/track.csv";

/// A single GPS fix.
#[derive(Debug, Deserialize)]
struct TrackPoint {
    /// The fix time, in seconds, relative to the Unix epoch.
    time: f64,
    /// The latitude, in degrees.
    latitude: f64,
    /// The longitude, in degrees.
    longitude: f64,
    /// The ground speed, in meters per second.
    speed: f64,
    /// The course over ground, in degrees clockwise from north.
    course: f64,
}

impl From<&TrackPoint> for TelemetryReading<f64> {
    fn from(value: &TrackPoint) -> Self {
        TelemetryReading::new(value.latitude, value.longitude, value.speed, value.course)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TRACK.to_string());
    let points = read_csv(&path)?;
    let Some((first, rest)) = points.split_first() else {
        return Err(format!("{path} contains no track points").into());
    };
    info!(points = points.len(), path = %path, "loaded track");

    let config = FilterConfig::default()
        .with_noise_model(NoiseModel::adaptive())
        .with_projection(Projection::geodetic());
    let mut filter = KalmanFilter::new(TelemetryReading::from(first).to_measurement(), config);

    println!("round,measured_lat,measured_lon,predicted_lat,predicted_lon,corrected_lat,corrected_lon");

    let mut last_time = first.time;
    for (round, point) in rest.iter().enumerate() {
        let dt = point.time - last_time;
        last_time = point.time;

        filter.predict(dt)?;
        let predicted = filter.state();

        filter.correct(&TelemetryReading::from(point).to_measurement())?;
        let corrected = filter.state();

        println!(
            "{},{:.7},{:.7},{:.7},{:.7},{:.7},{:.7}",
            round + 1,
            point.latitude,
            point.longitude,
            predicted.x,
            predicted.y,
            corrected.x,
            corrected.y
        );
    }

    let (ax, ay) = filter.acceleration();
    info!(ax, ay, "final acceleration estimate");
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();
}

fn read_csv(file_path: &str) -> Result<Vec<TrackPoint>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().from_path(file_path)?;
    let mut data = Vec::new();

    for result in rdr.deserialize() {
        let record: TrackPoint = result?;
        data.push(record);
    }

    Ok(data)
}
