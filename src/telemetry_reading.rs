use crate::impl_standard_traits;
use crate::position_velocity::PositionVelocity;
use crate::Scalar;
use uniform_array_derive::UniformArray;

/// A raw GPS telemetry record.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct TelemetryReading<T> {
    /// The latitude, in degrees.
    pub latitude: T,
    /// The longitude, in degrees.
    pub longitude: T,
    /// The ground speed, e.g. in meters per second.
    pub speed: T,
    /// The course over ground, in degrees clockwise from north.
    pub course: T,
}

impl<T> TelemetryReading<T> {
    /// Initializes a new [`TelemetryReading`] instance.
    #[inline(always)]
    pub const fn new(latitude: T, longitude: T, speed: T, course: T) -> Self {
        Self {
            latitude,
            longitude,
            speed,
            course,
        }
    }

    /// Resolves the speed along the course into its north and east components.
    pub fn velocity_components(&self) -> (T, T)
    where
        T: Scalar,
    {
        let (sin, cos) = self.course.to_radians().sin_cos_rad();
        (self.speed * cos, self.speed * sin)
    }

    /// Converts the reading into the filter's observation frame.
    ///
    /// The latitude becomes `x`, the longitude `y`, and the velocity is resolved from
    /// speed and course into a northward (`vx`) and an eastward (`vy`) component.
    pub fn to_measurement(&self) -> PositionVelocity<T>
    where
        T: Scalar,
    {
        let (vx, vy) = self.velocity_components();
        PositionVelocity::new(self.latitude, self.longitude, vx, vy)
    }

    /// Returns the velocity as a north/east/down vector with zero vertical component.
    #[cfg(feature = "coordinate-frame")]
    #[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
    pub fn velocity_ned(&self) -> coordinate_frame::NorthEastDown<T>
    where
        T: Scalar,
    {
        let (north, east) = self.velocity_components();
        coordinate_frame::NorthEastDown::new(north, east, T::zero())
    }
}

impl<T> From<&TelemetryReading<T>> for PositionVelocity<T>
where
    T: Scalar,
{
    #[inline]
    fn from(value: &TelemetryReading<T>) -> Self {
        value.to_measurement()
    }
}

impl<T> From<TelemetryReading<T>> for PositionVelocity<T>
where
    T: Scalar,
{
    #[inline]
    fn from(value: TelemetryReading<T>) -> Self {
        value.to_measurement()
    }
}

impl_standard_traits!(TelemetryReading, T, 4, [latitude, longitude, speed, course]);

#[cfg(test)]
mod test {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_len() {
        let reading = TelemetryReading::<f64>::default();
        assert_eq!(reading.len(), 4);
    }

    #[test]
    fn test_index() {
        let reading = TelemetryReading::<f64>::new(8.0, 80.0, 20.0, 284.0);

        assert_eq!(reading[0], 8.0);
        assert_eq!(reading[1], 80.0);
        assert_eq!(reading[2], 20.0);
        assert_eq!(reading[3], 284.0);
    }

    #[test]
    fn test_to_measurement() {
        let reading = TelemetryReading {
            longitude: 80.39655666666667,
            latitude: 8.067295,
            speed: 20.0,
            course: 284.0,
        };

        let measurement = reading.to_measurement();
        let course = 284.0_f64.to_radians();

        assert_eq!(measurement.x, 8.067295);
        assert_eq!(measurement.y, 80.39655666666667);
        assert!((measurement.vx - 20.0 * course.cos()).abs() < TOLERANCE);
        assert!((measurement.vy - 20.0 * course.sin()).abs() < TOLERANCE);

        // Heading west-north-west: small northward, large westward component.
        assert!(measurement.vx > 0.0 && measurement.vx < 5.0);
        assert!(measurement.vy < -19.0);
    }

    #[test]
    fn test_cardinal_courses() {
        let north = TelemetryReading::new(0.0, 0.0, 10.0, 0.0_f64).to_measurement();
        assert!((north.vx - 10.0).abs() < TOLERANCE);
        assert!(north.vy.abs() < TOLERANCE);

        let east: PositionVelocity<f64> = TelemetryReading::new(0.0, 0.0, 10.0, 90.0).into();
        assert!(east.vx.abs() < TOLERANCE);
        assert!((east.vy - 10.0).abs() < TOLERANCE);

        let south = TelemetryReading::new(0.0, 0.0, 10.0, 180.0_f64).to_measurement();
        assert!((south.vx + 10.0).abs() < TOLERANCE);
    }

    #[test]
    #[cfg(feature = "coordinate-frame")]
    fn test_velocity_ned_matches_measurement() {
        let reading = TelemetryReading::new(8.067295, 80.39655666666667, 20.0, 284.0_f64);
        let ned = reading.velocity_ned();
        let measurement = reading.to_measurement();

        assert_eq!(ned.x(), measurement.vx);
        assert_eq!(ned.y(), measurement.vy);
        assert_eq!(ned.z(), 0.0);
        assert_eq!(
            PositionVelocity::with_velocity_ned(reading.latitude, reading.longitude, ned),
            measurement
        );
    }
}
