use crate::impl_standard_traits;
use crate::matrix::Column4;
use uniform_array_derive::UniformArray;

/// A planar position and velocity; the filter's state and observation vector.
///
/// The unit system is chosen by the caller, e.g. degrees of latitude/longitude with
/// velocities in meters per second, or projected meters throughout.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct PositionVelocity<T> {
    /// The position along the first axis, e.g. the latitude.
    pub x: T,
    /// The position along the second axis, e.g. the longitude.
    pub y: T,
    /// The velocity along the first axis, e.g. towards north.
    pub vx: T,
    /// The velocity along the second axis, e.g. towards east.
    pub vy: T,
}

/// An observation of position and velocity.
pub type Measurement<T> = PositionVelocity<T>;

impl<T> PositionVelocity<T> {
    /// Initializes a new [`PositionVelocity`] instance.
    #[inline(always)]
    pub const fn new(x: T, y: T, vx: T, vy: T) -> Self {
        Self { x, y, vx, vy }
    }

    /// Constructs a new instance from a position and a velocity in a north/east frame.
    ///
    /// The north component becomes `vx`, the east component `vy`; the down component is ignored.
    #[cfg(feature = "coordinate-frame")]
    #[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
    pub fn with_velocity_ned<C>(x: T, y: T, velocity: C) -> Self
    where
        C: Into<coordinate_frame::NorthEastDown<T>>,
        T: Clone,
    {
        let velocity = velocity.into();
        Self {
            x,
            y,
            vx: velocity.x(),
            vy: velocity.y(),
        }
    }

    /// Returns the velocity as a north/east/down vector with zero vertical component.
    #[cfg(feature = "coordinate-frame")]
    #[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
    pub fn velocity_ned(&self) -> coordinate_frame::NorthEastDown<T>
    where
        T: Copy + num_traits::Zero,
    {
        coordinate_frame::NorthEastDown::new(self.vx, self.vy, T::zero())
    }

    /// Returns the position as an `(x, y)` tuple.
    #[inline(always)]
    pub fn position(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.x, self.y)
    }

    /// Returns the velocity as a `(vx, vy)` tuple.
    #[inline(always)]
    pub fn velocity(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.vx, self.vy)
    }

    /// Returns the values as a 4×1 column vector.
    #[inline]
    pub fn to_column(&self) -> Column4<T>
    where
        T: Copy,
    {
        [[self.x], [self.y], [self.vx], [self.vy]]
    }

    /// Constructs a new instance from a 4×1 column vector.
    #[inline]
    pub fn from_column(column: &Column4<T>) -> Self
    where
        T: Copy,
    {
        Self::new(column[0][0], column[1][0], column[2][0], column[3][0])
    }
}

impl_standard_traits!(PositionVelocity, T, 4, [x, y, vx, vy]);
