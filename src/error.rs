use core::fmt::{Display, Formatter};

/// The shape of a matrix, in rows × columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline(always)]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Errors raised by the matrix primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The operand shapes are incompatible for the operation.
    ///
    /// For unary operations `right` holds the shape the operation requires.
    /// A ragged operand is reported with the offending row length as its column count.
    Dimension {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },
    /// The matrix has no inverse.
    Singular,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Dimension {
                operation,
                left,
                right,
            } => write!(f, "{operation}: incompatible matrix dimensions {left} and {right}"),
            MatrixError::Singular => write!(f, "matrix is not invertible"),
        }
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Errors raised by [`KalmanFilter`](crate::KalmanFilter) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// A linear algebra step failed; most commonly a singular innovation covariance.
    Matrix(MatrixError),
    /// The time step was zero, negative or not finite.
    InvalidTimeStep,
    /// A measurement component was not finite.
    InvalidMeasurement,
    /// The updated state or covariance overflowed or became NaN.
    NonFiniteEstimate,
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterError::Matrix(e) => write!(f, "filter step failed: {e}"),
            FilterError::InvalidTimeStep => {
                write!(f, "time step must be finite and greater than zero")
            }
            FilterError::InvalidMeasurement => write!(f, "measurement must be finite"),
            FilterError::NonFiniteEstimate => write!(f, "state estimate is not finite"),
        }
    }
}

impl From<MatrixError> for FilterError {
    #[inline]
    fn from(value: MatrixError) -> Self {
        FilterError::Matrix(value)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Matrix(e) => Some(e),
            FilterError::InvalidTimeStep
            | FilterError::InvalidMeasurement
            | FilterError::NonFiniteEstimate => None,
        }
    }
}
