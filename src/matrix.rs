//! Dense matrix primitives over row-major arrays.
//!
//! Operands are slices of rows (`&[R]` with `R: AsRef<[T]>`), so fixed-size arrays,
//! arrays of slices and nested vectors are all accepted. Results are fixed-size
//! arrays; their shape is chosen through const generics and validated against the
//! operand shapes at run time, reporting [`MatrixError::Dimension`] on mismatch.

mod determinant;
mod inverse;
mod ops;

pub use determinant::{determinant3x3, determinant4x4};
pub use inverse::{invert4x4, invert4x4_adjugate};
pub use ops::{add, identity, multiply, subtract, transpose};

use crate::error::{MatrixError, Shape};

/// A 4×4 matrix.
pub type Matrix4<T> = [[T; 4]; 4];

/// A 4×1 column vector.
pub type Column4<T> = [[T; 1]; 4];

/// Determines the shape of a matrix given as a slice of rows.
///
/// An empty slice has shape 0×0. All rows must have the length of the first one.
pub(crate) fn shape_of<T, R>(operation: &'static str, matrix: &[R]) -> Result<Shape, MatrixError>
where
    R: AsRef<[T]>,
{
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |row| row.as_ref().len());
    match matrix.iter().find(|row| row.as_ref().len() != cols) {
        None => Ok(Shape::new(rows, cols)),
        Some(ragged) => Err(MatrixError::Dimension {
            operation,
            left: Shape::new(rows, cols),
            right: Shape::new(rows, ragged.as_ref().len()),
        }),
    }
}

/// Ensures a matrix has exactly the given shape.
pub(crate) fn expect_shape<T, R>(
    operation: &'static str,
    matrix: &[R],
    expected: Shape,
) -> Result<(), MatrixError>
where
    R: AsRef<[T]>,
{
    let shape = shape_of(operation, matrix)?;
    if shape == expected {
        Ok(())
    } else {
        Err(MatrixError::Dimension {
            operation,
            left: shape,
            right: expected,
        })
    }
}
