use crate::error::{MatrixError, Shape};
use crate::matrix::determinant::det3;
use crate::matrix::{determinant4x4, expect_shape, Matrix4};
use num_traits::float::FloatCore;

/// Inverts a 4×4 matrix by Gauss-Jordan elimination with partial pivoting.
///
/// The augmented matrix `[A | I]` is reduced to `[I | A⁻¹]`; in each column the row
/// with the largest absolute pivot candidate is swapped into place.
///
/// ## Errors
/// * [`MatrixError::Dimension`] unless the matrix is 4×4.
/// * [`MatrixError::Singular`] if the determinant is zero or a zero pivot is encountered.
///
/// The determinant test is exact, so a well-conditioned matrix whose determinant underflows
/// (e.g. `1e-90·I`) is reported as singular. Normalize such inputs before inverting.
pub fn invert4x4<T, R>(matrix: &[R]) -> Result<Matrix4<T>, MatrixError>
where
    T: FloatCore,
    R: AsRef<[T]>,
{
    expect_shape("invert4x4", matrix, Shape::new(4, 4))?;
    if determinant4x4(matrix)? == T::zero() {
        return Err(MatrixError::Singular);
    }

    let zero = T::zero();
    let one = T::one();
    let mut augmented = [[zero; 8]; 4];
    for (i, (dst, src)) in augmented.iter_mut().zip(matrix).enumerate() {
        dst[..4].copy_from_slice(src.as_ref());
        dst[4 + i] = one;
    }

    for col in 0..4 {
        let mut pivot_row = col;
        for row in (col + 1)..4 {
            if augmented[row][col].abs() > augmented[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        augmented.swap(col, pivot_row);

        let pivot = augmented[col][col];
        if pivot == zero || !pivot.is_finite() {
            return Err(MatrixError::Singular);
        }

        for value in augmented[col].iter_mut() {
            *value = *value / pivot;
        }

        let pivot_values = augmented[col];
        for (row, values) in augmented.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = values[col];
            for (value, &pivot_value) in values.iter_mut().zip(pivot_values.iter()) {
                *value = *value - factor * pivot_value;
            }
        }
    }

    let mut inverse = [[zero; 4]; 4];
    for (dst, src) in inverse.iter_mut().zip(augmented.iter()) {
        dst.copy_from_slice(&src[4..]);
    }
    Ok(inverse)
}

/// Inverts a 4×4 matrix as its adjugate scaled by `1/det`.
///
/// Each cofactor is taken from the rows and columns `(i + k) mod 4` for `k = 1..=3`;
/// these are cyclic, even permutations of the sorted minor, so the checkerboard sign
/// `(-1)^(i+j)` applies unchanged.
///
/// ## Errors
/// * [`MatrixError::Dimension`] unless the matrix is 4×4.
/// * [`MatrixError::Singular`] if the determinant is zero.
pub fn invert4x4_adjugate<T, R>(matrix: &[R]) -> Result<Matrix4<T>, MatrixError>
where
    T: FloatCore,
    R: AsRef<[T]>,
{
    expect_shape("invert4x4_adjugate", matrix, Shape::new(4, 4))?;
    let det = determinant4x4(matrix)?;
    if det == T::zero() || !det.is_finite() {
        return Err(MatrixError::Singular);
    }

    let at = |row: usize, col: usize| matrix[row % 4].as_ref()[col % 4];
    let det_inv = det.recip();

    let mut inverse = [[T::zero(); 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            let minor = det3(
                &[at(i + 1, j + 1), at(i + 1, j + 2), at(i + 1, j + 3)],
                &[at(i + 2, j + 1), at(i + 2, j + 2), at(i + 2, j + 3)],
                &[at(i + 3, j + 1), at(i + 3, j + 2), at(i + 3, j + 3)],
            );
            let cofactor = if (i + j) % 2 == 0 { minor } else { -minor };

            // Adjugate is the transposed cofactor matrix.
            inverse[j][i] = cofactor * det_inv;
        }
    }
    Ok(inverse)
}
