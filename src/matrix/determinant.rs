use crate::error::{MatrixError, Shape};
use crate::matrix::expect_shape;
use core::ops::{Add, Mul, Sub};

/// Calculates the determinant of a 3×3 matrix in closed form.
///
/// ## Errors
/// [`MatrixError::Dimension`] unless the matrix is 3×3.
pub fn determinant3x3<T, R>(matrix: &[R]) -> Result<T, MatrixError>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
    R: AsRef<[T]>,
{
    expect_shape("determinant3x3", matrix, Shape::new(3, 3))?;
    let m0 = matrix[0].as_ref();
    let m1 = matrix[1].as_ref();
    let m2 = matrix[2].as_ref();
    Ok(det3(
        &[m0[0], m0[1], m0[2]],
        &[m1[0], m1[1], m1[2]],
        &[m2[0], m2[1], m2[2]],
    ))
}

/// Calculates the determinant of a 4×4 matrix by Laplace expansion along the first row.
///
/// ## Errors
/// [`MatrixError::Dimension`] unless the matrix is 4×4.
pub fn determinant4x4<T, R>(matrix: &[R]) -> Result<T, MatrixError>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
    R: AsRef<[T]>,
{
    expect_shape("determinant4x4", matrix, Shape::new(4, 4))?;
    let top = matrix[0].as_ref();

    // Minor of the first-row element in `skip`, taken from rows 1..4.
    let minor = |skip: usize| -> T {
        let mut rows = [[top[0]; 3]; 3];
        for (dst, src) in rows.iter_mut().zip(&matrix[1..]) {
            let src = src.as_ref();
            let mut k = 0;
            for (col, &value) in src.iter().enumerate() {
                if col != skip {
                    dst[k] = value;
                    k += 1;
                }
            }
        }
        det3(&rows[0], &rows[1], &rows[2])
    };

    Ok(top[0] * minor(0) - top[1] * minor(1) + top[2] * minor(2) - top[3] * minor(3))
}

#[inline(always)]
pub(crate) fn det3<T>(r0: &[T; 3], r1: &[T; 3], r2: &[T; 3]) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    r0[0] * r1[1] * r2[2] + r0[1] * r1[2] * r2[0] + r0[2] * r1[0] * r2[1]
        - r0[2] * r1[1] * r2[0]
        - r0[1] * r1[0] * r2[2]
        - r0[0] * r1[2] * r2[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant4x4_upper_triangular() {
        let matrix = [
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 2.0, 3.0],
            [0.0, 0.0, 1.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(determinant4x4(&matrix), Ok(1.0));
    }

    #[test]
    fn test_determinant3x3_upper_triangular() {
        let matrix = [[1.0, 2.0, 3.0], [0.0, 1.0, 2.0], [0.0, 0.0, 1.0]];
        assert_eq!(determinant3x3(&matrix), Ok(1.0));
    }

    #[test]
    fn test_determinant_general() {
        let matrix = [[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]];
        assert_eq!(determinant3x3(&matrix), Ok(49.0));

        let matrix = [
            [3.0, 2.0, 0.0, 1.0],
            [4.0, 0.0, 1.0, 2.0],
            [3.0, 0.0, 2.0, 1.0],
            [9.0, 2.0, 3.0, 1.0],
        ];
        assert_eq!(determinant4x4(&matrix), Ok(24.0));
    }

    #[test]
    fn test_determinant_integer_matrix() {
        let matrix = [[0, 1, 0], [1, 0, 0], [0, 0, 1]];
        assert_eq!(determinant3x3(&matrix), Ok(-1));
    }

    #[test]
    fn test_determinant_wrong_size() {
        let matrix = [[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(
            determinant3x3(&matrix),
            Err(MatrixError::Dimension {
                operation: "determinant3x3",
                left: Shape::new(2, 2),
                right: Shape::new(3, 3),
            })
        );

        let matrix = [[1.0, 2.0, 3.0], [0.0, 1.0, 2.0], [0.0, 0.0, 1.0]];
        assert!(determinant4x4(&matrix).is_err());
    }
}
