use crate::error::{MatrixError, Shape};
use crate::matrix::{expect_shape, shape_of};
use num_traits::{One, Zero};
use core::ops::{Add, Mul, Sub};

/// Returns the `N`×`N` identity matrix.
#[inline]
pub fn identity<T, const N: usize>() -> [[T; N]; N]
where
    T: Copy + Zero + One,
{
    let mut result = [[T::zero(); N]; N];
    for (i, row) in result.iter_mut().enumerate() {
        row[i] = T::one();
    }
    result
}

/// Calculates the matrix product `A·B`.
///
/// The result has `M` rows and `N` columns, which must equal `rows(A)` and `cols(B)`.
///
/// ## Errors
/// [`MatrixError::Dimension`] if `cols(A) != rows(B)`, either operand is ragged,
/// or the result shape does not match.
pub fn multiply<T, A, B, const M: usize, const N: usize>(
    a: &[A],
    b: &[B],
) -> Result<[[T; N]; M], MatrixError>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    const OPERATION: &str = "multiply";
    let left = shape_of(OPERATION, a)?;
    let right = shape_of(OPERATION, b)?;
    if left.cols != right.rows || left.rows != M || right.cols != N {
        return Err(MatrixError::Dimension {
            operation: OPERATION,
            left,
            right,
        });
    }

    let mut result = [[T::zero(); N]; M];
    for (row_a, row_out) in a.iter().zip(result.iter_mut()) {
        let row_a = row_a.as_ref();
        for (j, out) in row_out.iter_mut().enumerate() {
            *out = row_a
                .iter()
                .zip(b.iter())
                .fold(T::zero(), |acc, (&lhs, row_b)| acc + lhs * row_b.as_ref()[j]);
        }
    }
    Ok(result)
}

/// Calculates the element-wise sum `A + B`.
///
/// ## Errors
/// [`MatrixError::Dimension`] if the shapes of `A`, `B` and the result differ.
pub fn add<T, A, B, const M: usize, const N: usize>(
    a: &[A],
    b: &[B],
) -> Result<[[T; N]; M], MatrixError>
where
    T: Copy + Zero + Add<Output = T>,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    elementwise("add", a, b, |lhs, rhs| lhs + rhs)
}

/// Calculates the element-wise difference `A − B`.
///
/// ## Errors
/// [`MatrixError::Dimension`] if the shapes of `A`, `B` and the result differ.
pub fn subtract<T, A, B, const M: usize, const N: usize>(
    a: &[A],
    b: &[B],
) -> Result<[[T; N]; M], MatrixError>
where
    T: Copy + Zero + Sub<Output = T>,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    elementwise("subtract", a, b, |lhs, rhs| lhs - rhs)
}

/// Returns `Aᵀ` as an `M`×`N` matrix, i.e. `A` must be `N`×`M`.
///
/// ## Errors
/// [`MatrixError::Dimension`] if `A` is ragged or the result shape does not match.
pub fn transpose<T, A, const M: usize, const N: usize>(a: &[A]) -> Result<[[T; N]; M], MatrixError>
where
    T: Copy + Zero,
    A: AsRef<[T]>,
{
    expect_shape("transpose", a, Shape::new(N, M))?;

    let mut result = [[T::zero(); N]; M];
    for (i, row) in a.iter().enumerate() {
        for (j, &value) in row.as_ref().iter().enumerate() {
            result[j][i] = value;
        }
    }
    Ok(result)
}

fn elementwise<T, A, B, F, const M: usize, const N: usize>(
    operation: &'static str,
    a: &[A],
    b: &[B],
    op: F,
) -> Result<[[T; N]; M], MatrixError>
where
    T: Copy + Zero,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
    F: Fn(T, T) -> T,
{
    let left = shape_of(operation, a)?;
    let right = shape_of(operation, b)?;
    if left != right {
        return Err(MatrixError::Dimension {
            operation,
            left,
            right,
        });
    }
    expect_shape(operation, a, Shape::new(M, N))?;

    let mut result = [[T::zero(); N]; M];
    for ((row_a, row_b), row_out) in a.iter().zip(b.iter()).zip(result.iter_mut()) {
        for ((&lhs, &rhs), out) in row_a.as_ref().iter().zip(row_b.as_ref()).zip(row_out.iter_mut()) {
            *out = op(lhs, rhs);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    const A: [[f64; 2]; 2] = [[1.0, 2.0], [3.0, 4.0]];
    const B: [[f64; 2]; 2] = [[5.0, 6.0], [7.0, 8.0]];

    #[test]
    fn test_multiply() {
        let result: [[f64; 2]; 2] = multiply(&A, &B).unwrap();
        assert_eq!(result, [[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_multiply_rectangular() {
        let row = [[1.0, 2.0, 3.0]];
        let col = [[4.0], [5.0], [6.0]];

        let inner: [[f64; 1]; 1] = multiply(&row, &col).unwrap();
        assert_eq!(inner, [[32.0]]);

        let outer: [[f64; 3]; 3] = multiply(&col, &row).unwrap();
        assert_eq!(outer[2], [6.0, 12.0, 18.0]);
    }

    #[test]
    fn test_multiply_incompatible() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let result: Result<[[f64; 2]; 2], _> = multiply(&a, &B);
        assert_eq!(
            result,
            Err(MatrixError::Dimension {
                operation: "multiply",
                left: Shape::new(2, 3),
                right: Shape::new(2, 2),
            })
        );
    }

    #[test]
    fn test_multiply_accepts_nested_vectors() {
        let a: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let result: [[f64; 2]; 2] = multiply(&a, &B).unwrap();
        assert_eq!(result, [[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_add() {
        let result: [[f64; 2]; 2] = add(&A, &B).unwrap();
        assert_eq!(result, [[6.0, 8.0], [10.0, 12.0]]);
    }

    #[test]
    fn test_subtract() {
        let result: [[f64; 2]; 2] = subtract(&A, &B).unwrap();
        assert_eq!(result, [[-4.0, -4.0], [-4.0, -4.0]]);
    }

    #[test]
    fn test_add_incompatible() {
        let c = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let result: Result<[[f64; 2]; 2], _> = add(&A, &c);
        assert!(matches!(
            result,
            Err(MatrixError::Dimension {
                operation: "add",
                ..
            })
        ));

        let result: Result<[[f64; 2]; 2], _> = subtract(&c, &A);
        assert!(matches!(
            result,
            Err(MatrixError::Dimension {
                operation: "subtract",
                ..
            })
        ));
    }

    #[test]
    fn test_transpose() {
        let a = [[1.0, 2.0, 3.0, 4.0], [0.0, 1.0, 2.0, 3.0]];
        let result: [[f64; 2]; 4] = transpose(&a).unwrap();
        assert_eq!(result, [[1.0, 0.0], [2.0, 1.0], [3.0, 2.0], [4.0, 3.0]]);
    }

    #[test]
    fn test_transpose_wrong_target_shape() {
        let a = [[1.0, 2.0, 3.0, 4.0], [0.0, 1.0, 2.0, 3.0]];
        let result: Result<[[f64; 4]; 2], _> = transpose(&a);
        assert!(result.is_err());
    }

    #[test]
    fn test_identity() {
        let eye: [[f64; 3]; 3] = identity();
        assert_eq!(eye, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

        let product: [[f64; 2]; 2] = multiply(&A, &identity::<f64, 2>()).unwrap();
        assert_eq!(product, A);
    }
}
