use std::{array, fmt, ops::Neg};

use itertools::Itertools;
use num_traits::AsPrimitive;

use crate::{
    error::{Error, Result},
    traits::{Number, One, Trig, Zero},
    vector::Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat2I = Mat2<i32>;
pub type Mat2F = Mat2<f32>;
pub type Mat2D = Mat2<f64>;
pub type Mat3F = Mat3<f32>;
pub type Mat3D = Mat3<f64>;
pub type Mat4F = Mat4<f32>;
pub type Mat4D = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills the matrix from an array of rows (arrays or [`Vector`]s).
/// - [`Matrix::try_from_rows`] does the same for runtime-sized nested slices, and rejects them if
///   their shape is not `R`x`C`.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - Square matrices can be created with [`Matrix::scale`] and [`Matrix::identity`], and 2x2
///   matrices with [`Matrix::rotation`] and [`Matrix::flip_y`].
///
/// [`Matrix::ZERO`] and, for square matrices, [`Matrix::IDENTITY`] are available as constants.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indices are 0-based.
///
/// ```
/// # use fixmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices. [`Matrix::get`] returns an
/// [`Error::OutOfRange`] instead.
///
/// # Multiplication
///
/// Multiplying a matrix with a column vector works across element types, following the same
/// [`Promote`][crate::Promote] rule as vector arithmetic. The vector must have exactly `C`
/// elements, which the compiler checks:
///
/// ```
/// # use fixmath::*;
/// let mat = Matrix::from_rows([
///     [1, 2],
///     [3, 4],
///     [5, 6],
/// ]);
/// assert_eq!(mat * vec2(1.0, 0.5), vec3(2.0, 5.0, 8.0));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix, with 1 on its diagonal and 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Matrix::from_rows([
    ///     vec3(1, 2, 3),
    ///     vec3(4, 5, 6),
    /// ]);
    /// assert_eq!(mat.row(1)?, vec3(4, 5, 6));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a list of rows whose shape is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowCountMismatch`] if `rows` does not contain `R` rows, and
    /// [`Error::ShapeMismatch`] if any row does not contain `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Mat2I::try_from_rows(&[&[1, 2], &[3, 4]])?;
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    ///
    /// assert!(Mat2I::try_from_rows(&[&[1, 2]]).is_err());
    /// assert!(Mat2I::try_from_rows(&[&[1, 2], &[3]]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_from_rows(rows: &[&[T]]) -> Result<Self>
    where
        T: Copy,
    {
        if rows.len() != R {
            log::trace!("rejecting {} rows for a {R}x{C} matrix", rows.len());
            return Err(Error::RowCountMismatch {
                expected: R,
                actual: rows.len(),
            });
        }
        if let Some((row, elems)) = rows.iter().find_position(|elems| elems.len() != C) {
            log::trace!(
                "rejecting row {row} with {} elements for a {R}x{C} matrix",
                elems.len()
            );
            return Err(Error::ShapeMismatch {
                rows: R,
                cols: C,
                row,
                len: elems.len(),
            });
        }

        Ok(Self::from_fn(|row, col| rows[row][col]))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts each element to `U` with `as`-cast semantics.
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for the first of `row` and `col` that is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Ok(&0));
    /// assert_eq!(mat.get(1, 0), Ok(&3));
    /// assert_eq!(mat.get(2, 0), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// assert_eq!(mat.get(0, 3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let elems = self.0.get(row).ok_or_else(|| out_of_range(row, R))?;
        elems.get(col).ok_or_else(|| out_of_range(col, C))
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for the first of `row` and `col` that is out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let elems = self.0.get_mut(row).ok_or_else(|| out_of_range(row, R))?;
        elems.get_mut(col).ok_or_else(|| out_of_range(col, C))
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than `R`.
    pub fn row(&self, index: usize) -> Result<Vector<T, C>>
    where
        T: Copy,
    {
        self.0
            .get(index)
            .map(|&row| Vector::new(row))
            .ok_or_else(|| out_of_range(index, R))
    }

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than `C`.
    pub fn column(&self, index: usize) -> Result<Vector<T, R>>
    where
        T: Copy,
    {
        if index >= C {
            return Err(out_of_range(index, C));
        }
        Ok(Vector::from_fn(|row| self.0[row][index]))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }
}

impl<T: Zero + Copy, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix with `factor` on its diagonal and 0 everywhere else.
    ///
    /// Multiplying a vector with it scales the vector by `factor`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mat = Mat3::scale(2.0);
    /// assert_eq!(mat * vec3(1, 2, 3), vec3(2.0, 4.0, 6.0));
    /// ```
    pub fn scale(factor: T) -> Self {
        Self::from_fn(|row, col| if row == col { factor } else { T::ZERO })
    }

    /// Returns the identity matrix, which leaves vectors unchanged when multiplied with them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = vec4(3, 1, 4, 1);
    /// assert_eq!(Mat4::<i32>::identity() * v, v);
    /// ```
    pub fn identity() -> Self
    where
        T: One,
    {
        Self::scale(T::ONE)
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns a matrix that mirrors vectors along the X axis by negating their Y coordinate.
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(Mat2I::flip_y() * vec2(3, 4), vec2(3, -4));
    /// ```
    pub fn flip_y() -> Self
    where
        T: Neg<Output = T>,
    {
        Self([[T::ONE, T::ZERO], [T::ZERO, -T::ONE]])
    }

    /// Creates a 2D rotation matrix that rotates vectors counterclockwise by `radians`, assuming
    /// the Y axis points up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let rot = Mat2D::rotation(PI_2);
    /// assert_abs_diff_eq!(rot * vec2(1, 0), vec2(0.0, 1.0), epsilon = 1e-12);
    /// ```
    pub fn rotation(radians: T) -> Self
    where
        T: Trig + Neg<Output = T>,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self([[cos, -sin], [sin, cos]])
    }
}

fn out_of_range(index: usize, len: usize) -> Error {
    log::trace!("matrix index {index} out of range for dimension {len}");
    Error::OutOfRange { index, len }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// One bracketed row per line, eg. `[1, 0]\n[0, 1]`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            fmt::Display::fmt(&row.iter().format(", "), f)?;
            write!(f, "]")?;
        }
        Ok(())
    }
}
