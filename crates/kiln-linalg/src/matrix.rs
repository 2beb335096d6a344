use std::{
    array, fmt,
    mem::ManuallyDrop,
    ops::{AddAssign, SubAssign},
};

use num_traits::AsPrimitive;

use crate::{One, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 columns and 3 rows.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 columns and 4 rows.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 columns and 2 rows.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 columns and 4 rows.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 columns and 2 rows.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 columns and 3 rows.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `C` columns of `R` rows each, and element type `T`.
///
/// Note the order of the dimensions: like the `MatCxR` aliases, the column count comes first.
///
/// # Construction
///
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] fill a matrix from an array of column or
///   row vectors (or arrays).
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its column and row.
/// - [`Matrix::from_scalar`] puts a value on the diagonal and 0 everywhere else.
///   [`Matrix::from_diagonal`] does the same with a different value per diagonal element.
/// - [`Matrix::resize`] truncates or extends a matrix to a different shape.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] has 1 on its diagonal and 0 everywhere else. This is also defined for
///   non-square matrices, where the diagonal ends at the smaller dimension.
///
/// # Element Access
///
/// Indexing a [`Matrix`] with a `usize` yields a column, so `m[col][row]` addresses an element.
/// Rows are not stored contiguously: [`Matrix::row`] gathers one and [`Matrix::set_row`] scatters
/// one back.
///
/// ```
/// # use kiln_linalg::*;
/// let mut mat = Matrix::from_columns([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[1][0] = 4;
/// assert_eq!(mat.column(1), &vec2(4, 3));
/// assert_eq!(mat.row(0), vec2(0, 4));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Arithmetic
///
/// Every operator except `*` works element-wise, between two matrices of the same shape or between
/// a matrix and a broadcast scalar. `*` between two matrices is the matrix product, and between a
/// matrix and a vector it transforms the vector. Use [`crate::math::compmult`] for the element-wise
/// product.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>(pub(crate) [Vector<T, R>; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable for Matrix<T, C, R> {}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The smallest dimension of the matrix (`C` or `R`).
    const MIN_DIMENSION: usize = if C > R { R } else { C };

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// Anything convertible into a column works, including arrays and vectors of a narrower
    /// element type. Since vectors can be widened into several element types, passing vectors
    /// requires naming the matrix element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Mat3x2::<i32>::from_columns([vec2(1i32, 2), vec2(3, 4), vec2(5, 6)]);
    /// assert_eq!(mat[2], vec2(5, 6));
    ///
    /// let wide = Mat2::<f64>::from_columns([vec2(0.5f32, 1.0), vec2(1.5f32, 2.0)]);
    /// assert_eq!(wide[1], vec2(1.5, 2.0));
    ///
    /// let from_arrays = Matrix::from_columns([[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(from_arrays, mat);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the column and row of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Mat3x2::from_fn(|col, row| col * 10 + row);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 10, 20],
    ///     [1, 11, 21],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(col, row))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Applies a closure to each column, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Mat2::from_columns([[1, 2], [3, 4]]);
    /// let mat = mat.map_columns(|col| col.map(|e| e * 2));
    /// assert_eq!(mat, Mat2::from_columns([[2, 4], [6, 8]]));
    /// ```
    pub fn map_columns<F, U>(self, f: F) -> Matrix<U, C, R>
    where
        F: FnMut(Vector<T, R>) -> Vector<U, R>,
    {
        Matrix(self.0.map(f))
    }

    /// Combines the columns of `self` and `other` pairwise with `f`.
    ///
    /// This is the primitive that every element-wise binary operator on matrices is built on.
    pub fn zip_map_columns<U, V, F>(self, other: Matrix<U, C, R>, f: F) -> Matrix<V, C, R>
    where
        F: FnMut(Vector<T, R>, Vector<U, R>) -> Vector<V, R>,
    {
        Matrix(Vector::from(self.0).zip_map(Vector::from(other.0), f).into_array())
    }

    /// Converts each element to `U` using an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Mat2::from_columns([[1.5, -2.5], [3.0, 4.9]]).cast::<i32>();
    /// assert_eq!(mat, Mat2::from_columns([[1, -2], [3, 4]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map_columns(Vector::cast)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
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
    pub fn transpose(self) -> Matrix<T, R, C> {
        let mut elems = self.0.map(|column| column.0.map(Some));
        Matrix::from_fn(|col, row| elems[row][col].take().unwrap())
    }

    /// Returns a reference to the column at index `col`.
    ///
    /// Same as `&self[col]`.
    #[inline]
    pub fn column(&self, col: usize) -> &Vector<T, R> {
        &self.0[col]
    }

    /// Returns a mutable reference to the column at index `col`.
    #[inline]
    pub fn column_mut(&mut self, col: usize) -> &mut Vector<T, R> {
        &mut self.0[col]
    }

    /// Replaces the column at index `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: Vector<T, R>) {
        self.0[col] = column;
    }

    /// Returns a reference to the array of columns.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Converts this [`Matrix`] into its array of columns.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Gathers the elements of row `row` from every column.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Scatters the elements of `values` into row `row`, one per column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mut mat = Mat2x3::<i32>::ZERO;
    /// mat.set_row(2, vec2(7, 8));
    /// assert_eq!(mat, Mat2x3::from_columns([[0, 0, 7], [0, 0, 8]]));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    pub fn set_row(&mut self, row: usize, values: Vector<T, C>) {
        for (column, value) in self.0.iter_mut().zip(values.0) {
            column[row] = value;
        }
    }

    /// Returns a reference to the element at `(col, row)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(0, 1), Some(&3));
    /// assert_eq!(mat.get(0, 2), None);
    /// ```
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.0.get(col).and_then(|column| column.as_slice().get(row))
    }

    /// Returns a mutable reference to the element at `(col, row)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|column| column.as_mut_slice().get_mut(row))
    }

    /// Unary plus. Returns `self` unchanged.
    #[inline]
    pub fn plus(self) -> Self {
        self
    }

    /// Element-wise logical negation. An element becomes `true` if it equals zero.
    pub fn logical_not(self) -> Matrix<bool, C, R>
    where
        T: Zero + PartialEq,
    {
        self.map_columns(Vector::logical_not)
    }

    /// Adds one to every element, then returns the updated matrix.
    pub fn pre_increment(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        *self += T::ONE;
        *self
    }

    /// Adds one to every element, returning the matrix as it was before.
    pub fn post_increment(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        let old = *self;
        *self += T::ONE;
        old
    }

    /// Subtracts one from every element, then returns the updated matrix.
    pub fn pre_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        *self -= T::ONE;
        *self
    }

    /// Subtracts one from every element, returning the matrix as it was before.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        let old = *self;
        *self -= T::ONE;
        old
    }

    /// Returns a matrix with the contents of `self`, but a potentially different shape.
    ///
    /// Elements not present in `self` are taken from [`Matrix::IDENTITY`], so growing an affine
    /// 3x3 transform to 4x4 keeps it a valid transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<3, 3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(mat.resize::<2, 1>(), Matrix::from_rows([[1, 2]]));
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|col, row| match self.get(col, row) {
            Some(elem) => *elem,
            None if col == row => T::ONE,
            None => T::ZERO,
        })
    }

    /// Returns `self`, but with the element at `(col, row)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, col: usize, row: usize, elem: T) -> Self {
        // Safety: `ManuallyDrop<T>` has the same layout as `T`.
        unsafe {
            union UnWrapper<T, const C: usize, const R: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, C, R>>,
                unwrapped: ManuallyDrop<Matrix<T, C, R>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col].0[row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);

    /// Creates a matrix with `diag` at every `(i, i)` position and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(Mat3::from_scalar(1), Mat3::<i32>::IDENTITY);
    /// assert_eq!(Mat2x3::from_scalar(2.0), Mat2x3::from_columns([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    /// ]));
    /// ```
    pub fn from_scalar(diag: T) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|col, row| if col == row { diag } else { T::ZERO })
    }
}

impl<T: Zero + One, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 at every `(i, i)` position and 0 everywhere else.
    ///
    /// Multiplying any vector with a square identity matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix with the given diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mat = Matrix::from_diagonal([1, 2]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 2],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|col, row| if col == row { diag[col] } else { T::ZERO })
    }
}

impl<T, const C: usize, const R: usize> Default for Matrix<T, C, R>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, U, const C: usize, const R: usize> From<[U; C]> for Matrix<T, C, R>
where
    U: Into<Vector<T, R>>,
{
    fn from(columns: [U; C]) -> Self {
        Self::from_columns(columns)
    }
}

macro_rules! widening_from {
    ($($from:ty => $($to:ty),+;)+) => {
        $($(
            impl<const C: usize, const R: usize> From<Matrix<$from, C, R>> for Matrix<$to, C, R> {
                #[inline]
                fn from(value: Matrix<$from, C, R>) -> Self {
                    value.map_columns(Vector::from)
                }
            }
        )+)+
    };
}

crate::vector::widening_from_table!(widening_from);

/// Prints the matrix row by row, in the order it would be written down.
impl<T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize, const R: usize>(
            &'a Matrix<T, C, R>,
            usize,
        );
        impl<'a, T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for FormatRow<'a, T, C, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                for column in &self.0 .0 {
                    list.entry(&column[self.1]);
                }
                list.finish()
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");

        assert_eq!(
            Mat3x2::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0], [0, 1], [0, 0]])
        );
        assert_eq!(Mat4::<u8>::default(), Mat4::<u8>::ZERO);
    }

    #[test]
    fn rows_and_columns() {
        let mut mat = Mat2x3::from_columns([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.row(0), vec2(1, 4));
        assert_eq!(mat.row(2), vec2(3, 6));
        assert_eq!(mat.column(1), &vec3(4, 5, 6));
        assert_eq!(mat.columns(), &[vec3(1, 2, 3), vec3(4, 5, 6)]);

        mat.set_row(1, vec2(-2, -5));
        assert_eq!(mat[0], vec3(1, -2, 3));
        assert_eq!(mat[1], vec3(4, -5, 6));

        mat.set_column(0, vec3(0, 0, 0));
        mat.column_mut(1).z = 9;
        assert_eq!(mat, Mat2x3::from_columns([[0, 0, 0], [4, -5, 9]]));

        *mat.get_mut(0, 2).unwrap() = 8;
        assert_eq!(mat.get(0, 2), Some(&8));
        assert_eq!(mat.get(2, 0), None);
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 4>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 1],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1],
            [3],
        ]));

        assert_eq!(larger.resize::<2, 2>(), mat);
    }

    #[test]
    fn conversions() {
        let mat = Mat2::from_columns([[1i16, -2], [3, 4]]);
        let wide: Mat2<f32> = mat.into();
        assert_eq!(wide, Mat2::from_columns([[1.0, -2.0], [3.0, 4.0]]));
        assert_eq!(wide.cast::<i16>(), mat);

        let from_array: Mat2<u8> = [[1, 2], [3, 4]].into();
        assert_eq!(from_array[1], vec2(3, 4));

        let widened_columns = Mat2::<i64>::from_columns([vec2(1i32, 2), vec2(3, 4)]);
        assert_eq!(widened_columns, Mat2::from_columns([[1, 2], [3, 4]]));
        let same_columns = Mat2::<i32>::from_columns([vec2(1i32, 2), vec2(3, 4)]);
        assert_eq!(same_columns, Mat2::from_rows([[1, 3], [2, 4]]));
    }

    #[test]
    fn increment_decrement() {
        let mut mat = Mat2::from_rows([[1i32, 2], [3, 4]]);
        assert_eq!(mat.plus(), mat);
        assert_eq!(mat.post_increment(), Mat2::from_rows([[1, 2], [3, 4]]));
        assert_eq!(mat, Mat2::from_rows([[2, 3], [4, 5]]));
        assert_eq!(mat.pre_decrement(), Mat2::from_rows([[1, 2], [3, 4]]));
        assert_eq!(mat.post_decrement(), Mat2::from_rows([[1, 2], [3, 4]]));
        assert_eq!(mat.pre_increment(), Mat2::from_rows([[1, 2], [3, 4]]));
    }

    #[test]
    fn logical_not() {
        let mat = Mat2::from_rows([[0i32, 1], [-1, 0]]);
        assert_eq!(
            mat.logical_not(),
            Mat2::from_rows([[true, false], [false, true]])
        );
        assert_eq!(!mat, Mat2::from_rows([[-1, -2], [0, -1]]));
    }

    #[test]
    fn transpose_twice() {
        let mat = Mat4x2::from_fn(|col, row| (col * 2 + row) as i32);
        assert_eq!(mat.transpose().transpose(), mat);
        assert_eq!(mat.transpose().row(3), mat[3]);
    }
}
