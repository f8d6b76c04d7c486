//! # Upper-triangular matrix
//!
//! A square matrix of dimension `size` that materializes only its upper
//! triangle: row `i` is a [`Vector`] of length `size - i` holding the logical
//! columns `i..size`. Everything below the diagonal does not exist in
//! storage. All matrix operations are expressed in terms of the row vectors.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::zip_eq;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Largest permissible matrix dimension, checked at construction.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Uses a `Vec` of decreasing-length row [`Vector`]s as underlying data
/// structure. The dimension is fixed at creation; only a whole-value
/// assignment (`clone_from`) may change it.
///
/// Logical column `j >= i` of row `i` lives at row-relative offset `j - i`
/// within that row's storage. The row accessors expose the row-relative view;
/// [`TriangularMatrix::element`] does the translation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TriangularMatrix<F> {
    rows: Vec<Vector<F>>,
}

impl<F: Zero + Clone> TriangularMatrix<F> {
    /// Create a zero-filled upper-triangular matrix of the given dimension.
    ///
    /// # Arguments
    ///
    /// * `size`: Dimension of the matrix, which is also the number of rows.
    ///
    /// # Return value
    ///
    /// A `TriangularMatrix` where row `i` has length `size - i`, or
    /// `Error::InvalidSize` when `size` exceeds [`MAX_MATRIX_SIZE`]. Nothing
    /// is allocated on failure.
    pub fn new(size: usize) -> Result<Self> {
        if size > MAX_MATRIX_SIZE {
            return Err(Error::InvalidSize { requested: size, max: MAX_MATRIX_SIZE });
        }

        let rows = (0..size)
            .map(|i| Vector::new(size - i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }
}

impl<F> TriangularMatrix<F> {
    /// The dimension of this matrix, which equals its number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Retrieve row `i`.
    ///
    /// The returned vector is indexed by row-relative offset: its element `k`
    /// is the logical column `i + k`.
    pub fn row(&self, i: usize) -> Result<&Vector<F>> {
        self.check_row(i)?;

        Ok(&self.rows[i])
    }

    /// Retrieve row `i` for modification.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut Vector<F>> {
        self.check_row(i)?;

        Ok(&mut self.rows[i])
    }

    /// Replace row `i` wholesale.
    ///
    /// Like vector assignment this is size-changing: the new row keeps its
    /// own length, which may deviate from the `size - i` pattern the
    /// constructor establishes.
    pub fn set_row(&mut self, i: usize, row: Vector<F>) -> Result<()> {
        self.check_row(i)?;

        self.rows[i] = row;
        Ok(())
    }

    /// Retrieve the element at logical coordinate (`i`, `j`).
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, `i < size`.
    /// * `j`: Logical column index, `i <= j < size`; stored at row-relative
    ///   offset `j - i`.
    ///
    /// A column below the diagonal (`j < i`) falls in the unmaterialized
    /// prefix of the row and is rejected with the diagonal position as the
    /// reported bound; columns past the row's end are reported in
    /// row-relative terms by the row itself.
    pub fn element(&self, i: usize, j: usize) -> Result<&F> {
        self.check_row(i)?;
        if j < i {
            return Err(Error::IndexOutOfRange { index: j, len: i });
        }

        self.rows[i].get(j - i)
    }

    /// Retrieve the element at logical coordinate (`i`, `j`) for
    /// modification.
    pub fn element_mut(&mut self, i: usize, j: usize) -> Result<&mut F> {
        self.check_row(i)?;
        if j < i {
            return Err(Error::IndexOutOfRange { index: j, len: i });
        }

        self.rows[i].get_mut(j - i)
    }

    /// Iterate over the rows of this matrix, from row `0` downward.
    pub fn iter_rows(&self) -> Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.rows.len() {
            return Err(Error::IndexOutOfRange { index: i, len: self.rows.len() });
        }

        Ok(())
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.rows.len() != other.rows.len() {
            return Err(Error::SizeMismatch { left: self.rows.len(), right: other.rows.len() });
        }

        Ok(())
    }
}

impl<F> TriangularMatrix<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    /// Rowwise sum of two matrices of equal dimension.
    ///
    /// # Return value
    ///
    /// A new `TriangularMatrix` whose row `i` is `self.row(i) + other.row(i)`
    /// via [`Vector::checked_add`], or `Error::SizeMismatch` when the
    /// dimensions differ. Neither operand is modified in either case.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;

        Ok(Self {
            rows: zip_eq(&self.rows, &other.rows)
                .map(|(x, y)| x.checked_add(y))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl<F> TriangularMatrix<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    /// Rowwise difference of two matrices of equal dimension.
    ///
    /// # Return value
    ///
    /// A new `TriangularMatrix` whose row `i` is `self.row(i) - other.row(i)`
    /// via [`Vector::checked_sub`], or `Error::SizeMismatch` when the
    /// dimensions differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;

        Ok(Self {
            rows: zip_eq(&self.rows, &other.rows)
                .map(|(x, y)| x.checked_sub(y))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl<F> Index<usize> for TriangularMatrix<F> {
    type Output = Vector<F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<F> IndexMut<usize> for TriangularMatrix<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<F> Add for &TriangularMatrix<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    type Output = TriangularMatrix<F>;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> Sub for &TriangularMatrix<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    type Output = TriangularMatrix<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: fmt::Display> fmt::Display for TriangularMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
