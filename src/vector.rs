//! # Bounds-checked dense vector
//!
//! Wrapping a `Vec` such that its size is validated at creation and every
//! element access is checked. Values have deep-copy semantics: cloning or
//! assigning never shares storage with the source.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::zip_eq;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Largest permissible vector length, checked by every constructor.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation;
/// only a whole-value assignment (`clone_from`) may change it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vector<F> {
    data: Vec<F>,
}

impl<F: Zero + Clone> Vector<F> {
    /// Create a zero-filled vector of the given length.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Return value
    ///
    /// A `Vector` with `len` elements equal to `F::zero()`, or
    /// `Error::InvalidSize` when `len` exceeds [`MAX_VECTOR_SIZE`]. Nothing
    /// is allocated on failure.
    pub fn new(len: usize) -> Result<Self> {
        Self::constant(F::zero(), len)
    }
}

impl<F: Clone> Vector<F> {
    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Return value
    ///
    /// A constant `Vector`, or `Error::InvalidSize` when `len` exceeds
    /// [`MAX_VECTOR_SIZE`].
    pub fn constant(value: F, len: usize) -> Result<Self> {
        if len > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { requested: len, max: MAX_VECTOR_SIZE });
        }

        Ok(Self { data: vec![value; len] })
    }
}

impl<F> Vector<F> {
    /// Create a `Vector` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Will not be changed and directly used
    ///   for creation.
    ///
    /// # Return value
    ///
    /// Input data wrapped inside a vector, or `Error::InvalidSize` when the
    /// data is longer than [`MAX_VECTOR_SIZE`].
    pub fn from_data(data: Vec<F>) -> Result<Self> {
        if data.len() > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { requested: data.len(), max: MAX_VECTOR_SIZE });
        }

        Ok(Self { data })
    }

    /// Retrieve the value at index `i`.
    pub fn get(&self, i: usize) -> Result<&F> {
        self.check_index(i)?;

        Ok(&self.data[i])
    }

    /// Retrieve the value at index `i` for modification.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut F> {
        self.check_index(i)?;

        Ok(&mut self.data[i])
    }

    /// Set the value at index `i` to `value`.
    ///
    /// Fails with `Error::IndexOutOfRange` without writing anything when `i`
    /// is out of range.
    pub fn set_value(&mut self, i: usize, value: F) -> Result<()> {
        self.check_index(i)?;

        self.data[i] = value;
        Ok(())
    }

    /// Iterate over the values of this vector.
    pub fn iter_values(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.data.len() {
            return Err(Error::IndexOutOfRange { index: i, len: self.data.len() });
        }

        Ok(())
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(Error::SizeMismatch { left: self.data.len(), right: other.data.len() });
        }

        Ok(())
    }
}

impl<F> Vector<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    /// Elementwise sum of two vectors of equal length.
    ///
    /// # Return value
    ///
    /// A new `Vector` with element `i` equal to `self[i] + other[i]`, or
    /// `Error::SizeMismatch` when the lengths differ. Neither operand is
    /// modified in either case.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;

        Ok(Self {
            data: zip_eq(&self.data, &other.data).map(|(x, y)| x + y).collect(),
        })
    }
}

impl<F> Vector<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    /// Elementwise difference of two vectors of equal length.
    ///
    /// # Return value
    ///
    /// A new `Vector` with element `i` equal to `self[i] - other[i]`, or
    /// `Error::SizeMismatch` when the lengths differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;

        Ok(Self {
            data: zip_eq(&self.data, &other.data).map(|(x, y)| x - y).collect(),
        })
    }
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Vector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<F> Add for &Vector<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    type Output = Vector<F>;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> Sub for &Vector<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    type Output = Vector<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: fmt::Display> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::vector::{MAX_VECTOR_SIZE, Vector};

    fn get_test_vector() -> Vector<i32> {
        Vector::from_data(vec![0, 5, 6]).unwrap()
    }

    #[test]
    fn can_create_vector_with_positive_length() {
        let v = Vector::<i32>::new(5).unwrap();
        assert_eq!(v.len(), 5);
        assert!(v.iter_values().all(|&x| x == 0));
    }

    #[test]
    fn can_create_vector_with_zero_length() {
        let v = Vector::<i32>::new(0).unwrap();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn cant_create_too_large_vector() {
        let result = Vector::<i32>::new(MAX_VECTOR_SIZE + 1);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidSize { requested: MAX_VECTOR_SIZE + 1, max: MAX_VECTOR_SIZE },
        );
    }

    #[test]
    fn constant_fills_every_element() {
        let v = Vector::constant(7, 4).unwrap();
        assert_eq!(v.len(), 4);
        assert!(v.iter_values().all(|&x| x == 7));
    }

    #[test]
    fn copied_vector_is_equal_to_source_one() {
        let v = get_test_vector();
        let copy = v.clone();
        assert_eq!(copy, v);
    }

    #[test]
    fn copied_vector_has_its_own_memory() {
        let v = get_test_vector();
        let mut copy = v.clone();
        copy.set_value(1, 100).unwrap();
        assert_eq!(v.get(1), Ok(&5));
        assert_eq!(copy.get(1), Ok(&100));
    }

    #[test]
    fn can_set_and_get_element() {
        let mut v = Vector::<i32>::new(3).unwrap();
        v.set_value(2, 9).unwrap();
        assert_eq!(v.get(2), Ok(&9));
        assert_eq!(v[2], 9);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut v = get_test_vector();
        *v.get_mut(0).unwrap() += 8;
        assert_eq!(v[0], 8);
    }

    #[test]
    fn cant_get_element_with_too_large_index() {
        let v = get_test_vector();
        assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn failing_set_writes_nothing() {
        let mut v = get_test_vector();
        let before = v.clone();
        assert!(v.set_value(400, 1).is_err());
        assert_eq!(v, before);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_index() {
        let v = get_test_vector();
        let _ = v[400];
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_index_mut() {
        let mut v = get_test_vector();
        v[400] = 45;
    }

    #[test]
    fn assignment_changes_length() {
        let source = get_test_vector();
        let mut target = Vector::<i32>::new(7).unwrap();
        target.clone_from(&source);
        assert_eq!(target.len(), source.len());
        assert_eq!(target, source);
    }

    #[test]
    fn assignment_between_equal_lengths() {
        let source = get_test_vector();
        let mut target = Vector::<i32>::new(3).unwrap();
        target.clone_from(&source);
        assert_eq!(target, source);
    }

    #[test]
    fn equality_is_reflexive() {
        let v = get_test_vector();
        assert_eq!(v, v);
    }

    #[test]
    fn vectors_with_different_length_are_not_equal() {
        let v = Vector::<i32>::new(3).unwrap();
        let w = Vector::<i32>::new(4).unwrap();
        assert_ne!(v, w);
    }

    #[test]
    fn can_add_vectors_with_equal_length() {
        let v = get_test_vector();
        let w = Vector::from_data(vec![1, 2, 3]).unwrap();
        let sum = v.checked_add(&w).unwrap();
        assert_eq!(sum, Vector::from_data(vec![1, 7, 9]).unwrap());
        assert_eq!(&v + &w, sum);
    }

    #[test]
    fn can_subtract_vectors_with_equal_length() {
        let v = get_test_vector();
        let w = Vector::from_data(vec![1, 2, 3]).unwrap();
        let difference = v.checked_sub(&w).unwrap();
        assert_eq!(difference, Vector::from_data(vec![-1, 3, 3]).unwrap());
        assert_eq!(&v - &w, difference);
    }

    #[test]
    fn cant_add_vectors_with_not_equal_length() {
        let v = Vector::<i32>::new(3).unwrap();
        let w = Vector::<i32>::new(4).unwrap();
        assert_eq!(
            v.checked_add(&w),
            Err(Error::SizeMismatch { left: 3, right: 4 }),
        );
        assert_eq!(
            w.checked_sub(&v),
            Err(Error::SizeMismatch { left: 4, right: 3 }),
        );
    }

    #[test]
    #[should_panic]
    fn add_operator_panics_on_mismatch() {
        let v = Vector::<i32>::new(3).unwrap();
        let w = Vector::<i32>::new(4).unwrap();
        let _ = &v + &w;
    }

    #[test]
    fn failing_arithmetic_leaves_operands_unchanged() {
        let v = get_test_vector();
        let w = Vector::<i32>::new(4).unwrap();
        let (v_before, w_before) = (v.clone(), w.clone());
        assert!(v.checked_add(&w).is_err());
        assert_eq!(v, v_before);
        assert_eq!(w, w_before);
    }

    #[test]
    fn arithmetic_between_empty_vectors() {
        let v = Vector::<i32>::new(0).unwrap();
        let w = Vector::<i32>::new(0).unwrap();
        assert_eq!(v.checked_add(&w).unwrap().len(), 0);
    }
}
