//! Two-dimensional scalar field storage.
//!
//! A `ScalarGrid` stores `width * height` f64 values in row-major layout,
//! always matching the shape of the [`Grid`](crate::grid::Grid) it was
//! sampled over. Values are unclamped: the field functions here range over
//! roughly ±2 and the renderer owns the mapping to a fixed color range.

use crate::error::FieldError;

/// A 2D scalar field with the same shape as the grid it was evaluated on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(FieldError::ShapeMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Value at flat index `i`.
    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    /// Minimum and maximum value, ignoring NaN.
    ///
    /// Returns `(0.0, 0.0)` if every value is NaN.
    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    /// True when every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Checks that another field has the same shape.
    pub fn same_shape(&self, other: &ScalarGrid) -> Result<(), FieldError> {
        if self.width != other.width || self.height != other.height {
            return Err(FieldError::ShapeMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: other.width,
                rhs_h: other.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_zero_filled_field() {
        let field = ScalarGrid::new(4, 3).unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.data().len(), 12);
        assert!(field.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn new_with_zero_dimension_returns_error() {
        assert!(ScalarGrid::new(0, 5).is_err());
        assert!(ScalarGrid::new(5, 0).is_err());
    }

    #[test]
    fn new_with_overflow_dimensions_returns_error() {
        assert!(ScalarGrid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn from_data_creates_field_from_vec() {
        let field = ScalarGrid::from_data(3, 2, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);
        assert_eq!(field.get(4), 0.5);
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        assert!(matches!(
            ScalarGrid::from_data(2, 2, vec![0.1, 0.2, 0.3]),
            Err(FieldError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn from_data_accepts_unclamped_values() {
        // Fields here range over roughly ±2, unlike a [0, 1] intensity field.
        let field = ScalarGrid::from_data(2, 1, vec![-2.0, 1.9]).unwrap();
        assert_eq!(field.get(0), -2.0);
        assert_eq!(field.get(1), 1.9);
    }

    #[test]
    fn min_max_finds_extremes() {
        let field = ScalarGrid::from_data(2, 2, vec![-1.5, 0.0, 2.5, 0.3]).unwrap();
        assert_eq!(field.min_max(), (-1.5, 2.5));
    }

    #[test]
    fn min_max_skips_nan() {
        let field = ScalarGrid::from_data(2, 2, vec![f64::NAN, -1.0, 1.0, f64::NAN]).unwrap();
        assert_eq!(field.min_max(), (-1.0, 1.0));
    }

    #[test]
    fn min_max_all_nan_yields_zero_range() {
        let field = ScalarGrid::from_data(1, 2, vec![f64::NAN, f64::NAN]).unwrap();
        assert_eq!(field.min_max(), (0.0, 0.0));
    }

    #[test]
    fn is_finite_detects_infinity() {
        let good = ScalarGrid::from_data(1, 2, vec![1.0, -2.0]).unwrap();
        let bad = ScalarGrid::from_data(1, 2, vec![1.0, f64::INFINITY]).unwrap();
        assert!(good.is_finite());
        assert!(!bad.is_finite());
    }

    #[test]
    fn same_shape_accepts_matching_and_rejects_mismatched() {
        let a = ScalarGrid::new(3, 2).unwrap();
        let b = ScalarGrid::new(3, 2).unwrap();
        let c = ScalarGrid::new(2, 3).unwrap();
        assert!(a.same_shape(&b).is_ok());
        assert!(matches!(
            a.same_shape(&c),
            Err(FieldError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn data_mut_allows_direct_write() {
        let mut field = ScalarGrid::new(2, 2).unwrap();
        field.data_mut()[3] = 0.42;
        assert_eq!(field.get(3), 0.42);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn min_max_brackets_every_value(
                data in prop::collection::vec(-1e6_f64..1e6, 1..=256),
            ) {
                let n = data.len();
                let field = ScalarGrid::from_data(n, 1, data.clone()).unwrap();
                let (min, max) = field.min_max();
                for v in data {
                    prop_assert!(v >= min && v <= max);
                }
            }
        }
    }
}
