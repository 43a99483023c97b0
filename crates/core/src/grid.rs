//! Immutable 2D coordinate grid over a square domain.
//!
//! A `Grid` holds two row-major arrays of equal shape: the X coordinate and
//! the Y coordinate of every sample point, spaced uniformly over
//! `[-L, L] x [-L, L]`. It is built once at startup and never mutated;
//! every per-frame field is evaluated over the same coordinates.

use crate::error::FieldError;

/// Coordinate grid: X and Y sample positions over `[-half_width, half_width]²`.
///
/// Row-major layout, `width * height` cells. Rows advance along Y, columns
/// along X, matching a meshgrid of two linspaces.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    half_width: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    /// Creates a grid of `width x height` cells centered on the origin,
    /// spanning `[-half_width, half_width]` on both axes.
    ///
    /// Both endpoints are included (linspace semantics); a single-cell axis
    /// collapses to the coordinate `-half_width`.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or `width * height` overflows `usize`.
    pub fn centered(width: usize, height: usize, half_width: f64) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;

        let mut xs = Vec::with_capacity(len);
        let mut ys = Vec::with_capacity(len);
        for row in 0..height {
            let y = linspace_at(-half_width, half_width, height, row);
            for col in 0..width {
                xs.push(linspace_at(-half_width, half_width, width, col));
                ys.push(y);
            }
        }
        Ok(Self {
            width,
            height,
            half_width,
            xs,
            ys,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Half-width `L` of the sampled domain.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// X coordinates, row-major.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y coordinates, row-major.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Coordinate pair at flat index `i`.
    pub fn at(&self, i: usize) -> (f64, f64) {
        (self.xs[i], self.ys[i])
    }

    /// Iterates over all cells yielding `(x, y)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Flat index of the cell nearest the origin, if the grid contains a
    /// cell whose coordinates are exactly (0, 0).
    ///
    /// Odd-sized axes place a sample exactly at 0; even-sized axes straddle
    /// it, in which case this returns `None`.
    pub fn origin_index(&self) -> Option<usize> {
        self.iter().position(|(x, y)| x == 0.0 && y == 0.0)
    }
}

/// Value of `np.linspace(start, stop, n)[i]`: endpoints included, a single
/// sample collapses to `start`.
fn linspace_at(start: f64, stop: f64, n: usize, i: usize) -> f64 {
    if n <= 1 {
        start
    } else {
        start + (stop - start) * i as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_creates_correct_shape() {
        let grid = Grid::centered(100, 100, 5.0).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 100);
        assert_eq!(grid.len(), 10_000);
        assert_eq!(grid.xs().len(), grid.ys().len());
    }

    #[test]
    fn zero_dimension_returns_error() {
        assert!(matches!(
            Grid::centered(0, 10, 5.0),
            Err(FieldError::InvalidDimensions)
        ));
        assert!(matches!(
            Grid::centered(10, 0, 5.0),
            Err(FieldError::InvalidDimensions)
        ));
    }

    #[test]
    fn overflow_dimensions_return_error() {
        assert!(Grid::centered(usize::MAX, 2, 5.0).is_err());
    }

    #[test]
    fn corners_hit_domain_bounds() {
        let grid = Grid::centered(4, 4, 5.0).unwrap();
        assert_eq!(grid.at(0), (-5.0, -5.0));
        assert_eq!(grid.at(3), (5.0, -5.0));
        assert_eq!(grid.at(12), (-5.0, 5.0));
        assert_eq!(grid.at(15), (5.0, 5.0));
    }

    #[test]
    fn x_varies_within_row_y_constant() {
        let grid = Grid::centered(3, 2, 1.0).unwrap();
        // first row: y = -1 throughout, x = -1, 0, 1
        assert_eq!(grid.at(0), (-1.0, -1.0));
        assert_eq!(grid.at(1), (0.0, -1.0));
        assert_eq!(grid.at(2), (1.0, -1.0));
        assert_eq!(grid.at(3), (-1.0, 1.0));
    }

    #[test]
    fn odd_axis_contains_exact_origin() {
        let grid = Grid::centered(5, 5, 5.0).unwrap();
        let idx = grid.origin_index().expect("5x5 grid has a center cell");
        assert_eq!(grid.at(idx), (0.0, 0.0));
        assert_eq!(idx, 12);
    }

    #[test]
    fn even_axis_has_no_exact_origin() {
        let grid = Grid::centered(4, 4, 5.0).unwrap();
        assert!(grid.origin_index().is_none());
    }

    #[test]
    fn single_cell_grid_collapses_to_lower_bound() {
        let grid = Grid::centered(1, 1, 5.0).unwrap();
        assert_eq!(grid.at(0), (-5.0, -5.0));
    }

    #[test]
    fn iter_matches_at() {
        let grid = Grid::centered(3, 3, 2.0).unwrap();
        for (i, (x, y)) in grid.iter().enumerate() {
            assert_eq!((x, y), grid.at(i));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn dimension() -> impl Strategy<Value = usize> {
            1_usize..=64
        }

        proptest! {
            #[test]
            fn coordinates_stay_within_domain(
                w in dimension(),
                h in dimension(),
                half in 0.1_f64..100.0,
            ) {
                let grid = Grid::centered(w, h, half).unwrap();
                for (x, y) in grid.iter() {
                    prop_assert!(x >= -half && x <= half, "x = {x} outside [{}, {half}]", -half);
                    prop_assert!(y >= -half && y <= half, "y = {y} outside [{}, {half}]", -half);
                }
            }

            #[test]
            fn x_is_monotonic_within_each_row(
                w in dimension(),
                h in dimension(),
                half in 0.1_f64..100.0,
            ) {
                let grid = Grid::centered(w, h, half).unwrap();
                for row in 0..h {
                    for col in 1..w {
                        let prev = grid.xs()[row * w + col - 1];
                        let cur = grid.xs()[row * w + col];
                        prop_assert!(cur > prev, "x not increasing at row {row}, col {col}");
                    }
                }
            }
        }
    }
}
