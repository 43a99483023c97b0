//! Radial projection of scalar fields into quiver vector components.
//!
//! `U = s_u * x / r`, `V = s_v * y / r`, with `r = sqrt(x² + y² + ε)`.
//! The epsilon inside the square root keeps the origin cell finite; without
//! it a grid containing (0, 0) produces 0/0. The guard is applied
//! unconditionally.

use crate::error::FieldError;
use crate::grid::Grid;
use crate::scalar::ScalarGrid;

/// Epsilon added under the square root of the radial denominator.
pub const RADIAL_EPS: f64 = 1e-6;

/// Vector field over a grid: U (horizontal) and V (vertical) components.
#[derive(Debug, Clone)]
pub struct VectorGrid {
    u: ScalarGrid,
    v: ScalarGrid,
}

impl VectorGrid {
    /// U component, same shape as the grid.
    pub fn u(&self) -> &ScalarGrid {
        &self.u
    }

    /// V component, same shape as the grid.
    pub fn v(&self) -> &ScalarGrid {
        &self.v
    }

    /// True when every component value is finite.
    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}

/// Projects two scalar fields onto the radial direction at every grid cell.
///
/// `u_source` scales the x/r direction, `v_source` the y/r direction. For a
/// single-field sampler pass the same field twice. Returns
/// `FieldError::ShapeMismatch` if either source does not match the grid.
pub fn radial_projection(
    grid: &Grid,
    u_source: &ScalarGrid,
    v_source: &ScalarGrid,
) -> Result<VectorGrid, FieldError> {
    for f in [u_source, v_source] {
        if f.width() != grid.width() || f.height() != grid.height() {
            return Err(FieldError::ShapeMismatch {
                lhs_w: f.width(),
                lhs_h: f.height(),
                rhs_w: grid.width(),
                rhs_h: grid.height(),
            });
        }
    }

    let len = grid.len();
    let mut u = Vec::with_capacity(len);
    let mut v = Vec::with_capacity(len);
    for (i, (x, y)) in grid.iter().enumerate() {
        let r = (x * x + y * y + RADIAL_EPS).sqrt();
        u.push(u_source.get(i) * x / r);
        v.push(v_source.get(i) * y / r);
    }

    Ok(VectorGrid {
        u: ScalarGrid::from_data(grid.width(), grid.height(), u)?,
        v: ScalarGrid::from_data(grid.width(), grid.height(), v)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(grid: &Grid) -> ScalarGrid {
        ScalarGrid::from_data(grid.width(), grid.height(), vec![1.0; grid.len()]).unwrap()
    }

    #[test]
    fn projection_matches_grid_shape() {
        let grid = Grid::centered(7, 5, 5.0).unwrap();
        let field = ones(&grid);
        let vec = radial_projection(&grid, &field, &field).unwrap();
        assert_eq!(vec.u().width(), 7);
        assert_eq!(vec.u().height(), 5);
        assert_eq!(vec.v().width(), 7);
        assert_eq!(vec.v().height(), 5);
    }

    #[test]
    fn origin_cell_is_finite() {
        // 5x5 grid has a sample at exactly (0, 0); 0/0 without the guard.
        let grid = Grid::centered(5, 5, 5.0).unwrap();
        let field = ones(&grid);
        let vec = radial_projection(&grid, &field, &field).unwrap();
        let origin = grid.origin_index().unwrap();
        assert!(vec.u().get(origin).is_finite());
        assert!(vec.v().get(origin).is_finite());
        assert!(vec.is_finite());
    }

    #[test]
    fn origin_cell_is_near_zero() {
        // x/r and y/r both vanish at the origin; the guard only bounds r away
        // from zero, so U and V there must be ~0, not just finite.
        let grid = Grid::centered(5, 5, 5.0).unwrap();
        let field = ones(&grid);
        let vec = radial_projection(&grid, &field, &field).unwrap();
        let origin = grid.origin_index().unwrap();
        assert!(vec.u().get(origin).abs() < 1e-9);
        assert!(vec.v().get(origin).abs() < 1e-9);
    }

    #[test]
    fn vectors_point_radially_outward_for_positive_field() {
        let grid = Grid::centered(5, 5, 5.0).unwrap();
        let field = ones(&grid);
        let vec = radial_projection(&grid, &field, &field).unwrap();
        for (i, (x, y)) in grid.iter().enumerate() {
            // (U, V) · (x, y) = field * (x² + y²) / r >= 0
            let dot = vec.u().get(i) * x + vec.v().get(i) * y;
            assert!(dot >= 0.0, "inward vector at ({x}, {y}): dot = {dot}");
        }
    }

    #[test]
    fn negative_field_points_inward() {
        let grid = Grid::centered(5, 5, 5.0).unwrap();
        let field =
            ScalarGrid::from_data(grid.width(), grid.height(), vec![-1.0; grid.len()]).unwrap();
        let vec = radial_projection(&grid, &field, &field).unwrap();
        // Off-origin cell: (1, 0) direction flipped
        let i = 13; // row 2, col 3 of 5x5 => (2.5, 0.0)
        assert!(vec.u().get(i) < 0.0);
    }

    #[test]
    fn mismatched_source_shape_is_rejected() {
        let grid = Grid::centered(4, 4, 5.0).unwrap();
        let bad = ScalarGrid::new(3, 3).unwrap();
        let good = ones(&grid);
        assert!(radial_projection(&grid, &bad, &good).is_err());
        assert!(radial_projection(&grid, &good, &bad).is_err());
    }

    #[test]
    fn independent_sources_drive_independent_components() {
        let grid = Grid::centered(3, 3, 1.0).unwrap();
        let u_src = ScalarGrid::from_data(3, 3, vec![2.0; 9]).unwrap();
        let v_src = ScalarGrid::from_data(3, 3, vec![0.0; 9]).unwrap();
        let vec = radial_projection(&grid, &u_src, &v_src).unwrap();
        assert!(vec.u().data().iter().any(|&u| u != 0.0));
        assert!(vec.v().data().iter().all(|&v| v == 0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn projection_always_finite(
                w in 1_usize..=32,
                h in 1_usize..=32,
                half in 0.1_f64..50.0,
                value in -10.0_f64..10.0,
            ) {
                let grid = Grid::centered(w, h, half).unwrap();
                let field =
                    ScalarGrid::from_data(w, h, vec![value; grid.len()]).unwrap();
                let vec = radial_projection(&grid, &field, &field).unwrap();
                prop_assert!(vec.is_finite());
            }

            #[test]
            fn magnitude_never_exceeds_source(
                w in 1_usize..=16,
                h in 1_usize..=16,
                half in 0.1_f64..50.0,
                value in -10.0_f64..10.0,
            ) {
                // |x| / r <= 1, so |U| <= |field| everywhere.
                let grid = Grid::centered(w, h, half).unwrap();
                let field =
                    ScalarGrid::from_data(w, h, vec![value; grid.len()]).unwrap();
                let vec = radial_projection(&grid, &field, &field).unwrap();
                for &u in vec.u().data() {
                    prop_assert!(u.abs() <= value.abs() + 1e-12);
                }
                for &v in vec.v().data() {
                    prop_assert!(v.abs() <= value.abs() + 1e-12);
                }
            }
        }
    }
}
