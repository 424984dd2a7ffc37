//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use mobius::float_types::Real;
use mobius::grid::Grid;

/// Tolerance for results that only differ by rounding, scaled to the active
/// precision.
pub const TIGHT: Real = 1e3 * Real::EPSILON;

/// Returns `[min, max]` over all samples of a grid.
pub fn grid_range(grid: &Grid) -> [Real; 2] {
    [grid.min(), grid.max()]
}
