// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Radial sinc surface `sin(r) / r`.

use crate::field::Grid;
use ndarray::Array2;

/// `sin(r) / r`, continuous at the origin.
pub fn radial_sinc(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    if r == 0.0 {
        1.0
    } else {
        r.sin() / r
    }
}

pub fn sinc_surface(grid: &Grid) -> Array2<f64> {
    grid.sample(radial_sinc)
}
