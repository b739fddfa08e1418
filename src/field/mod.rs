// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Field evaluation for mode descriptors.
//!
//! A descriptor `(pairs, signs)` is the field
//!
//! ```text
//! f(x, y) = Σ signs[i] · basis(x, n_i) · basis(y, m_i)
//! ```
//!
//! sampled over a [`Grid`]. The basis alternates between cosine (even
//! order) and sine (odd order), so every term vanishes or peaks on the
//! boundary of the square `[-1, 1]²` as its parity dictates.

pub mod grid;

pub use grid::{arange, linspace, logspace, Grid};

use crate::error::{ModeError, ModeResult};
use crate::sos::{Pair, SignAssignment};
use ndarray::{Array1, Array2};
use std::f64::consts::FRAC_PI_2;

/// `cos(jπv/2)` for even `j`, `sin(jπv/2)` for odd `j`.
#[inline]
pub fn basis(v: f64, j: u32) -> f64 {
    let phase = j as f64 * FRAC_PI_2 * v;
    if j % 2 == 0 {
        phase.cos()
    } else {
        phase.sin()
    }
}

fn basis_axis(axis: &Array1<f64>, j: u32) -> Array1<f64> {
    axis.mapv(|v| basis(v, j))
}

/// Sample a signed combination of separable modes over `grid`.
///
/// Returns an array of shape `(ny, nx)`. Each term is an outer product of
/// two per-axis basis vectors.
///
/// # Examples
///
/// ```
/// use mode_search::field::{evaluate_mode, Grid};
/// use mode_search::sos::{Pair, SignAssignment};
///
/// let grid = Grid::linspace(-1.0, 1.0, 5).unwrap();
/// let pairs = [Pair::new(0, 0)];
/// let field = evaluate_mode(&grid, &pairs, SignAssignment::positive(1).unwrap()).unwrap();
/// assert!(field.iter().all(|&v| v == 1.0));
/// ```
pub fn evaluate_mode(grid: &Grid, pairs: &[Pair], signs: SignAssignment) -> ModeResult<Array2<f64>> {
    if pairs.len() != signs.len() {
        return Err(ModeError::InvalidInput(format!(
            "{} pairs but {} signs",
            pairs.len(),
            signs.len()
        )));
    }
    let mut field = Array2::zeros(grid.shape());
    for (pair, sign) in pairs.iter().zip(signs.iter()) {
        let bx = basis_axis(grid.x(), pair.n);
        let by = basis_axis(grid.y(), pair.m);
        // rows follow y
        let term = by.insert_axis(ndarray::Axis(1)).dot(&bx.insert_axis(ndarray::Axis(0)));
        field.scaled_add(sign.as_f64(), &term);
    }
    Ok(field)
}
