// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sampling axes and rectangular grids.

use crate::error::{ModeError, ModeResult};
use ndarray::{Array1, Array2};

/// `lo, lo + step, …` strictly below `hi`.
pub fn arange(lo: f64, hi: f64, step: f64) -> ModeResult<Array1<f64>> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(ModeError::InvalidInput(format!("step must be positive, got {}", step)));
    }
    if !(hi > lo) {
        return Err(ModeError::InvalidInput(format!(
            "empty axis: [{}, {}) with step {}",
            lo, hi, step
        )));
    }
    let len = ((hi - lo) / step).ceil() as usize;
    Ok(Array1::from_shape_fn(len, |i| lo + i as f64 * step))
}

/// `n` evenly spaced points from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> ModeResult<Array1<f64>> {
    if n == 0 {
        return Err(ModeError::InvalidInput("linspace needs at least one point".to_string()));
    }
    Ok(Array1::linspace(lo, hi, n))
}

/// `n` points spaced evenly in log10 from `10^lo_exp` to `10^hi_exp`.
pub fn logspace(lo_exp: f64, hi_exp: f64, n: usize) -> ModeResult<Array1<f64>> {
    Ok(linspace(lo_exp, hi_exp, n)?.mapv(|e| 10f64.powf(e)))
}

/// A rectangular grid given by its x and y axes.
///
/// Fields sampled on a grid have shape `(ny, nx)`: rows follow y, columns
/// follow x.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Grid {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> ModeResult<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(ModeError::InvalidInput("grid axes must be non-empty".to_string()));
        }
        Ok(Self { x, y })
    }

    /// Square grid with the same `arange` axis in x and y.
    pub fn arange(lo: f64, hi: f64, step: f64) -> ModeResult<Self> {
        let axis = arange(lo, hi, step)?;
        Self::new(axis.clone(), axis)
    }

    /// Square grid with the same `linspace` axis in x and y.
    pub fn linspace(lo: f64, hi: f64, n: usize) -> ModeResult<Self> {
        let axis = linspace(lo, hi, n)?;
        Self::new(axis.clone(), axis)
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    /// Coordinate arrays `(X, Y)`, each of shape `(ny, nx)`.
    pub fn meshgrid(&self) -> (Array2<f64>, Array2<f64>) {
        let xs = Array2::from_shape_fn(self.shape(), |(_, j)| self.x[j]);
        let ys = Array2::from_shape_fn(self.shape(), |(i, _)| self.y[i]);
        (xs, ys)
    }

    /// Sample `f(x, y)` at every grid point.
    pub fn sample<F: Fn(f64, f64) -> f64>(&self, f: F) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(i, j)| f(self.x[j], self.y[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arange_is_half_open() {
        let axis = arange(-1.0, 1.0, 0.5).unwrap();
        assert_eq!(axis.len(), 4);
        assert_abs_diff_eq!(axis[0], -1.0);
        assert_abs_diff_eq!(axis[3], 0.5);
    }

    #[test]
    fn test_script_grid_size() {
        let grid = Grid::arange(-1.0, 1.0, 0.005).unwrap();
        assert_eq!(grid.shape(), (400, 400));
    }

    #[test]
    fn test_bad_axes_rejected() {
        assert!(arange(0.0, 1.0, 0.0).is_err());
        assert!(arange(1.0, 0.0, 0.1).is_err());
        assert!(linspace(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_logspace_endpoints() {
        let omega = logspace(1.0, 6.0, 6).unwrap();
        assert_abs_diff_eq!(omega[0], 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(omega[5], 1e6, epsilon = 1e-3);
    }

    #[test]
    fn test_meshgrid_orientation() {
        let grid = Grid::new(
            Array1::from(vec![0.0, 1.0, 2.0]),
            Array1::from(vec![10.0, 20.0]),
        )
        .unwrap();
        let (xs, ys) = grid.meshgrid();
        assert_eq!(xs.dim(), (2, 3));
        assert_eq!(xs[[1, 2]], 2.0);
        assert_eq!(ys[[1, 2]], 20.0);
    }
}
