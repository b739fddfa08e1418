// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Free-edge circular membrane modes.
//!
//! Mode `(n, m)` of a plate of radius `a` is
//!
//! ```text
//! u(r, θ) = J_n(z r / a) (a_nm cos nθ + b_nm sin nθ)
//! ```
//!
//! where `z` is the m-th zero of `J_n'` (see
//! [`bessel_derivative_zero`](crate::special::bessel_derivative_zero)) and the
//! coefficients project an initial profile `f(r, θ)` onto the mode.

use crate::error::{ModeError, ModeResult};
use crate::field::linspace;
use crate::special::{bessel_derivative_zero, bessel_j, legendre};
use ndarray::{Array1, Array2};
use std::f64::consts::TAU;

const RADIAL_POINTS: usize = 64;
const ANGULAR_POINTS: usize = 64;

/// The profile the listings project onto: `f(r, θ) = r cos θ`.
pub fn default_profile(r: f64, theta: f64) -> f64 {
    r * theta.cos()
}

/// One projected membrane mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarMode {
    pub n: u32,
    pub m: usize,
    pub radius: f64,
    /// Zero of `J_n'` scaling the radial factor.
    pub z: f64,
    /// Cosine coefficient `a_nm`.
    pub a: f64,
    /// Sine coefficient `b_nm`.
    pub b: f64,
}

impl PolarMode {
    /// Mode `(n, m)` projected from [`default_profile`].
    pub fn new(n: u32, m: usize, radius: f64) -> ModeResult<Self> {
        Self::with_profile(n, m, radius, default_profile)
    }

    /// Mode `(n, m)` projected from a caller-supplied profile `f(r, θ)`.
    pub fn with_profile<F: Fn(f64, f64) -> f64>(n: u32, m: usize, radius: f64, profile: F) -> ModeResult<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(ModeError::InvalidInput(format!("radius must be positive, got {}", radius)));
        }
        let z = bessel_derivative_zero(n, m)?;
        let order = n as f64;
        let radial = legendre(RADIAL_POINTS).reseat(0.0, radius);
        let angular = legendre(ANGULAR_POINTS).reseat(0.0, TAU);

        let mut cos_part = 0.0;
        let mut sin_part = 0.0;
        let mut norm = 0.0;
        for (&r, &w) in radial.x.iter().zip(&radial.w) {
            let j = bessel_j(n, z * r / radius);
            cos_part += w * j * r * angular.integrate(|t| (order * t).cos() * profile(r, t));
            sin_part += w * j * r * angular.integrate(|t| (order * t).sin() * profile(r, t));
            norm += w * j * j * r;
        }
        if !(norm > 0.0) {
            return Err(ModeError::Numerical(format!(
                "mode ({}, {}) has zero radial norm",
                n, m
            )));
        }
        let scale = TAU * norm;
        Ok(Self {
            n,
            m,
            radius,
            z,
            a: cos_part / scale,
            b: sin_part / scale,
        })
    }

    pub fn value(&self, r: f64, theta: f64) -> f64 {
        let order = self.n as f64;
        bessel_j(self.n, self.z * r / self.radius) * (self.a * (order * theta).cos() + self.b * (order * theta).sin())
    }

    /// Sample over `grid`, shape `(nθ, nr)`.
    pub fn sample(&self, grid: &PolarGrid) -> Array2<f64> {
        let radial = grid.r.mapv(|r| bessel_j(self.n, self.z * r / self.radius));
        let order = self.n as f64;
        Array2::from_shape_fn(grid.shape(), |(i, j)| {
            let theta = grid.theta[i];
            radial[j] * (self.a * (order * theta).cos() + self.b * (order * theta).sin())
        })
    }
}

/// Polar sampling grid: r over `[0, a]`, θ over `[0, 2π]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarGrid {
    pub r: Array1<f64>,
    pub theta: Array1<f64>,
}

impl PolarGrid {
    pub fn new(radius: f64, resolution: usize) -> ModeResult<Self> {
        Ok(Self {
            r: linspace(0.0, radius, resolution)?,
            theta: linspace(0.0, TAU, resolution)?,
        })
    }

    /// `(nθ, nr)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.theta.len(), self.r.len())
    }
}

/// One panel of a mode table.
#[derive(Debug, Clone)]
pub struct ModeCell {
    pub mode: PolarMode,
    pub field: Array2<f64>,
}

/// Modes `n < columns`, `m < rows`, row by row (m outer, n inner), each
/// sampled on a `resolution × resolution` polar grid.
pub fn mode_table(columns: u32, rows: usize, radius: f64, resolution: usize) -> ModeResult<Vec<ModeCell>> {
    if columns == 0 || rows == 0 {
        return Err(ModeError::InvalidInput(format!(
            "mode table needs at least one row and column, got {}x{}",
            rows, columns
        )));
    }
    let grid = PolarGrid::new(radius, resolution)?;
    let mut cells = Vec::with_capacity(rows * columns as usize);
    for m in 0..rows {
        for n in 0..columns {
            let mode = PolarMode::new(n, m, radius)?;
            log::debug!("(n, m) = ({}, {}): z = {:.7}, a = {:.6e}, b = {:.6e}", n, m, mode.z, mode.a, mode.b);
            let field = mode.sample(&grid);
            cells.push(ModeCell { mode, field });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dipole_coefficients() {
        let mode = PolarMode::new(1, 0, 1.0).unwrap();
        assert_abs_diff_eq!(mode.z, 1.8411837813406593, epsilon = 1e-12);
        assert_abs_diff_eq!(mode.a, 0.719096840513906, epsilon = 1e-9);
        assert_abs_diff_eq!(mode.b, 0.0, epsilon = 1e-12);

        let second = PolarMode::new(1, 1, 1.0).unwrap();
        assert_abs_diff_eq!(second.a, -0.105348960923730, epsilon = 1e-9);
    }

    #[test]
    fn test_radius_scales_coefficient() {
        let mode = PolarMode::new(1, 0, 2.0).unwrap();
        assert_abs_diff_eq!(mode.a, 1.438193681027811, epsilon = 1e-9);
    }

    #[test]
    fn test_orthogonal_orders_vanish() {
        for n in [0, 2, 3] {
            let mode = PolarMode::new(n, 1, 1.0).unwrap();
            assert_abs_diff_eq!(mode.a, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(mode.b, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_custom_profile() {
        let mode = PolarMode::with_profile(1, 0, 1.0, |r, t| r * t.sin()).unwrap();
        assert_abs_diff_eq!(mode.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mode.b, 0.719096840513906, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_matches_value() {
        let mode = PolarMode::new(1, 0, 1.0).unwrap();
        let grid = PolarGrid::new(1.0, 11).unwrap();
        let field = mode.sample(&grid);
        assert_eq!(field.dim(), (11, 11));
        assert_abs_diff_eq!(field[[3, 7]], mode.value(grid.r[7], grid.theta[3]), epsilon = 1e-15);
    }

    #[test]
    fn test_table_layout_and_validation() {
        let table = mode_table(3, 2, 1.0, 5).unwrap();
        let labels: Vec<(u32, usize)> = table.iter().map(|c| (c.mode.n, c.mode.m)).collect();
        assert_eq!(labels, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(mode_table(0, 2, 1.0, 5).is_err());
        assert!(mode_table(2, 0, 1.0, 5).is_err());
    }
}
