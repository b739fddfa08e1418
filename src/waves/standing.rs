// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Time-dependent standing wave on the square plate.

use crate::error::{ModeError, ModeResult};
use crate::field::{linspace, Grid};
use ndarray::Array2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// `f(x, y, t) = A cos t Σ cos(pπx/2) cos(qπy/2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingWave {
    pub amplitude: f64,
    pub terms: Vec<(u32, u32)>,
}

impl Default for StandingWave {
    fn default() -> Self {
        Self {
            amplitude: 0.2,
            terms: vec![(2, 4), (4, 2)],
        }
    }
}

/// One sampled instant.
#[derive(Debug, Clone)]
pub struct Frame {
    pub t: f64,
    pub field: Array2<f64>,
}

impl StandingWave {
    pub fn new(amplitude: f64, terms: Vec<(u32, u32)>) -> Self {
        Self { amplitude, terms }
    }

    pub fn value(&self, x: f64, y: f64, t: f64) -> f64 {
        let shape: f64 = self
            .terms
            .iter()
            .map(|&(p, q)| (p as f64 * FRAC_PI_2 * x).cos() * (q as f64 * FRAC_PI_2 * y).cos())
            .sum();
        self.amplitude * t.cos() * shape
    }

    pub fn sample(&self, grid: &Grid, t: f64) -> Array2<f64> {
        grid.sample(|x, y| self.value(x, y, t))
    }

    /// `count` frames with t over `linspace(0, 2π, count)`: one full cycle.
    pub fn frames(&self, grid: &Grid, count: usize) -> ModeResult<Vec<Frame>> {
        if count == 0 {
            return Err(ModeError::InvalidInput("frame count must be positive".to_string()));
        }
        // the spatial shape is fixed; only the cos t factor changes
        let shape = self.sample(grid, 0.0);
        Ok(linspace(0.0, TAU, count)?
            .iter()
            .map(|&t| Frame {
                t,
                field: shape.mapv(|v| v * t.cos()),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_peak() {
        let wave = StandingWave::default();
        assert_abs_diff_eq!(wave.value(0.0, 0.0, 0.0), 0.4);
        assert_abs_diff_eq!(wave.value(0.0, 0.0, std::f64::consts::PI), -0.4, epsilon = 1e-15);
    }

    #[test]
    fn test_frames_cover_one_cycle() {
        let grid = Grid::linspace(-1.0, 1.0, 40).unwrap();
        let frames = StandingWave::default().frames(&grid, 100).unwrap();
        assert_eq!(frames.len(), 100);
        assert_abs_diff_eq!(frames[99].t, TAU, epsilon = 1e-12);
        assert_eq!(frames[0].field.dim(), (40, 40));
        for (a, b) in frames[0].field.iter().zip(frames[99].field.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_frames_rejected() {
        let grid = Grid::linspace(-1.0, 1.0, 4).unwrap();
        assert!(StandingWave::default().frames(&grid, 0).is_err());
    }
}
