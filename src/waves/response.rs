// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frequency response curve
//! `G(ω) = 6 cos(10⁵ω − π/4) / (5 cos(10⁴ω) + 3 cos(10⁵ω))`.

use crate::error::ModeResult;
use crate::field::logspace;
use ndarray::Array1;
use std::f64::consts::FRAC_PI_4;

pub fn frequency_response(omega: f64) -> f64 {
    6.0 * (1e5 * omega - FRAC_PI_4).cos() / (5.0 * (1e4 * omega).cos() + 3.0 * (1e5 * omega).cos())
}

/// `G` sampled on a log-spaced ω axis. Poles show up as large or
/// infinite values; they are kept, not filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    pub omega: Array1<f64>,
    pub gain: Array1<f64>,
}

impl ResponseCurve {
    /// `n` points over `ω ∈ [10, 10⁶]`.
    pub fn sample(n: usize) -> ModeResult<Self> {
        let omega = logspace(1.0, 6.0, n)?;
        let gain = omega.mapv(frequency_response);
        Ok(Self { omega, gain })
    }

    pub fn len(&self) -> usize {
        self.omega.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omega.is_empty()
    }
}
