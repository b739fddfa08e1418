// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mode descriptors: one (pairs, signs, k) pattern each.

use crate::error::ModeResult;
use crate::field::{evaluate_mode, Grid};
use crate::sos::{Pair, SignAssignment};
use ndarray::Array2;
use serde::Serialize;
use std::fmt;

/// Which pairs of a k a descriptor was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum PairSelection {
    /// Every pair of k.
    #[default]
    Full = 0,
    /// Every pair except the first and last in ascending-n order.
    Interior = 1,
}

impl PairSelection {
    /// Decode a trail register value. Anything but 1 is Full.
    pub(crate) fn from_register(value: u64) -> Self {
        if value == PairSelection::Interior as u64 {
            PairSelection::Interior
        } else {
            PairSelection::Full
        }
    }
}

/// One enumerated pattern.
///
/// `pairs` and `signs` fully determine the field; `k` and `position` are
/// carried for labelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeDescriptor {
    /// 1-based global position in the enumeration.
    pub position: u64,
    /// The sum of squares the pairs decompose.
    pub k: u64,
    /// Whether `pairs` is the full or interior list for `k`.
    pub selection: PairSelection,
    pub pairs: Vec<Pair>,
    pub signs: SignAssignment,
}

impl ModeDescriptor {
    /// Console label, e.g. `N = 52 | S = 50: [(1, 7), (5, 5), (7, 1)] [1, 1, 1]`.
    pub fn label(&self) -> String {
        format!("N = {} | S = {}: {}", self.position, self.k, self)
    }

    /// Sample the pattern's field over `grid`.
    pub fn evaluate(&self, grid: &Grid) -> ModeResult<Array2<f64>> {
        evaluate_mode(grid, &self.pairs, self.signs)
    }
}

impl fmt::Display for ModeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pair)?;
        }
        write!(f, "] {}", self.signs)
    }
}
