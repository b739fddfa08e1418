// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable enumeration state.

use crate::sos::{pairs_of, Pair};
use crate::trail::Registers;

/// Mutable search state.
///
/// Only `registers` is trail-tracked. The other fields are either rebuilt
/// whenever the register they depend on changes (`pairs`), or must survive
/// backtracking (`position`).
#[derive(Debug)]
pub struct DynamicState {
    /// Current k, pair list selection and sign index.
    pub registers: Registers,

    /// Pairs for `pairs_k`, ascending n.
    pub pairs: Vec<Pair>,

    /// The k `pairs` was built for. Kept equal to the k register by
    /// `SearchContext`, including after a rewind.
    pub pairs_k: u64,

    /// 1-based global position of the most recent descriptor, 0 before the first.
    ///
    /// NOT trail-tracked: the count runs on across every k.
    pub position: u64,
}

impl Default for DynamicState {
    fn default() -> Self {
        // registers start at k = 0
        Self {
            registers: Registers::default(),
            pairs: pairs_of(0),
            pairs_k: 0,
            position: 0,
        }
    }
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }
}
