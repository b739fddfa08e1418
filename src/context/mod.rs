// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one enumeration run.
//!
//! The SearchContext owns everything a run mutates: the trail, the dynamic
//! state, and the statistics. Nothing is global, so two contexts enumerate
//! independently and a second run with the same inputs reproduces the first.

pub mod dynamic;

pub use dynamic::DynamicState;

use crate::enumerate::{ModeDescriptor, PairSelection};
use crate::error::ModeResult;
use crate::sos::{Pair, SignAssignment};
use crate::state::Statistics;
use crate::trail::{Register, Trail};

/// Search context combining the trail with the state it protects.
///
/// # Example
///
/// ```
/// use mode_search::context::SearchContext;
/// use mode_search::enumerate::PairSelection;
///
/// let mut ctx = SearchContext::new();
/// ctx.set_sum_of_squares(25);
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.select_pairs(PairSelection::Interior);
/// assert_eq!(ctx.active_pairs().len(), 2);
///
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.pair_selection(), PairSelection::Full);
/// assert_eq!(ctx.active_pairs().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Undo log for the registers in `state`.
    pub trail: Trail,
    /// Mutable search state.
    pub state: DynamicState,
    /// Counters updated by counting predicates.
    pub statistics: Statistics,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Undo register changes made after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state.registers);
        self.sync_pairs();
    }

    /// Rebuild the pair list if the k register has moved away from it.
    fn sync_pairs(&mut self) {
        let k = self.sum_of_squares();
        if self.state.pairs_k != k {
            self.state.pairs = crate::sos::pairs_of(k);
            self.state.pairs_k = k;
        }
    }

    fn set(&mut self, register: Register, value: u64) {
        self.trail
            .record_and_set(&mut self.state.registers, register, value);
    }

    fn get(&self, register: Register) -> u64 {
        self.state.registers.get(register)
    }

    /// Make k current (trail-tracked) and rebuild its pair list.
    pub fn set_sum_of_squares(&mut self, k: u64) {
        self.set(Register::SumOfSquares, k);
        self.sync_pairs();
    }

    pub fn sum_of_squares(&self) -> u64 {
        self.get(Register::SumOfSquares)
    }

    /// Choose between the full and interior pair lists (trail-tracked).
    pub fn select_pairs(&mut self, selection: PairSelection) {
        self.set(Register::PairList, selection as u64);
    }

    pub fn pair_selection(&self) -> PairSelection {
        PairSelection::from_register(self.get(Register::PairList))
    }

    /// Choose the sign assignment by index (trail-tracked).
    pub fn set_sign_index(&mut self, index: u64) {
        self.set(Register::SignIndex, index);
    }

    pub fn sign_index(&self) -> u64 {
        self.get(Register::SignIndex)
    }

    /// Every pair for the current k.
    pub fn pairs(&self) -> &[Pair] {
        &self.state.pairs
    }

    /// The pairs under the current selection.
    ///
    /// The interior list drops the first and last pair in ascending-n order.
    /// It is empty unless there are more than two pairs.
    pub fn active_pairs(&self) -> &[Pair] {
        let pairs = &self.state.pairs;
        match self.pair_selection() {
            PairSelection::Full => pairs,
            PairSelection::Interior if pairs.len() > 2 => &pairs[1..pairs.len() - 1],
            PairSelection::Interior => &[],
        }
    }

    /// Snapshot the descriptor the search is currently positioned on.
    pub fn current_descriptor(&self) -> ModeResult<ModeDescriptor> {
        let pairs = self.active_pairs().to_vec();
        let signs = SignAssignment::from_index(pairs.len(), self.sign_index())?;
        Ok(ModeDescriptor {
            position: self.state.position,
            k: self.sum_of_squares(),
            selection: self.pair_selection(),
            pairs,
            signs,
        })
    }
}
