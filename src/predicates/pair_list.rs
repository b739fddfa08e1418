// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PairListPredicate - chooses the full pair list, then the interior list.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::enumerate::PairSelection;

/// PairListPredicate selects which pairs of the current k get signed.
///
/// # Choices
///
/// - Choice 0 → the full list
/// - Choice 1 → the interior list (first and last pair dropped), which only
///   exists when the full list has more than two pairs
#[derive(Debug)]
pub struct PairListPredicate;

impl Predicate for PairListPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(2)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        match choice {
            0 => {
                ctx.select_pairs(PairSelection::Full);
                PredicateResult::Success
            }
            1 if ctx.pairs().len() > 2 => {
                ctx.select_pairs(PairSelection::Interior);
                PredicateResult::Success
            }
            1 => PredicateResult::Failure,
            _ => unreachable!("PairListPredicate offers two choices"),
        }
    }

    fn name(&self) -> &str {
        "PairList"
    }
}
