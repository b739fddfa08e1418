// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SumOfSquaresPredicate - walks k = 0, 1, 2, … in order.
//!
//! Choice i tries k = i. A k with no decomposition fails, so it produces no
//! descriptors and consumes no positions.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::sos::is_sum_of_two_squares;
use crate::state::Counters;

/// SumOfSquaresPredicate chooses the current k.
///
/// Without a limit the walk is unbounded (usize::MAX choices), and callers
/// stop consuming once they have enough descriptors. With `Some(limit)` the
/// choices are k = 0..=limit and the search can be exhausted.
#[derive(Debug)]
pub struct SumOfSquaresPredicate {
    limit: Option<u64>,
}

impl SumOfSquaresPredicate {
    pub fn new(limit: Option<u64>) -> Self {
        Self { limit }
    }

    fn choice_count(&self) -> usize {
        match self.limit {
            Some(limit) => usize::try_from(limit)
                .ok()
                .and_then(|limit| limit.checked_add(1))
                .unwrap_or(usize::MAX),
            None => usize::MAX,
        }
    }
}

impl Predicate for SumOfSquaresPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(self.choice_count())
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let k = choice as u64;
        if !is_sum_of_two_squares(k) {
            return PredicateResult::Failure;
        }
        ctx.set_sum_of_squares(k);
        ctx.statistics.increment_counter(Counters::DecomposableK);
        log::trace!("k = {} has {} pairs", k, ctx.pairs().len());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SumOfSquares"
    }
}
