// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SignPredicate - one choice per sign assignment of the active pair list.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::sos::sign_combination_count;

/// SignPredicate chooses the sign assignment by index.
///
/// For an active list of L pairs there are 2^(L-1) choices; choice i is
/// assignment i in the order documented in `sos::sign`.
#[derive(Debug)]
pub struct SignPredicate;

impl Predicate for SignPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let len = ctx.active_pairs().len();
        match sign_combination_count(len).map(usize::try_from) {
            Ok(Ok(count)) => PredicateResult::Choices(count),
            Ok(Err(_)) | Err(_) => {
                log::warn!(
                    "skipping k = {}: cannot enumerate signs for {} pairs",
                    ctx.sum_of_squares(),
                    len
                );
                PredicateResult::Failure
            }
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.set_sign_index(choice as u64);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Sign"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::PairSelection;

    #[test]
    fn test_choice_count_tracks_selection() {
        let mut ctx = SearchContext::new();
        let mut pred = SignPredicate;

        ctx.set_sum_of_squares(25);
        ctx.select_pairs(PairSelection::Full);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(8));

        ctx.select_pairs(PairSelection::Interior);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
    }

    #[test]
    fn test_empty_selection_fails() {
        let mut ctx = SearchContext::new();
        ctx.set_sum_of_squares(5);
        ctx.select_pairs(PairSelection::Interior);
        assert_eq!(SignPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }
}
