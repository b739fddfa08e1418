// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! EmitPredicate - numbers each complete descriptor and hands it to the caller.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// EmitPredicate ends the enumeration program.
///
/// Every time the search reaches it, a complete (k, pair list, signs)
/// descriptor is in the context. The global position advances by one.
/// Positions before `first` are consumed silently (Failure); every other
/// position suspends the engine so the caller can read the descriptor.
#[derive(Debug)]
pub struct EmitPredicate {
    first: u64,
}

impl EmitPredicate {
    /// Emit every descriptor from 1-based position `first` onward.
    pub fn new(first: u64) -> Self {
        Self { first }
    }
}

impl Predicate for EmitPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.state.position += 1;
        if ctx.state.position < self.first {
            PredicateResult::Failure
        } else {
            PredicateResult::Suspend
        }
    }

    fn name(&self) -> &str {
        "Emit"
    }
}

impl TerminalPredicate for EmitPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_before_first_are_consumed() {
        let mut ctx = SearchContext::new();
        let mut pred = EmitPredicate::new(3);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert_eq!(ctx.state.position, 3);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert_eq!(ctx.state.position, 4);
    }
}
