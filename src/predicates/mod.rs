// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The enumeration program is, in order:
//!
//! - `sum_of_squares`: SumOfSquaresPredicate, one choice per k
//! - `pair_list`: PairListPredicate, full then interior pair list
//! - `signs`: SignPredicate, one choice per sign assignment
//! - `emit`: EmitPredicate, numbers descriptors and suspends on each one
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod emit;
pub mod pair_list;
pub mod signs;
pub mod sum_of_squares;

pub use emit::EmitPredicate;
pub use pair_list::PairListPredicate;
pub use signs::SignPredicate;
pub use sum_of_squares::SumOfSquaresPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking through every
/// alternative. Programs ending in FailPredicate run to exhaustion and are
/// useful for counting.
///
/// # Example
///
/// ```
/// use mode_search::engine::EngineBuilder;
/// use mode_search::predicates::{FailPredicate, PairListPredicate, SumOfSquaresPredicate};
/// use mode_search::state::{Counters, Statistics};
/// use mode_search::context::SearchContext;
/// use mode_search::enumerate::PairSelection;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(SumOfSquaresPredicate::new(Some(25))))
///     .add(Box::new(PairListPredicate))
///     .add(Statistics::counting_predicate(
///         Counters::InteriorDescriptors,
///         Some(|ctx| ctx.pair_selection() == PairSelection::Interior),
///     ))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// // 0, 1, 2, 4, 5, 8, 9, 10, 13, 16, 17, 18, 20, 25
/// assert_eq!(ctx.statistics.get(Counters::DecomposableK), 14);
/// // only 25 has more than two pairs
/// assert_eq!(ctx.statistics.get(Counters::InteriorDescriptors), 1);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine with the context in its current state. Resuming
/// continues with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
