// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mode_search::context::SearchContext;
use mode_search::{ModeDescriptor, Predicate, PredicateResult, SearchEngine};

/// Offers the sign indices `lo..hi` as choices, one per retry.
#[derive(Debug)]
pub struct SignRangePredicate {
    pub lo: u64,
    pub hi: u64,
}

impl SignRangePredicate {
    pub fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }
}

impl Predicate for SignRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(self.hi.saturating_sub(self.lo) as usize)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.set_sign_index(self.lo + choice as u64);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SignRange"
    }
}

/// Runs `rounds` rounds, writing the round number into the sign index.
#[derive(Debug)]
pub struct MultiRoundPredicate {
    pub rounds: usize,
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        ctx.set_sign_index(round as u64);
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

/// Fails unconditionally, in the middle of a program.
#[derive(Debug)]
pub struct AlwaysFailPredicate;

impl Predicate for AlwaysFailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "AlwaysFail"
    }
}

/// Resume `engine` until exhausted, recording `observe(ctx)` at every
/// suspension.
pub fn drain<T>(engine: SearchEngine, ctx: &mut SearchContext, observe: impl Fn(&SearchContext) -> T) -> Vec<T> {
    let mut seen = Vec::new();
    let mut engine = Some(engine);
    while let Some(next) = engine.take().and_then(|e| e.search(ctx)) {
        seen.push(observe(ctx));
        engine = Some(next);
    }
    seen
}

/// The console label of every descriptor, one per line.
pub fn labels(descriptors: &[ModeDescriptor]) -> Vec<String> {
    descriptors.iter().map(ModeDescriptor::label).collect()
}
