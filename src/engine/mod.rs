// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail so that each retry
//! starts from the state its stack entry was created in.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! An entry whose try_pred succeeded deterministically has no alternatives,
//! so backtracking into it backtracks further.
//!
//! A suspended engine is a generator: calling `search` again backtracks out of
//! the suspending predicate and continues with the next alternative.
//!
//! # Example
//!
//! ```
//! use mode_search::engine::EngineBuilder;
//! use mode_search::predicates::{SumOfSquaresPredicate, SuspendPredicate};
//! use mode_search::context::SearchContext;
//!
//! let mut ctx = SearchContext::new();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SumOfSquaresPredicate::new(None)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! let engine = engine.search(&mut ctx).unwrap(); // k = 0
//! assert_eq!(ctx.sum_of_squares(), 0);
//! let _engine = engine.search(&mut ctx).unwrap(); // k = 1
//! assert_eq!(ctx.sum_of_squares(), 1);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 16;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the first predicate has been pushed.
    started: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer `EngineBuilder`, which checks that the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            started: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are communicated through `ctx`, which holds the state at the
    /// point of suspension until the engine is resumed.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without a
    /// terminal predicate), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if !self.started {
            self.started = true;
            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                log::debug!(
                    "search exhausted after {} tries and {} retries",
                    self.try_count,
                    self.retry_count
                );
                return None;
            };

            ctx.rewind_to(entry.trail_checkpoint);

            let result = if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[entry.predicate_index].try_pred(ctx, entry.round);
                // A deterministic outcome leaves no alternatives: backtracking
                // into this entry must pop it rather than call try_pred again.
                entry.in_choice_mode = true;
                entry.current_choice = 0;
                entry.num_choices = 0;
                if let PredicateResult::Choices(n) = result {
                    entry.num_choices = n;
                    entry.trail_checkpoint = ctx.trail.len();
                    continue;
                }
                result
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let predicate = &mut self.predicates[entry.predicate_index];
                let result = predicate.retry_pred(ctx, entry.round, choice);
                if matches!(result, PredicateResult::Choices(_) | PredicateResult::Suspend) {
                    panic!(
                        "{}::retry_pred returned invalid result: {:?}",
                        predicate.name(),
                        result
                    );
                }
                if result == PredicateResult::Failure {
                    // Try next choice (loop continues)
                    continue;
                }
                result
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(ctx),
                PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                PredicateResult::Failure => {
                    self.stack.pop();
                }
                PredicateResult::Suspend => {
                    // Resuming must backtrack out of the suspending entry.
                    self.stack.pop();
                    return Some(self);
                }
                PredicateResult::Choices(_) => unreachable!("choices are handled above"),
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with a terminal predicate).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a terminal predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let entry = StackEntry::new(current.predicate_index, current.round + 1, ctx.trail.len());
        self.stack.push(entry);
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate program.
///
/// A program is only buildable once a terminal predicate has been added.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<P: TerminalPredicate + 'static>(mut self, predicate: Box<P>) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
