// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration driver.
//!
//! Descriptors are produced by running the predicate program
//!
//! ```text
//! SumOfSquares → PairList → Sign → Counting → Emit
//! ```
//!
//! on the search engine. Depth-first order gives the enumeration order:
//! k ascending; within a k, the full list's sign assignments, then the
//! interior list's. Emit suspends the engine once per descriptor, so `Modes`
//! is a lazy iterator over a suspended search.
//!
//! # Examples
//!
//! ```
//! use mode_search::enumerate::Enumerator;
//!
//! let enumerator = Enumerator::default();
//! let first = enumerator.count(1).unwrap();
//! assert_eq!(first[0].to_string(), "[(0, 0)] [1]");
//!
//! let window = enumerator.range(23, 32).unwrap();
//! assert!(window.iter().all(|d| d.k == 25));
//! ```

pub mod descriptor;

pub use descriptor::{ModeDescriptor, PairSelection};

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::{ModeError, ModeResult};
use crate::predicates::{EmitPredicate, PairListPredicate, SignPredicate, SumOfSquaresPredicate};
use crate::state::{Counters, Statistics};
use std::collections::BTreeMap;
use std::iter::FusedIterator;

/// Default guard on range and selection sizes.
pub const DEFAULT_MAX_BATCH: usize = 100;

/// Lazy stream of descriptors backed by a suspended search.
///
/// Finite when a k limit is set, unbounded otherwise. It cannot be
/// restarted; build a new one to enumerate again.
#[derive(Debug)]
pub struct Modes {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl Modes {
    /// Stream descriptors from 1-based position `first` onward.
    pub fn new(first: u64, k_limit: Option<u64>) -> Self {
        let engine = EngineBuilder::new()
            .add(Box::new(SumOfSquaresPredicate::new(k_limit)))
            .add(Box::new(PairListPredicate))
            .add(Box::new(SignPredicate))
            .add(Statistics::counting_predicate(
                Counters::FullDescriptors,
                Some(|ctx| ctx.pair_selection() == PairSelection::Full),
            ))
            .add(Statistics::counting_predicate(
                Counters::InteriorDescriptors,
                Some(|ctx| ctx.pair_selection() == PairSelection::Interior),
            ))
            .terminal(Box::new(EmitPredicate::new(first)))
            .build();
        Self {
            ctx: SearchContext::new(),
            engine: Some(engine),
        }
    }

    /// Counters for this run. Descriptors consumed before the first
    /// emitted position are included.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Position of the last descriptor reached (0 before the first).
    pub fn position(&self) -> u64 {
        self.ctx.state.position
    }

    /// The k the search is currently on.
    pub fn current_k(&self) -> u64 {
        self.ctx.sum_of_squares()
    }
}

impl Iterator for Modes {
    type Item = ModeDescriptor;

    fn next(&mut self) -> Option<ModeDescriptor> {
        let engine = self.engine.take()?;
        let engine = engine.search(&mut self.ctx)?;
        self.engine = Some(engine);
        match self.ctx.current_descriptor() {
            Ok(descriptor) => {
                log::trace!("{}", descriptor.label());
                Some(descriptor)
            }
            Err(err) => {
                // SignPredicate only offers indices that decode.
                log::error!("search suspended on an invalid descriptor: {}", err);
                self.engine = None;
                None
            }
        }
    }
}

impl FusedIterator for Modes {}

/// Entry point for count, range and selection enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    max_batch: usize,
    k_limit: Option<u64>,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BATCH)
    }
}

impl From<&SearchConfig> for Enumerator {
    fn from(config: &SearchConfig) -> Self {
        Self {
            k_limit: config.k_limit,
            ..Self::new(config.max_batch)
        }
    }
}

impl Enumerator {
    /// An unbounded enumerator whose range and select requests hold at most
    /// `max_batch` descriptors. A batch of 0 is raised to 1.
    pub fn new(max_batch: usize) -> Self {
        Self {
            max_batch: max_batch.max(1),
            k_limit: None,
        }
    }

    /// Bound the k walk. Requests that need positions beyond the last
    /// descriptor with k <= limit fail with `UnreachableTarget`.
    pub fn with_k_limit(mut self, limit: u64) -> Self {
        self.k_limit = Some(limit);
        self
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    pub fn k_limit(&self) -> Option<u64> {
        self.k_limit
    }

    /// Lazy stream from position 1.
    pub fn iter(&self) -> Modes {
        Modes::new(1, self.k_limit)
    }

    /// Lazy stream from 1-based position `start`.
    pub fn iter_from(&self, start: u64) -> ModeResult<Modes> {
        if start == 0 {
            return Err(ModeError::InvalidInput("positions are 1-based".to_string()));
        }
        Ok(Modes::new(start, self.k_limit))
    }

    fn unreachable(&self, target: u64) -> ModeError {
        ModeError::UnreachableTarget {
            target,
            k_limit: self.k_limit.unwrap_or(u64::MAX),
        }
    }

    /// Exactly `target` descriptors from position 1.
    pub fn count(&self, target: i64) -> ModeResult<Vec<ModeDescriptor>> {
        let target = u64::try_from(target)
            .ok()
            .filter(|&t| t >= 1)
            .ok_or_else(|| ModeError::InvalidInput(format!("target count must be positive, got {}", target)))?;

        let modes: Vec<_> = self.iter().take(target as usize).collect();
        if (modes.len() as u64) < target {
            return Err(self.unreachable(target));
        }
        log::info!("enumerated {} descriptors", modes.len());
        Ok(modes)
    }

    /// Descriptors at positions `start..=end` (1-based, inclusive).
    pub fn range(&self, start: i64, end: i64) -> ModeResult<Vec<ModeDescriptor>> {
        if end <= start {
            return Err(ModeError::InvalidRange { start, end });
        }
        if start < 1 {
            return Err(ModeError::InvalidInput(format!(
                "start index must be at least 1, got {}",
                start
            )));
        }
        let requested = (end - start + 1) as u64;
        if requested > self.max_batch as u64 {
            return Err(ModeError::RangeTooLarge {
                requested,
                max: self.max_batch,
            });
        }

        let modes: Vec<_> = self.iter_from(start as u64)?.take(requested as usize).collect();
        if (modes.len() as u64) < requested {
            return Err(self.unreachable(end as u64));
        }
        log::info!("enumerated positions {}..={}", start, end);
        Ok(modes)
    }

    /// Descriptors at arbitrary positions, returned in the order given.
    ///
    /// Repeated positions are returned repeatedly. The stream is walked once,
    /// up to the largest position.
    pub fn select(&self, positions: &[i64]) -> ModeResult<Vec<ModeDescriptor>> {
        if positions.is_empty() {
            return Err(ModeError::InvalidInput("no positions selected".to_string()));
        }
        if positions.len() > self.max_batch {
            return Err(ModeError::RangeTooLarge {
                requested: positions.len() as u64,
                max: self.max_batch,
            });
        }
        let mut wanted: BTreeMap<u64, Option<ModeDescriptor>> = BTreeMap::new();
        for &position in positions {
            let position = u64::try_from(position)
                .ok()
                .filter(|&p| p >= 1)
                .ok_or_else(|| ModeError::InvalidInput(format!("positions are 1-based, got {}", position)))?;
            wanted.insert(position, None);
        }

        let (Some(&first), Some(&last)) = (wanted.keys().next(), wanted.keys().next_back()) else {
            return Err(ModeError::InvalidInput("no positions selected".to_string()));
        };
        for descriptor in self.iter_from(first)?.take_while(|d| d.position <= last) {
            if let Some(slot) = wanted.get_mut(&descriptor.position) {
                *slot = Some(descriptor);
            }
        }

        positions
            .iter()
            .map(|&position| {
                wanted
                    .get(&(position as u64))
                    .and_then(Option::clone)
                    .ok_or_else(|| self.unreachable(position as u64))
            })
            .collect()
    }
}
