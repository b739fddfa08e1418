// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of sum-of-squares mode patterns for vibrating square plates,
//! and evaluation of the fields behind them.
//!
//! A mode pattern is fixed by an integer `k`, the ordered pairs `(n, m)` with
//! `n² + m² = k`, and a sign for each pair. Its field is
//! `Σ s_i · basis(x, n_i) · basis(y, m_i)`. Patterns are numbered from 1 in a
//! fixed global order, so "pattern 52" always means the same picture.
//!
//! # Architecture
//!
//! ## Arithmetic
//!
//! - [`sos`]: pairs of a `k`, decomposability, sign assignments
//!
//! ## Search
//!
//! The enumeration is a backtracking program run by [`engine::SearchEngine`]:
//!
//! 1. **SumOfSquaresPredicate**: choose `k = 0, 1, 2, …`, failing on `k` with
//!    no decomposition
//! 2. **PairListPredicate**: choose the full pair list, then the interior list
//!    (first and last pairs removed) when it is non-empty
//! 3. **SignPredicate**: choose one of `2^(L-1)` sign assignments, first sign
//!    fixed to `+1`
//! 4. **EmitPredicate**: number the pattern and suspend the engine
//!
//! Choices live in trail registers ([`trail`]) so backtracking is a rewind.
//! [`enumerate::Enumerator`] drives the suspended engine to answer count,
//! range and selection requests.
//!
//! ## Fields
//!
//! - [`field`]: grids and the square plate field of a pattern
//! - [`special`]: Bessel functions, derivative zeros, Gauss–Legendre rules
//! - [`waves`]: circular membrane modes, the standing wave animation frames,
//!   the radial sinc surface and a frequency response curve
//!
//! # Examples
//!
//! ```
//! use mode_search::Enumerator;
//!
//! let picked = Enumerator::default().select(&[52]).unwrap();
//! assert_eq!(picked[0].label(), "N = 52 | S = 50: [(1, 7), (5, 5), (7, 1)] [1, 1, 1]");
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod field;
pub mod logging;
pub mod predicates;
pub mod sos;
pub mod special;
pub mod state;
pub mod trail;
pub mod waves;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use enumerate::{Enumerator, ModeDescriptor, Modes};
pub use error::{ModeError, ModeResult};
pub use trail::Trail;
