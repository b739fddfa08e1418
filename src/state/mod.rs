// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-wide state that is not undone on backtracking.

pub mod statistics;

pub use statistics::{Counters, Statistics};
