// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sum-of-squares primitives.
//!
//! - Pair: an integer pair (n, m) with n² + m² = k
//! - SignAssignment: ±1 per pair, first entry pinned to +1, stored as a bitset

pub mod pair;
pub mod sign;

pub use pair::{find_pairs, has_decomposition, is_sum_of_two_squares, isqrt, pairs_of, Pair};
pub use sign::{generate_signs, sign_combination_count, Sign, SignAssignment, MAX_SIGNED_PAIRS};
