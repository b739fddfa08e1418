// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decomposition of k into ordered pairs of squares.
//!
//! # Examples
//!
//! ```
//! use mode_search::sos::{find_pairs, Pair};
//!
//! let pairs = find_pairs(25).unwrap();
//! assert_eq!(
//!     pairs,
//!     vec![Pair::new(0, 5), Pair::new(3, 4), Pair::new(4, 3), Pair::new(5, 0)]
//! );
//! assert!(find_pairs(3).unwrap().is_empty());
//! ```

use crate::error::{ModeError, ModeResult};
use serde::Serialize;
use std::fmt;

/// An ordered pair (n, m) of non-negative integers.
///
/// Pairs sort by n, then m, which is also the order `pairs_of` produces them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pair {
    pub n: u32,
    pub m: u32,
}

impl Pair {
    pub const fn new(n: u32, m: u32) -> Self {
        Self { n, m }
    }

    /// The sum of squares this pair decomposes.
    pub fn k(self) -> u64 {
        let n = self.n as u64;
        let m = self.m as u64;
        n * n + m * m
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

/// Integer square root: the largest r with r² ≤ k.
pub fn isqrt(k: u64) -> u64 {
    let mut r = (k as f64).sqrt() as u64;
    // The float estimate can be off by one either way for large k.
    while r.checked_mul(r).map_or(true, |sq| sq > k) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= k) {
        r += 1;
    }
    r
}

/// All pairs (n, m) with n² + m² = k, ascending n then ascending m.
///
/// For each n there is at most one m, so this examines isqrt(k) + 1 candidates.
pub fn pairs_of(k: u64) -> Vec<Pair> {
    let root = isqrt(k);
    let mut pairs = Vec::new();
    for n in 0..=root {
        let rest = k - n * n;
        let m = isqrt(rest);
        if m * m == rest {
            pairs.push(Pair::new(n as u32, m as u32));
        }
    }
    pairs
}

/// Whether k is a sum of two squares.
///
/// Computed from the factorisation (every prime ≡ 3 mod 4 must divide k to an
/// even power) rather than by searching, but always agrees with
/// `!pairs_of(k).is_empty()`.
pub fn is_sum_of_two_squares(k: u64) -> bool {
    if k == 0 {
        return true;
    }
    let mut rest = k;
    while rest % 2 == 0 {
        rest /= 2;
    }
    let mut p = 3u64;
    while p.checked_mul(p).is_some_and(|sq| sq <= rest) {
        if rest % p == 0 {
            let mut exponent = 0u32;
            while rest % p == 0 {
                rest /= p;
                exponent += 1;
            }
            if p % 4 == 3 && exponent % 2 == 1 {
                return false;
            }
        }
        p += 2;
    }
    // Whatever remains is 1 or a prime with exponent 1.
    rest % 4 != 3
}

fn non_negative(k: i64) -> ModeResult<u64> {
    u64::try_from(k).map_err(|_| ModeError::InvalidInput(format!("k must be non-negative, got {}", k)))
}

/// Checked entry point: all pairs for k, or `InvalidInput` for negative k.
pub fn find_pairs(k: i64) -> ModeResult<Vec<Pair>> {
    Ok(pairs_of(non_negative(k)?))
}

/// Checked entry point: whether k has any decomposition.
pub fn has_decomposition(k: i64) -> ModeResult<bool> {
    Ok(is_sum_of_two_squares(non_negative(k)?))
}
