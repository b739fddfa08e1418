// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sign assignments over a pair list.
//!
//! A SignAssignment gives each pair in a list a sign of +1 or -1. The first
//! sign is always +1, which removes the global negation of every pattern.
//! The assignment is stored as a bitset where bit j is set if position j
//! carries -1, so it fits in a single trail register.
//!
//! # Ordering
//!
//! Assignment index i (in `0..2^(L-1)`) counts in binary over the trailing
//! L-1 signs, +1 as 0 and -1 as 1, with position 1 as the most significant
//! digit. For L = 3:
//!
//! ```text
//! 0: [ 1,  1,  1]
//! 1: [ 1,  1, -1]
//! 2: [ 1, -1,  1]
//! 3: [ 1, -1, -1]
//! ```
//!
//! Downstream selection is by position, so this order must not change.
//!
//! # Examples
//!
//! ```
//! use mode_search::sos::{generate_signs, Pair};
//!
//! let pairs = [Pair::new(1, 7), Pair::new(5, 5), Pair::new(7, 1)];
//! let signs = generate_signs(&pairs).unwrap();
//! assert_eq!(signs.len(), 4);
//! assert_eq!(signs[1].to_string(), "[1, 1, -1]");
//! ```

use crate::error::{ModeError, ModeResult};
use crate::sos::Pair;
use serde::{Serialize, Serializer};
use std::fmt;

/// Longest pair list that can be signed. Position 0 is pinned, so the
/// remaining 63 positions index at most 2^63 assignments.
pub const MAX_SIGNED_PAIRS: usize = 64;

/// A single sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn value(self) -> i8 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    pub fn as_f64(self) -> f64 {
        self.value() as f64
    }
}

/// Signs for a pair list of `len` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignAssignment {
    len: u8,
    negative: u64,
}

impl SignAssignment {
    /// All signs +1.
    pub fn positive(len: usize) -> ModeResult<Self> {
        Self::from_index(len, 0)
    }

    /// The assignment at `index` in the enumeration order described above.
    pub fn from_index(len: usize, index: u64) -> ModeResult<Self> {
        let count = sign_combination_count(len)?;
        if index >= count {
            return Err(ModeError::InvalidInput(format!(
                "sign index {} out of range for {} pairs ({} assignments)",
                index, len, count
            )));
        }
        let mut negative = 0u64;
        for position in 1..len {
            let digit = (len - 1 - position) as u32;
            if (index >> digit) & 1 == 1 {
                negative |= 1 << position;
            }
        }
        Ok(Self {
            len: len as u8,
            negative,
        })
    }

    /// Number of signs (equal to the pair list length).
    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn get(self, position: usize) -> Option<Sign> {
        if position >= self.len() {
            return None;
        }
        Some(if (self.negative >> position) & 1 == 1 {
            Sign::Minus
        } else {
            Sign::Plus
        })
    }

    pub fn iter(self) -> impl Iterator<Item = Sign> {
        (0..self.len()).filter_map(move |position| self.get(position))
    }

    /// Signs as ±1 integers.
    pub fn values(self) -> Vec<i8> {
        self.iter().map(Sign::value).collect()
    }

    /// Raw bitset, bit j set when position j is -1.
    pub fn bits(self) -> u64 {
        self.negative
    }
}

impl fmt::Display for SignAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, sign) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", sign.value())?;
        }
        write!(f, "]")
    }
}

impl Serialize for SignAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Sign::value))
    }
}

/// Number of sign assignments for a list of `len` pairs: 2^(len-1).
pub fn sign_combination_count(len: usize) -> ModeResult<u64> {
    if len == 0 {
        return Err(ModeError::InvalidInput(
            "cannot sign an empty pair list".to_string(),
        ));
    }
    if len > MAX_SIGNED_PAIRS {
        return Err(ModeError::InvalidInput(format!(
            "cannot sign {} pairs (at most {})",
            len, MAX_SIGNED_PAIRS
        )));
    }
    Ok(1u64 << (len - 1))
}

/// Every sign assignment for `pairs`, in enumeration order.
pub fn generate_signs(pairs: &[Pair]) -> ModeResult<Vec<SignAssignment>> {
    let count = sign_combination_count(pairs.len())?;
    (0..count)
        .map(|index| SignAssignment::from_index(pairs.len(), index))
        .collect()
}
