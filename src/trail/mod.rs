// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the enumeration search.
//!
//! Search state that must be undone on backtracking lives in a small, fixed
//! array of u64 registers. Every write through the trail records the old
//! value, and rewinding to a checkpoint restores the registers in reverse
//! order. Checkpoints are plain trail lengths.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Trail-tracked search variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum Register {
    /// The k currently being decomposed.
    SumOfSquares,
    /// Full (0) or interior (1) pair list.
    PairList,
    /// Index of the current sign assignment.
    SignIndex,
}

/// Register file for trail-tracked state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers([u64; Register::COUNT]);

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> u64 {
        self.0[register as usize]
    }
}

/// A single recorded change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    register: Register,
    old_value: u64,
}

/// The trail of register changes since the search began.
///
/// Each SearchContext owns its own trail, so independent enumerations never
/// share undo state.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size. The enumeration program writes at most one
    /// register per stack level, so hitting this is a bug.
    const MAX_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Current position, usable as a checkpoint for `rewind_to`.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Write `value` into `register`, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE.
    pub fn record_and_set(&mut self, registers: &mut Registers, register: Register, value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        let slot = &mut registers.0[register as usize];
        self.entries.push(TrailEntry {
            register,
            old_value: *slot,
        });
        *slot = value;
    }

    /// Undo every change after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize, registers: &mut Registers) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                registers.0[entry.register as usize] = entry.old_value;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_restores_old_values() {
        let mut trail = Trail::new();
        let mut registers = Registers::new();

        trail.record_and_set(&mut registers, Register::SumOfSquares, 25);
        let checkpoint = trail.checkpoint();
        trail.record_and_set(&mut registers, Register::SumOfSquares, 26);
        trail.record_and_set(&mut registers, Register::SignIndex, 3);
        assert_eq!(registers.get(Register::SumOfSquares), 26);
        assert_eq!(trail.len(), 3);

        trail.rewind_to(checkpoint, &mut registers);
        assert_eq!(trail.len(), 1);
        assert_eq!(registers.get(Register::SumOfSquares), 25);
        assert_eq!(registers.get(Register::SignIndex), 0);
    }

    #[test]
    fn test_repeated_writes_unwind_in_order() {
        let mut trail = Trail::new();
        let mut registers = Registers::new();

        trail.record_and_set(&mut registers, Register::PairList, 1);
        trail.record_and_set(&mut registers, Register::PairList, 0);
        trail.record_and_set(&mut registers, Register::PairList, 1);

        trail.rewind_to(0, &mut registers);
        assert_eq!(registers, Registers::new());
    }

    #[test]
    fn test_rewind_past_end_is_noop() {
        let mut trail = Trail::new();
        let mut registers = Registers::new();
        trail.record_and_set(&mut registers, Register::SignIndex, 7);
        trail.rewind_to(5, &mut registers);
        assert_eq!(registers.get(Register::SignIndex), 7);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        let mut registers = Registers::new();
        for i in 0..=Trail::MAX_SIZE as u64 {
            trail.record_and_set(&mut registers, Register::SignIndex, i);
        }
    }
}
