//! Transposition table.
//!
//! A fixed power-of-two array of slots indexed by the low bits of the
//! position key, always replacing. The full key is stored and checked on
//! probe, so a collision or an overwritten slot is just a miss.

use quarto_core::Move;

use crate::search::{MATE_BOUND, WIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Score is at least this (search failed high).
    Lower,
    /// Score is at most this (search failed low).
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u8,
    /// Stored relative to the node, see [`score_to_tt`].
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
    /// No depth cutoff was hit anywhere below this node.
    pub proven: bool,
}

pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Table with `1 << bits` slots.
    pub fn new(bits: u8) -> Self {
        let size = 1usize << bits.clamp(4, 28);
        Self {
            slots: vec![None; size],
            mask: size - 1,
        }
    }

    #[inline]
    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.slots[key as usize & self.mask]
            .as_ref()
            .filter(|e| e.key == key)
    }

    #[inline]
    pub fn store(&mut self, entry: TtEntry) {
        self.slots[entry.key as usize & self.mask] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Win and loss scores are stored as distance from the node, not the root.
#[inline]
pub fn score_to_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_BOUND {
        score + ply
    } else if score <= -MATE_BOUND {
        score - ply
    } else {
        score
    }
}

#[inline]
pub fn score_from_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_BOUND {
        (score - ply).min(WIN)
    } else if score <= -MATE_BOUND {
        (score + ply).max(-WIN)
    } else {
        score
    }
}
