//! Unplaced pieces.
//!
//! Pieces are tracked by identity in a 16-bit set. The index a move request
//! uses to name a piece is its rank among the pieces still unplaced, in
//! catalog order, so the same index names different pieces as the pool shrinks.

use crate::piece::{PIECE_COUNT, Piece};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pool {
    mask: u16,
}

impl Default for Pool {
    fn default() -> Self {
        Self::full()
    }
}

impl Pool {
    pub const fn full() -> Self {
        Self { mask: u16::MAX }
    }

    pub const fn empty() -> Self {
        Self { mask: 0 }
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    #[inline(always)]
    pub const fn contains(self, piece: Piece) -> bool {
        self.mask & (1 << piece.id()) != 0
    }

    pub fn insert(&mut self, piece: Piece) {
        self.mask |= 1 << piece.id();
    }

    pub fn remove(&mut self, piece: Piece) {
        self.mask &= !(1 << piece.id());
    }

    /// Copy of the pool without `piece`.
    pub fn without(mut self, piece: Piece) -> Self {
        self.remove(piece);
        self
    }

    /// The piece at pool index `index`.
    pub fn get(self, index: usize) -> Option<Piece> {
        self.iter().nth(index)
    }

    /// Pool index of `piece`, if it is unplaced.
    pub fn index_of(self, piece: Piece) -> Option<usize> {
        if !self.contains(piece) {
            return None;
        }
        let below = self.mask & ((1u16 << piece.id()) - 1);
        Some(below.count_ones() as usize)
    }

    pub fn iter(self) -> impl Iterator<Item = Piece> {
        let mask = self.mask;
        (0..PIECE_COUNT as u8)
            .filter(move |id| mask & (1 << id) != 0)
            .filter_map(Piece::from_id)
    }
}

impl FromIterator<Piece> for Pool {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        let mut pool = Pool::empty();
        for p in iter {
            pool.insert(p);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_shifts_after_removal() {
        let mut pool = Pool::full();
        assert_eq!(pool.len(), 16);
        assert_eq!(pool.get(3), Piece::from_id(3));

        pool.remove(Piece::from_id(1).unwrap());
        // The piece formerly at index 4 now sits at index 3.
        assert_eq!(pool.get(3), Piece::from_id(4));
        assert_eq!(pool.index_of(Piece::from_id(4).unwrap()), Some(3));
        assert_eq!(pool.index_of(Piece::from_id(1).unwrap()), None);
        assert_eq!(pool.get(15), None);
    }

    #[test]
    fn test_index_round_trip() {
        let pool: Pool = [2u8, 5, 9, 15].iter().filter_map(|&i| Piece::from_id(i)).collect();
        for (i, p) in pool.iter().enumerate() {
            assert_eq!(pool.index_of(p), Some(i));
            assert_eq!(pool.get(i), Some(p));
        }
    }
}
