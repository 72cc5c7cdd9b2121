//! The 4x4 board and its ten winning lines.
//!
//! ```text
//! 00 01 02 03
//! 04 05 06 07
//! 08 09 10 11
//! 12 13 14 15
//! ```

use crate::piece::{AttributeMask, Piece, common_attributes};

pub const CELLS: usize = 16;

/// Four cell indices forming a row, column or diagonal.
pub type Line = [u8; 4];

/// Rows, columns, then the two diagonals.
pub const LINES: [Line; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Lines passing through `cell` (two or three of them).
pub fn lines_through(cell: u8) -> impl Iterator<Item = &'static Line> {
    LINES.iter().filter(move |line| line.contains(&cell))
}

/// Whether two distinct cells share a line.
pub fn in_line(a: u8, b: u8) -> bool {
    a != b && lines_through(a).any(|line| line.contains(&b))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn piece_at(&self, cell: u8) -> Option<Piece> {
        self.cells[cell as usize]
    }

    #[inline(always)]
    pub fn is_free(&self, cell: u8) -> bool {
        self.cells[cell as usize].is_none()
    }

    pub fn set_piece(&mut self, cell: u8, piece: Option<Piece>) {
        self.cells[cell as usize] = piece;
    }

    pub fn free_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0..CELLS as u8).filter(|&c| self.is_free(c))
    }

    /// Occupied cells with their pieces, in cell order.
    pub fn placed(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(c, p)| p.map(|p| (c as u8, p)))
    }

    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether `piece` is already on the board.
    pub fn contains(&self, piece: Piece) -> bool {
        self.cells.contains(&Some(piece))
    }

    /// Pieces currently on `line`, in cell order.
    pub fn line_pieces(&self, line: &Line) -> ([Piece; 4], usize) {
        let mut out = [Piece::ALL[0]; 4];
        let mut n = 0;
        for &c in line {
            if let Some(p) = self.piece_at(c) {
                out[n] = p;
                n += 1;
            }
        }
        (out, n)
    }

    /// Attributes shared by the pieces placed on `line`, together with how many are placed.
    pub fn line_profile(&self, line: &Line) -> (AttributeMask, usize) {
        let (pieces, n) = self.line_pieces(line);
        (common_attributes(&pieces[..n]), n)
    }

    /// A line is a quarto when all four cells are occupied and the pieces agree on an attribute.
    pub fn line_is_quarto(&self, line: &Line) -> bool {
        let (mask, n) = self.line_profile(line);
        n == 4 && !mask.is_empty()
    }

    /// First completed line, if any.
    pub fn winning_line(&self) -> Option<&'static Line> {
        LINES.iter().find(|line| self.line_is_quarto(line))
    }

    /// Whether any line on the board is a quarto.
    pub fn has_quarto(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Whether placing `piece` on the free `cell` completes a quarto through that cell.
    pub fn completes_quarto(&self, cell: u8, piece: Piece) -> bool {
        lines_through(cell).any(|line| {
            let (mask, n) = self.line_profile(line);
            if n != 3 || mask.is_empty() {
                return false;
            }
            let (pieces, _) = self.line_pieces(line);
            piece.matches_any(pieces[0], mask)
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
