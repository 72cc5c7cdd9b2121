//! The fixed catalog of sixteen Quarto pieces.
//!
//! A piece is stored as a 4-bit id, one bit per attribute:
//!
//! ```text
//! bit 3: shape    0 = round, 1 = square
//! bit 2: color    0 = dark,  1 = light
//! bit 1: height   0 = low,   1 = high
//! bit 0: filling  0 = empty, 1 = full
//! ```
//!
//! Catalog order is ascending id, so a piece's index in the initial pool is its id.

use serde::{Deserialize, Serialize};

/// Number of distinct pieces in a match.
pub const PIECE_COUNT: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Height {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filling {
    Empty,
    Full,
}

/// One of the four binary attributes a piece carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Shape,
    Color,
    Height,
    Filling,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Shape,
        Attribute::Color,
        Attribute::Height,
        Attribute::Filling,
    ];

    #[inline(always)]
    pub const fn bit(self) -> u8 {
        match self {
            Attribute::Shape => 0b1000,
            Attribute::Color => 0b0100,
            Attribute::Height => 0b0010,
            Attribute::Filling => 0b0001,
        }
    }
}

/// Set of attributes, one bit per [`Attribute`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeMask(u8);

impl AttributeMask {
    pub const NONE: AttributeMask = AttributeMask(0);
    pub const ALL: AttributeMask = AttributeMask(0b1111);

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

/// An immutable Quarto piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Piece(u8);

impl Piece {
    /// All sixteen pieces in catalog order.
    pub const ALL: [Piece; PIECE_COUNT] = {
        let mut all = [Piece(0); PIECE_COUNT];
        let mut i = 0;
        while i < PIECE_COUNT {
            all[i] = Piece(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the piece with the given catalog id, if it exists.
    pub const fn from_id(id: u8) -> Option<Piece> {
        if (id as usize) < PIECE_COUNT {
            Some(Piece(id))
        } else {
            None
        }
    }

    pub const fn new(shape: Shape, color: Color, height: Height, filling: Filling) -> Piece {
        let mut id = 0u8;
        if matches!(shape, Shape::Square) {
            id |= Attribute::Shape.bit();
        }
        if matches!(color, Color::Light) {
            id |= Attribute::Color.bit();
        }
        if matches!(height, Height::High) {
            id |= Attribute::Height.bit();
        }
        if matches!(filling, Filling::Full) {
            id |= Attribute::Filling.bit();
        }
        Piece(id)
    }

    #[inline(always)]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn shape(self) -> Shape {
        if self.0 & Attribute::Shape.bit() == 0 {
            Shape::Round
        } else {
            Shape::Square
        }
    }

    pub const fn color(self) -> Color {
        if self.0 & Attribute::Color.bit() == 0 {
            Color::Dark
        } else {
            Color::Light
        }
    }

    pub const fn height(self) -> Height {
        if self.0 & Attribute::Height.bit() == 0 {
            Height::Low
        } else {
            Height::High
        }
    }

    pub const fn filling(self) -> Filling {
        if self.0 & Attribute::Filling.bit() == 0 {
            Filling::Empty
        } else {
            Filling::Full
        }
    }

    /// Attributes on which `self` and `other` hold the same value.
    #[inline(always)]
    pub const fn shared_with(self, other: Piece) -> AttributeMask {
        AttributeMask(!(self.0 ^ other.0) & AttributeMask::ALL.0)
    }

    /// Shared-attribute count, 0..=4 (4 only for the same piece).
    #[inline(always)]
    pub const fn overlap(self, other: Piece) -> u8 {
        self.shared_with(other).count() as u8
    }

    /// Whether this piece agrees with `reference` on at least one attribute in `mask`.
    #[inline(always)]
    pub const fn matches_any(self, reference: Piece, mask: AttributeMask) -> bool {
        self.shared_with(reference).0 & mask.0 != 0
    }
}

impl TryFrom<u8> for Piece {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Piece::from_id(id).ok_or_else(|| format!("piece id {id} out of range"))
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece.0
    }
}

/// Attributes shared by every piece in `pieces`. Empty input shares everything.
pub fn common_attributes(pieces: &[Piece]) -> AttributeMask {
    let mut all_set = 0b1111u8;
    let mut all_clear = 0b1111u8;
    for p in pieces {
        all_set &= p.0;
        all_clear &= !p.0;
    }
    AttributeMask((all_set | all_clear) & AttributeMask::ALL.0)
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
