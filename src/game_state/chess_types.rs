//! Core value types for the mailbox position model.
//!
//! Everything here is a plain `Copy` value except `Board`, which is cloned
//! explicitly at every snapshot boundary so no two positions share storage.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side to move. `Light` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter for the kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a promotion choice. Case-insensitive; only `q`, `r`, `b`, `n` are accepted.
    pub fn from_promotion_char(ch: char) -> Result<Self, ChessError> {
        match ch.to_ascii_lowercase() {
            'q' => Ok(PieceKind::Queen),
            'r' => Ok(PieceKind::Rook),
            'b' => Ok(PieceKind::Bishop),
            'n' => Ok(PieceKind::Knight),
            _ => Err(ChessError::InvalidPromotion(ch)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// A board coordinate. Row 0 is the eighth rank, row 7 the first rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    row: u8,
}

impl Square {
    /// Returns `None` when either coordinate falls outside `0..8`.
    #[inline]
    pub const fn new(file: i8, row: i8) -> Option<Self> {
        if file < 0 || file > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Self {
                file: file as u8,
                row: row as u8,
            })
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Moves the square by a file and row delta, staying on the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_row: i8) -> Option<Self> {
        Self::new(self.file as i8 + d_file, self.row as i8 + d_row)
    }

    /// Square shade used by the same-colored-bishops draw rule.
    #[inline]
    pub const fn shade(self) -> u8 {
        (self.file + self.row) % 2
    }

    /// All 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |file| Square { file, row }))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        kingside: true,
        queenside: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        kingside: false,
        queenside: false,
    };

    #[inline]
    pub fn revoke_all(&mut self) {
        *self = CastlingRights::NONE;
    }

    /// Clears the right whose rook starts on `file` (0 = queenside, 7 = kingside).
    #[inline]
    pub fn revoke_for_rook_file(&mut self, file: u8) {
        match file {
            0 => self.queenside = false,
            7 => self.kingside = false,
            _ => {}
        }
    }
}

/// Fixed 8x8 grid of optional pieces, indexed `[row][file]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.file() as usize] = piece;
    }

    /// Removes and returns the occupant of `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Raw grid rows, row 0 (eighth rank) first.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }
}
