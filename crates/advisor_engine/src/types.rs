//! # Engine Core Types
//!
//! ## Overview
//!
//! The search core never touches the rules provider's internal representation. Everything it
//! needs to reason about a position is expressed with the small value types in this module:
//!
//! 1. **[`Color`]** - the two sides, with `!color` giving the opponent
//! 2. **[`PieceKind`] / [`Piece`]** - what stands on a square, plus base material values
//! 3. **[`Square`]** - a board coordinate packed into one byte (`rank * 8 + file`, a1 = 0)
//! 4. **[`Move`]** - from-square, to-square and optional promotion kind
//! 5. **[`Score`]** - a perspective-relative evaluation
//!
//! ### Why `f64` scores?
//!
//! Every evaluation term is a multiple of half a centipawn (the semi-open rook file bonus is
//! 7.5), so binary floating point represents all of them exactly and negation is exact. That
//! keeps the `evaluate(P, White) == -evaluate(P, Black)` symmetry bit-for-bit, and lets the
//! root window be a true `(-inf, +inf)`.
//!
//! ### Move identity
//!
//! [`Move`] derives `Ord` over `(from, to, promotion)` in that field order. Castling is
//! expressed as the king's two-square step (`e1g1`), the same way a UCI string spells it.

use std::fmt;
use std::ops::Not;

/// Perspective-relative evaluation in centipawns
pub type Score = f64;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Parse a color label; `white` in any case is White, everything else is Black
    pub fn from_label(label: &str) -> Color {
        if label.eq_ignore_ascii_case("white") {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Rank direction pawns of this color advance in
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Base material value in centipawns
    pub const fn centipawns(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    pub fn value(self) -> Score {
        Score::from(self.centipawns())
    }

    /// Lower-case letter used for promotions in move strings
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == letter.to_ascii_lowercase())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}

/// Board square, `rank * 8 + file` with a1 = 0 and h8 = 63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const D4: Square = Square::from_coords(3, 3);
    pub const E4: Square = Square::from_coords(4, 3);
    pub const D5: Square = Square::from_coords(3, 4);
    pub const E5: Square = Square::from_coords(4, 4);

    /// Build a square from zero-based file and rank; both must be below 8
    pub const fn from_coords(file: u8, rank: u8) -> Square {
        Square(rank * 8 + file)
    }

    /// Parse algebraic notation such as `e4`
    pub fn from_name(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square::from_coords(file as u8 - b'a', rank as u8 - b'1'))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Square shifted by a file/rank delta, `None` when it leaves the board
    pub fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let file = self.file() as i8 + files;
        let rank = self.rank() as i8 + ranks;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::from_coords(file as u8, rank as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

/// Candidate transition between two squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Parse a UCI move string such as `e2e4` or `e7e8q`
    pub fn from_uci(text: &str) -> Option<Move> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let from = Square::from_name(&text[0..2])?;
        let to = Square::from_name(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            Some(letter) => Some(PieceKind::from_letter(letter)?),
            None => None,
        };
        Some(Move::new(from, to, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinates() {
        let e4 = Square::from_name("e4").unwrap();
        assert_eq!(e4, Square::E4);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::from_name("i1"), None);
        assert_eq!(Square::from_name("a9"), None);
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let a1 = Square::from_coords(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 1), Square::from_name("b2"));
        assert_eq!(Square::from_name("h8").unwrap().offset(0, 1), None);
    }

    #[test]
    fn test_move_uci_round_trip() {
        let mv = Move::from_uci("e7e8q").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "e7e8q");
        assert!(Move::from_uci("e7e8x").is_none());
        assert!(Move::from_uci("e2").is_none());
    }

    #[test]
    fn test_move_ordering_by_from_to_promotion() {
        let a = Move::from_uci("a2a3").unwrap();
        let b = Move::from_uci("a2a4").unwrap();
        let c = Move::from_uci("b7b8n").unwrap();
        let d = Move::from_uci("b7b8q").unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(c < d, "promotion kind breaks ties");
    }

    #[test]
    fn test_color_label_parsing() {
        assert_eq!(Color::from_label("WHITE"), Color::White);
        assert_eq!(Color::from_label("black"), Color::Black);
        assert_eq!(Color::from_label("purple"), Color::Black);
        assert_eq!(!Color::White, Color::Black);
    }
}
