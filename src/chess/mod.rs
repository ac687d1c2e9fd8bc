//! The `chess` module defines how pieces, squares and moves are encoded, and how those encodings
//! translate to and from algebraic square names, FEN piece letters and UCI move text.
//!
//! Squares index a flat 64-cell mailbox board as `rank * 8 + file`, so `a1` is `0` and `h8` is
//! `63`. A piece is a single small integer, `color * 8 + piece_type`, with `0` meaning an empty
//! square.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops;
use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use mailbox::chess::Color;
    /// assert_eq!(!Color::White, Color::Black);
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(Error::ParseError),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl TryFrom<usize> for Color {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Color>(value as u8)) }
        } else {
            Err(Error::RangeError)
        }
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of a chess piece, or `Empty` for a square with no piece on it
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PieceType {
    Empty = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// The number of piece types, including `Empty`
    pub const COUNT: usize = PieceType::King as usize + 1;

    /// Returns the value of the piece type in centipawns.
    ///
    /// The king's value is a sentinel large enough to outweigh any material balance.
    pub fn value(self) -> i32 {
        PIECE_VALUES[self as usize]
    }

    /// Returns `true` for `Empty`
    pub fn is_empty(self) -> bool {
        self == PieceType::Empty
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Empty => ".",
            PieceType::Pawn => "P",
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Rook => "R",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        }.fmt(f)
    }
}

impl FromStr for PieceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "P"|"p" => Ok(PieceType::Pawn),
            "N"|"n" => Ok(PieceType::Knight),
            "B"|"b" => Ok(PieceType::Bishop),
            "R"|"r" => Ok(PieceType::Rook),
            "Q"|"q" => Ok(PieceType::Queen),
            "K"|"k" => Ok(PieceType::King),
            _       => Err(Error::ParseError),
        }
    }
}

impl Default for PieceType {
    fn default() -> Self {
        PieceType::Empty
    }
}

impl TryFrom<usize> for PieceType {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, PieceType>(value as u8)) }
        } else {
            Err(Error::RangeError)
        }
    }
}

impl From<PieceType> for usize {
    fn from(value: PieceType) -> Self {
        value as Self
    }
}

/// Centipawn values indexed by `PieceType`
pub const PIECE_VALUES: [i32; PieceType::COUNT] = [
    0,      // Empty
    100,    // Pawn
    320,    // Knight
    330,    // Bishop
    500,    // Rook
    900,    // Queen
    20000,  // King
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The contents of one mailbox cell: a colored piece encoded as `color * 8 + piece_type`, or the
/// empty code `0`.
///
/// White pieces are encoded as `1` through `6` and black pieces as `9` through `14`. No other
/// value can be constructed.
///
/// ```
/// use mailbox::chess::{Piece, Color, PieceType};
///
/// let pc = Piece::new(Color::Black, PieceType::Pawn);
/// assert_eq!(pc.code(), 9);
/// assert_eq!(pc.color(), Some(Color::Black));
/// assert_eq!(pc.piece_type(), PieceType::Pawn);
/// assert_eq!(Piece::EMPTY.color(), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Piece(u8);

#[allow(missing_docs)]
impl Piece {
    pub const EMPTY: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceType::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceType::King);

    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceType::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceType::King);
}

impl Piece {
    /// Combines a color and a piece type into a single piece code.
    ///
    /// An `Empty` piece type always yields `Piece::EMPTY`, whatever the color.
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        match piece_type {
            PieceType::Empty => Piece::EMPTY,
            _ => Piece(color as u8 * 8 + piece_type as u8),
        }
    }

    /// Returns the raw piece code
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns `true` if this is the empty code
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the color of the piece, or `None` for an empty square
    pub fn color(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else {
            Some(Color::try_from((self.0 / 8) as usize).expect("INFALLIBLE"))
        }
    }

    /// Returns the type of the piece, which is `Empty` for an empty square
    pub fn piece_type(self) -> PieceType {
        PieceType::try_from((self.0 % 8) as usize).expect("INFALLIBLE")
    }

    /// Returns the piece's centipawn value
    pub fn value(self) -> i32 {
        self.piece_type().value()
    }

    /// Returns the FEN letter for the piece, or `None` for an empty square
    pub fn fen_char(self) -> Option<char> {
        FEN_PIECES.iter().find(|&&(_, pc)| pc == self).map(|&(c, _)| c)
    }

    /// Returns the piece for a FEN letter: uppercase for white, lowercase for black
    pub fn from_fen_char(c: char) -> Result<Piece> {
        FEN_PIECES.iter().find(|&&(ch, _)| ch == c).map(|&(_, pc)| pc).ok_or(Error::ParseError)
    }
}

impl fmt::Display for Piece {
    /// Formats the piece as its FEN letter, or `.` for an empty square
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fen_char().unwrap_or('.').fmt(f)
    }
}

impl FromStr for Piece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_fen_char(c),
            _ => Err(Error::ParseError),
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 | 1..=6 | 9..=14 => Ok(Piece(value)),
            _ => Err(Error::RangeError),
        }
    }
}

impl From<Piece> for u8 {
    fn from(value: Piece) -> Self {
        value.0
    }
}

/// FEN letters paired with the pieces they stand for
pub const FEN_PIECES: [(char, Piece); 12] = [
    ('P', Piece::WHITE_PAWN), ('N', Piece::WHITE_KNIGHT), ('B', Piece::WHITE_BISHOP),
    ('R', Piece::WHITE_ROOK), ('Q', Piece::WHITE_QUEEN), ('K', Piece::WHITE_KING),
    ('p', Piece::BLACK_PAWN), ('n', Piece::BLACK_KNIGHT), ('b', Piece::BLACK_BISHOP),
    ('r', Piece::BLACK_ROOK), ('q', Piece::BLACK_QUEEN), ('k', Piece::BLACK_KING),
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled from left to right from `White`'s perspective as
/// `A` through `H`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum File {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7,
}

impl File {
    /// The number of files
    pub const COUNT: usize = File::H as usize + 1;

    /// Returns the file for a lowercase file letter
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::try_from(c as usize - 'a' as usize).ok(),
            _ => None,
        }
    }

    /// Returns the lowercase file letter
    pub fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char().fmt(f)
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => File::from_char(c).ok_or(Error::ParseError),
            _ => Err(Error::ParseError),
        }
    }
}

impl TryFrom<usize> for File {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(Error::RangeError)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, labeled from nearest to farthest from `White`'s perspective
/// as `R1` through `R8`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Rank {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    R1 = 0, R2 = 1, R3 = 2, R4 = 3, R5 = 4, R6 = 5, R7 = 6, R8 = 7,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = Rank::R8 as usize + 1;

    /// Returns the rank for a digit from `1` to `8`
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::try_from(c as usize - '1' as usize).ok(),
            _ => None,
        }
    }

    /// Returns the rank digit
    pub fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char().fmt(f)
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c).ok_or(Error::ParseError),
            _ => Err(Error::ParseError),
        }
    }
}

impl TryFrom<usize> for Rank {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(Error::RangeError)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, labeled using the `File` and `Rank` as coordinates.
///
/// The discriminant is the mailbox index `rank * 8 + file`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Square {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A1 = 0o00, B1 = 0o01, C1 = 0o02, D1 = 0o03, E1 = 0o04, F1 = 0o05, G1 = 0o06, H1 = 0o07,
    A2 = 0o10, B2 = 0o11, C2 = 0o12, D2 = 0o13, E2 = 0o14, F2 = 0o15, G2 = 0o16, H2 = 0o17,
    A3 = 0o20, B3 = 0o21, C3 = 0o22, D3 = 0o23, E3 = 0o24, F3 = 0o25, G3 = 0o26, H3 = 0o27,
    A4 = 0o30, B4 = 0o31, C4 = 0o32, D4 = 0o33, E4 = 0o34, F4 = 0o35, G4 = 0o36, H4 = 0o37,
    A5 = 0o40, B5 = 0o41, C5 = 0o42, D5 = 0o43, E5 = 0o44, F5 = 0o45, G5 = 0o46, H5 = 0o47,
    A6 = 0o50, B6 = 0o51, C6 = 0o52, D6 = 0o53, E6 = 0o54, F6 = 0o55, G6 = 0o56, H6 = 0o57,
    A7 = 0o60, B7 = 0o61, C7 = 0o62, D7 = 0o63, E7 = 0o64, F7 = 0o65, G7 = 0o66, H7 = 0o67,
    A8 = 0o70, B8 = 0o71, C8 = 0o72, D8 = 0o73, E8 = 0o74, F8 = 0o75, G8 = 0o76, H8 = 0o77,
}

impl Square {
    /// The number of squares
    pub const COUNT: usize = Square::H8 as usize + 1;

    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(((rank as usize) << 3) + file as usize).expect("INFALLIBLE")
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        File::try_from((self as usize) & 7).expect("INFALLIBLE")
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        Rank::try_from((self as usize) >> 3).expect("INFALLIBLE")
    }

    /// Returns the mailbox index of the square
    pub fn index(self) -> usize {
        self as usize
    }

    /// Adds a direction offset to the square's index.
    ///
    /// Returns `None` if the result falls outside the board. Crossing from one edge file to the
    /// other is not detected: `Square::H1.offset(EAST)` is `Some(Square::A2)`. Callers walking a
    /// direction must compare files before and after the step themselves.
    pub fn offset(self, delta: i8) -> Option<Square> {
        let index = self as i16 + delta as i16;
        if index < 0 {
            None
        } else {
            Square::try_from(index as usize).ok()
        }
    }

    /// Returns an iterator over all squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(|i| Square::try_from(i).expect("INFALLIBLE"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.file().to_string() + &self.rank().to_string()).fmt(f)
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parses an algebraic square name. The name must be exactly a lowercase file letter
    /// followed by a rank digit.
    fn from_str(s: &str) -> Result<Self> {
        let c: Vec<_> = s.chars().collect();
        if c.len() == 2 {
            let file = File::from_char(c[0]).ok_or(Error::ParseError)?;
            let rank = Rank::from_char(c[1]).ok_or(Error::ParseError)?;
            Ok(Square::from_coord(file, rank))
        } else {
            Err(Error::ParseError)
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::A1
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(Error::RangeError)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

/// Returns the algebraic name of a raw mailbox index, failing with `Error::RangeError` if the
/// index is not on the board.
///
/// ```
/// use mailbox::chess::square_name;
/// assert_eq!(square_name(0).unwrap(), "a1");
/// assert_eq!(square_name(63).unwrap(), "h8");
/// assert!(square_name(64).is_err());
/// ```
pub fn square_name(index: usize) -> Result<String> {
    Ok(Square::try_from(index)?.to_string())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Castling-rights bits, combined into a mask by whatever tracks game state.
pub mod castling {
    /// White may castle king side
    pub const WHITE_KING_SIDE: u8 = 1;
    /// White may castle queen side
    pub const WHITE_QUEEN_SIDE: u8 = 2;
    /// Black may castle king side
    pub const BLACK_KING_SIDE: u8 = 4;
    /// Black may castle queen side
    pub const BLACK_QUEEN_SIDE: u8 = 8;
    /// All four castling rights
    pub const ALL: u8 = WHITE_KING_SIDE | WHITE_QUEEN_SIDE | BLACK_KING_SIDE | BLACK_QUEEN_SIDE;
}

/// The standard starting position in Forsyth-Edwards Notation
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod geometry;
mod moves;
pub use moves::Move;

pub mod error;
pub use error::{Error, Result};





#[cfg(test)]
mod square_tests {
    use std::convert::TryFrom;
    use super::{File, Rank, Square, square_name};

    #[test]
    fn index_is_rank_times_eight_plus_file() {
        assert_eq!(Square::A1 as usize, 0);
        assert_eq!(Square::H1 as usize, 7);
        assert_eq!(Square::A2 as usize, 8);
        assert_eq!(Square::E2 as usize, 12);
        assert_eq!(Square::E4 as usize, 28);
        assert_eq!(Square::H8 as usize, 63);
        for sq in Square::all() {
            assert_eq!(sq.index(), usize::from(sq.rank()) * 8 + usize::from(sq.file()));
        }
    }

    #[test]
    fn from_coord_matches_file_and_rank() {
        assert_eq!(Square::from_coord(File::E, Rank::R2), Square::E2);
        assert_eq!(Square::from_coord(File::A, Rank::R8), Square::A8);
        assert_eq!(Square::from_coord(File::H, Rank::R1), Square::H1);
        for sq in Square::all() {
            assert_eq!(Square::from_coord(sq.file(), sq.rank()), sq);
        }
    }

    #[test]
    fn display_and_fromstr_traits_round_trip() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(name, format!("{}{}", sq.file(), sq.rank()));
            assert_eq!(name.parse::<Square>().unwrap(), sq);
        }
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::A2.to_string(), "a2");
        assert_eq!(Square::H8.to_string(), "h8");
    }

    #[test]
    fn fromstr_trait_produces_errors_when_it_should() {
        assert!("".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("1".parse::<Square>().is_err());
        assert!("ax".parse::<Square>().is_err());
        assert!("x1".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("A1".parse::<Square>().is_err());
        assert!("a1x".parse::<Square>().is_err());
    }

    #[test]
    fn square_name_checks_range() {
        assert_eq!(square_name(8).unwrap(), "a2");
        assert!(square_name(Square::COUNT).is_err());
    }

    #[test]
    fn offset_stays_on_board_without_wrap_checking() {
        assert_eq!(Square::E2.offset(8), Some(Square::E3));
        assert_eq!(Square::E2.offset(-8), Some(Square::E1));
        assert_eq!(Square::A1.offset(-1), None);
        assert_eq!(Square::H8.offset(1), None);
        assert_eq!(Square::H1.offset(1), Some(Square::A2));
    }

    #[test]
    fn out_of_bound_usize_conversion_is_an_error() {
        assert!(Square::try_from(Square::COUNT).is_err());
    }
}
