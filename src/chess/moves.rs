//! Contains the structure representing a move, and its UCI notation
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use super::*;
use crate::config::{NotationConfig, PromotionParsing};

/// Promotion piece types paired with their UCI letters
const PROMOTION_CHARS: [(PieceType, char); 4] = [
    (PieceType::Queen, 'q'),
    (PieceType::Rook, 'r'),
    (PieceType::Bishop, 'b'),
    (PieceType::Knight, 'n'),
];

fn promotion_char(piece_type: PieceType) -> Option<char> {
    PROMOTION_CHARS.iter().find(|&&(pt, _)| pt == piece_type).map(|&(_, c)| c)
}

fn promotion_from_char(c: char) -> Option<PieceType> {
    let piece_type = c.to_string().parse::<PieceType>().ok()?;
    promotion_char(piece_type).map(|_| piece_type)
}

lazy_static! {
    // any fifth character is captured, even a line break
    static ref UCI_MOVE: Regex =
        Regex::new(r"(?s)^([a-h][1-8])([a-h][1-8])(.)?$").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move from one square to another.
///
/// Only `start`, `end` and `promotion` identify the move: two moves compare and hash equal when
/// those match, whatever their flags or captured piece. This lets a move parsed from UCI text be
/// found among moves produced by a generator.
///
/// `captured` is unknown until the move is applied to a board. Whoever applies it records the
/// removed piece there so the move can be undone later.
///
/// ```
/// use mailbox::chess::{Move, Square, PieceType};
///
/// let mv: Move = "e7e8q".parse()?;
/// assert_eq!(mv.start, Square::E7);
/// assert_eq!(mv.end, Square::E8);
/// assert_eq!(mv.promotion, PieceType::Queen);
/// assert_eq!(mv.to_uci(), "e7e8q");
/// # Ok::<(), mailbox::chess::Error>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Move {
    /// Origin square
    pub start: Square,
    /// Destination square
    pub end: Square,
    /// Piece type to promote to, or `Empty`
    pub promotion: PieceType,
    /// `true` if this is a king's castling move
    pub is_castle: bool,
    /// `true` if this is an en-passant capture
    pub is_en_passant: bool,
    /// The piece removed by this move, filled in when the move is made
    pub captured: Piece,
}

impl Move {
    /// Creates a plain move with no promotion or flags
    pub fn new(start: Square, end: Square) -> Move {
        Move { start, end, ..Default::default() }
    }

    /// Creates a pawn promotion
    pub fn promotion(start: Square, end: Square, promotion: PieceType) -> Move {
        Move { start, end, promotion, ..Default::default() }
    }

    /// Creates a king's castling move, given the king's origin and destination
    pub fn castle(start: Square, end: Square) -> Move {
        Move { start, end, is_castle: true, ..Default::default() }
    }

    /// Creates an en-passant capture
    pub fn en_passant(start: Square, end: Square) -> Move {
        Move { start, end, is_en_passant: true, ..Default::default() }
    }

    /// Returns `true` if the move promotes a pawn
    pub fn is_promotion(&self) -> bool {
        self.promotion != PieceType::Empty
    }

    /// Returns `true` if the move has been recorded as removing a piece
    pub fn is_capture(&self) -> bool {
        self.is_en_passant || !self.captured.is_empty()
    }

    /// Returns the move in UCI notation, such as `e2e4` or `e7e8q`
    pub fn to_uci(&self) -> String {
        self.to_string()
    }

    /// Parses a move from UCI notation.
    ///
    /// The text must be two square names optionally followed by a promotion letter, in either
    /// case. What happens to any other fifth character depends on `config`. The parsed move
    /// never has its flags set or a captured piece recorded; those depend on the board.
    pub fn parse_uci(s: &str, config: &NotationConfig) -> Result<Move> {
        let caps = UCI_MOVE.captures(s).ok_or_else(|| {
            trace!("malformed UCI move {:?}", s);
            Error::ParseError
        })?;

        let start = caps[1].parse()?;
        let end = caps[2].parse()?;

        let promotion = if let Some(m) = caps.get(3) {
            let c = m.as_str().chars().next().expect("INFALLIBLE");
            match (promotion_from_char(c), config.promotion) {
                (Some(piece_type), _) => piece_type,
                (None, PromotionParsing::Permissive) => {
                    debug!("ignoring promotion character {:?} in {:?}", c, s);
                    PieceType::Empty
                },
                (None, PromotionParsing::Strict) => return Err(Error::InvalidPromotion),
            }
        } else {
            PieceType::Empty
        };

        Ok(Move::promotion(start, end, promotion))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.promotion == other.promotion
    }
}

impl Eq for Move { }

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    /// Formats the move in UCI notation. A promotion to a pawn or king has no UCI letter and is
    /// written without one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.start.to_string() + &self.end.to_string();

        if let Some(c) = promotion_char(self.promotion) {
            s.push(c);
        }

        s.fmt(f)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Parses UCI notation, ignoring an unrecognized promotion letter
    fn from_str(s: &str) -> Result<Move> {
        Move::parse_uci(s, &NotationConfig::default())
    }
}
