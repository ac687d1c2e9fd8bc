//! Direction offsets on the 64-cell mailbox board
//!
//! Each offset is added to a square's index to reach a neighboring or aligned square. The
//! offsets know nothing about board edges: stepping `EAST` from the h-file lands on the a-file of
//! the next rank, and stepping off the top or bottom leaves `0..64` entirely. A move generator
//! using these tables must reject a step whose file changes by more than the direction allows.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::PieceType;

#[allow(missing_docs)]
pub const NORTH: i8 = 8;
#[allow(missing_docs)]
pub const SOUTH: i8 = -8;
#[allow(missing_docs)]
pub const EAST: i8 = 1;
#[allow(missing_docs)]
pub const WEST: i8 = -1;
#[allow(missing_docs)]
pub const NORTH_EAST: i8 = NORTH + EAST;
#[allow(missing_docs)]
pub const NORTH_WEST: i8 = NORTH + WEST;
#[allow(missing_docs)]
pub const SOUTH_EAST: i8 = SOUTH + EAST;
#[allow(missing_docs)]
pub const SOUTH_WEST: i8 = SOUTH + WEST;

/// Knight jumps: two squares in one cardinal direction, then one square sideways
pub const KNIGHT_OFFSETS: [i8; 8] = [
    NORTH + NORTH + EAST,   // +17
    NORTH + NORTH + WEST,   // +15
    SOUTH + SOUTH + EAST,   // -15
    SOUTH + SOUTH + WEST,   // -17
    EAST + EAST + NORTH,    // +10
    EAST + EAST + SOUTH,    // -6
    WEST + WEST + NORTH,    // +6
    WEST + WEST + SOUTH,    // -10
];

/// Single king steps in all eight directions
pub const KING_OFFSETS: [i8; 8] = [
    NORTH, SOUTH, EAST, WEST,
    NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];

/// Rook sliding directions
pub const ROOK_DIRECTIONS: [i8; 4] = [NORTH, SOUTH, EAST, WEST];

/// Bishop sliding directions
pub const BISHOP_DIRECTIONS: [i8; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];

/// Queen sliding directions: the rook directions followed by the bishop directions
pub const QUEEN_DIRECTIONS: [i8; 8] = [
    ROOK_DIRECTIONS[0], ROOK_DIRECTIONS[1], ROOK_DIRECTIONS[2], ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0], BISHOP_DIRECTIONS[1], BISHOP_DIRECTIONS[2], BISHOP_DIRECTIONS[3],
];

impl PieceType {
    /// Returns `true` for pieces that keep moving along a direction until blocked
    pub fn is_sliding(self) -> bool {
        match self {
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => true,
            _ => false,
        }
    }

    /// Returns the offsets the piece moves along.
    ///
    /// Sliding pieces repeat these as directions; knights and kings take one step. Pawns move
    /// differently per color and `Empty` doesn't move, so both return an empty slice.
    pub fn offsets(self) -> &'static [i8] {
        match self {
            PieceType::Knight => &KNIGHT_OFFSETS,
            PieceType::Bishop => &BISHOP_DIRECTIONS,
            PieceType::Rook => &ROOK_DIRECTIONS,
            PieceType::Queen => &QUEEN_DIRECTIONS,
            PieceType::King => &KING_OFFSETS,
            PieceType::Empty | PieceType::Pawn => &[],
        }
    }
}
