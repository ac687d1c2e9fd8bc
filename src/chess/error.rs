//! Defines the error types needed by the chess module
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by methods in the `chess` module
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cannot parse string: bad square name or malformed move text
    ParseError,
    /// Integer does not name a square, color, piece type or piece code
    RangeError,
    /// Unrecognized promotion letter in strict parsing mode
    InvalidPromotion,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            ParseError => "cannot parse string",
            RangeError => "integer out of range",
            InvalidPromotion => "invalid promotion piece",
        }.fmt(f)
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `chess` module
pub type Result<T> = std::result::Result<T, Error>;
