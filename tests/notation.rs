//! Tests the piece, square and move notation (chess module)
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod squares {
    use std::convert::TryFrom;
    use mailbox::chess::{Square, Error, square_name};

    #[test]
    fn every_index_round_trips_through_its_name() {
        for index in 0..64 {
            let name = square_name(index).unwrap();
            assert_eq!(name.len(), 2);
            assert_eq!(name.parse::<Square>().unwrap() as usize, index);
        }
    }

    #[test]
    fn every_name_round_trips_through_its_index() {
        for file in "abcdefgh".chars() {
            for rank in "12345678".chars() {
                let name = format!("{}{}", file, rank);
                let sq: Square = name.parse().unwrap();
                assert_eq!(square_name(sq.index()).unwrap(), name);
            }
        }
    }

    #[test]
    fn corners() {
        assert_eq!(square_name(0).unwrap(), "a1");
        assert_eq!(square_name(7).unwrap(), "h1");
        assert_eq!(square_name(56).unwrap(), "a8");
        assert_eq!(square_name(63).unwrap(), "h8");
    }

    #[test]
    fn errors() {
        assert_eq!(square_name(64), Err(Error::RangeError));
        assert_eq!(Square::try_from(100), Err(Error::RangeError));
        assert_eq!("j1".parse::<Square>(), Err(Error::ParseError));
        assert_eq!("e0".parse::<Square>(), Err(Error::ParseError));
        assert_eq!("e".parse::<Square>(), Err(Error::ParseError));
    }
}

mod pieces {
    use std::convert::TryFrom;
    use mailbox::chess::{Piece, Color, PieceType, FEN_PIECES, PIECE_VALUES};

    #[test]
    fn encoding() {
        assert_eq!(Piece::new(Color::White, PieceType::King).code(), 6);
        assert_eq!(Piece::new(Color::Black, PieceType::Pawn).code(), 9);

        let codes: Vec<u8> = FEN_PIECES.iter().map(|&(_, pc)| pc.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn fen_tables_are_inverses() {
        for code in 0..16u8 {
            if let Ok(pc) = Piece::try_from(code) {
                match pc.fen_char() {
                    Some(c) => assert_eq!(Piece::from_fen_char(c).unwrap(), pc),
                    None => assert!(pc.is_empty()),
                }
            }
        }
        for &(c, _) in &FEN_PIECES {
            assert_eq!(Piece::from_fen_char(c).unwrap().fen_char(), Some(c));
        }
    }

    #[test]
    fn letter_case_gives_color() {
        for &(c, pc) in &FEN_PIECES {
            let expected = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
            assert_eq!(pc.color(), Some(expected));
        }
    }

    #[test]
    fn values() {
        assert_eq!(PIECE_VALUES, [0, 100, 320, 330, 500, 900, 20000]);
        assert_eq!(Piece::BLACK_QUEEN.value(), 900);
        assert_eq!(Piece::EMPTY.value(), 0);
    }
}

mod moves {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use mailbox::chess::{Move, Square, Piece, PieceType, Error};
    use mailbox::config::NotationConfig;

    fn hash_of(mv: &Move) -> u64 {
        let mut hasher = DefaultHasher::new();
        mv.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn e2e4() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.start, Square::E2);
        assert_eq!(mv.end, Square::E4);
        assert_eq!(mv.promotion, PieceType::Empty);
        assert_eq!(Move::new(Square::E2, Square::E4).to_uci(), "e2e4");
    }

    #[test]
    fn round_trip_without_promotion() {
        for start in Square::all() {
            for &end in &[Square::A1, Square::D5, Square::H8] {
                let mv = Move::new(start, end);
                let parsed: Move = mv.to_uci().parse().unwrap();
                assert_eq!(parsed.start, mv.start);
                assert_eq!(parsed.end, mv.end);
                assert_eq!(parsed.promotion, PieceType::Empty);
            }
        }
    }

    #[test]
    fn promotions() {
        for &(letter, piece_type) in &[('q', PieceType::Queen), ('r', PieceType::Rook),
                                       ('b', PieceType::Bishop), ('n', PieceType::Knight)] {
            let text = format!("a7a8{}", letter);
            let mv: Move = text.parse().unwrap();
            assert_eq!(mv.promotion, piece_type);
            assert_eq!(mv.to_uci(), text);
            assert_eq!(mv.to_uci().len(), 5);
        }
    }

    #[test]
    fn metadata_is_not_identity() {
        let parsed: Move = "e1g1".parse().unwrap();
        let mut generated = Move::castle(Square::E1, Square::G1);
        generated.captured = Piece::BLACK_ROOK;
        generated.is_en_passant = true;

        assert_eq!(parsed, generated);
        assert_eq!(hash_of(&parsed), hash_of(&generated));
    }

    #[test]
    fn strict_and_permissive() {
        let strict = NotationConfig::strict();
        let permissive = NotationConfig::default();

        assert_eq!(Move::parse_uci("b2b1z", &strict), Err(Error::InvalidPromotion));
        assert_eq!(Move::parse_uci("b2b1z", &permissive).unwrap(),
            Move::new(Square::B2, Square::B1));
        assert_eq!(Move::parse_uci("b2b", &permissive), Err(Error::ParseError));
    }

    #[test]
    fn unterminated_line_from_a_stream() {
        let strict = NotationConfig::strict();
        let permissive = NotationConfig::default();

        assert_eq!(Move::parse_uci("e7e8\n", &permissive).unwrap().promotion, PieceType::Empty);
        assert_eq!(Move::parse_uci("e7e8\n", &strict), Err(Error::InvalidPromotion));
        assert_eq!(Move::parse_uci("e7e8\n\n", &permissive), Err(Error::ParseError));
    }
}

mod config {
    use mailbox::config::{NotationConfig, PromotionParsing};

    #[test]
    fn read_from_yaml_text() {
        let config = NotationConfig::from_yaml("promotion: strict\n").unwrap();
        assert_eq!(config.promotion, PromotionParsing::Strict);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(NotationConfig::from_yaml("promotion: [strict").is_err());
        assert!(NotationConfig::from_yaml("promotion: 3").is_err());
    }
}
