//! Command-line inspector for the mailbox piece, square and move encodings.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::convert::TryFrom;
use std::fs::{read_to_string, File};
use std::path::{Path, PathBuf};
use clap::{App, Arg, SubCommand, AppSettings, crate_version};
use log::info;
use simplelog::{WriteLogger, LevelFilter, Config};
use mailbox::chess::{self, Move, Piece, Square, STARTING_FEN};
use mailbox::chess::geometry::{KNIGHT_OFFSETS, KING_OFFSETS};
use mailbox::chess::geometry::{ROOK_DIRECTIONS, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS};
use mailbox::config::{NotationConfig, PromotionParsing};

fn main() -> Result<(), Error> {
    let app_dir = dirs::home_dir()
        .map(|home| { home.join(".mailbox") })
        .unwrap_or_else(|| PathBuf::from("."));

    let matches =
        App::new("Mailbox")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Inspects mailbox square indices, piece codes and UCI moves.")
            .setting(AppSettings::SubcommandRequired)
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("mailbox.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Reads notation options from a YAML file \
                       (defaults to ~/.mailbox/config.yaml)"))
            .arg(Arg::with_name("strict")
                .long("strict")
                .global(true)
                .help("Rejects unrecognized promotion letters"))
            .subcommand(SubCommand::with_name("square")
                .about("Converts between square names and mailbox indices")
                .arg(Arg::with_name("squares")
                    .value_name("SQUARE")
                    .required(true)
                    .multiple(true)
                    .help("Square name (e.g. e4) or index (0-63)")))
            .subcommand(SubCommand::with_name("uci")
                .about("Parses moves in UCI notation")
                .arg(Arg::with_name("moves")
                    .value_name("MOVE")
                    .required(true)
                    .multiple(true)
                    .help("Move such as e2e4 or e7e8q")))
            .subcommand(SubCommand::with_name("piece")
                .about("Shows the code, color, type and value of FEN piece letters")
                .arg(Arg::with_name("pieces")
                    .value_name("LETTER")
                    .required(true)
                    .multiple(true)
                    .help("FEN piece letter (PNBRQK for white, pnbrqk for black)")))
            .subcommand(SubCommand::with_name("tables")
                .about("Prints the direction offset tables and the starting position"))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink())
    };

    let mut config = match matches.value_of_os("config") {
        Some(path) => read_config(&PathBuf::from(path))?,
        None => {
            let path = app_dir.join("config.yaml");
            if path.is_file() {
                read_config(&path)?
            } else {
                NotationConfig::default()
            }
        },
    };
    if matches.is_present("strict") {
        config.promotion = PromotionParsing::Strict;
    }
    info!("notation config: {:?}", config);

    match matches.subcommand() {
        ("square", Some(matches)) => {
            for arg in matches.values_of("squares").expect("INFALLIBLE") {
                let sq = match arg.parse::<usize>() {
                    Ok(index) => Square::try_from(index),
                    Err(_) => arg.parse::<Square>(),
                }.map_err(|err| Error(format!("{}: {}", arg, err)))?;
                println!("{:2} {} file={} rank={}", sq.index(), sq, sq.file(), sq.rank());
            }
        },
        ("uci", Some(matches)) => {
            for arg in matches.values_of("moves").expect("INFALLIBLE") {
                let mv = Move::parse_uci(arg.trim(), &config)
                    .map_err(|err| Error(format!("{}: {}", arg, err)))?;
                println!("{} start={} end={} promotion={}",
                    mv, mv.start.index(), mv.end.index(), mv.promotion);
            }
        },
        ("piece", Some(matches)) => {
            for arg in matches.values_of("pieces").expect("INFALLIBLE") {
                let pc = arg.parse::<Piece>()
                    .map_err(|err| Error(format!("{}: {}", arg, err)))?;
                let color = pc.color().map_or("-".to_owned(), |c| c.to_string());
                println!("{} code={:2} color={} type={:?} value={}",
                    pc, pc.code(), color, pc.piece_type(), pc.value());
            }
        },
        ("tables", Some(_)) => {
            println!("knight: {:?}", KNIGHT_OFFSETS);
            println!("king:   {:?}", KING_OFFSETS);
            println!("rook:   {:?}", ROOK_DIRECTIONS);
            println!("bishop: {:?}", BISHOP_DIRECTIONS);
            println!("queen:  {:?}", QUEEN_DIRECTIONS);
            println!("values: {:?}", chess::PIECE_VALUES);
            println!("start:  {}", STARTING_FEN);
        },
        _ => unreachable!(),
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<NotationConfig, Error> {
    let s = read_to_string(path).map_err(|err| Error(format!("{}: {}", path.display(), err)))?;
    NotationConfig::from_yaml(&s).map_err(|err| Error(format!("{}: {}", path.display(), err)))
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }
