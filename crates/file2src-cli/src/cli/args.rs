//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that is composed into the command in
//! `commands.rs`.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, value_parser};
use file2src_core::DEFAULT_COLUMNS;

/// Input file to encode (positional).
///
/// Not marked required: a missing input prints usage and exits non-zero,
/// the same as `-h`.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("File whose bytes are encoded")
}

/// Usage (-h). Exits with a failure status, unlike clap's built-in help.
pub fn help_arg() -> Arg {
    Arg::new("help")
        .short('h')
        .long("help")
        .action(ArgAction::SetTrue)
        .help("Print usage")
}

/// Array identifier (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .default_value("data")
        .value_parser(NonEmptyStringValueParser::new())
        .help("Name of the created array")
}

/// Element type (-t/--type).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .value_parser(NonEmptyStringValueParser::new())
        .help("Element type of the created array (default depends on --lang)")
}

/// Output dialect (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .default_value("c")
        .help("Output language (see --list-langs)")
}

/// Prefix file (-p/--prefix-file).
pub fn prefix_file_arg() -> Arg {
    Arg::new("prefix_file")
        .short('p')
        .long("prefix-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File inserted verbatim at the start of the output")
}

/// Prefix text (-P/--prefix-text).
pub fn prefix_text_arg() -> Arg {
    Arg::new("prefix_text")
        .short('P')
        .long("prefix-text")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Escaped text inserted after the prefix file (e.g. '#pragma once\\n')")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of stdout")
}

/// Null terminator (-z/--null-terminate).
pub fn null_terminate_arg() -> Arg {
    Arg::new("null_terminate")
        .short('z')
        .long("null-terminate")
        .action(ArgAction::SetTrue)
        .help("Place a zero byte at the end of the data (extends the length by 1)")
}

/// Elements per line (--columns).
pub fn columns_arg() -> Arg {
    Arg::new("columns")
        .long("columns")
        .value_name("N")
        .value_parser(value_parser!(u16).range(1..=4096))
        .help(format!("Array elements per line [default: {DEFAULT_COLUMNS}]"))
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}

/// List dialects (--list-langs).
pub fn list_langs_arg() -> Arg {
    Arg::new("list_langs")
        .long("list-langs")
        .action(ArgAction::SetTrue)
        .help("List supported output languages and exit")
}
