//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use file2src_core::DEFAULT_COLUMNS;
use log::LevelFilter;

use crate::commands::encode::EncodeArgs;

pub struct EncodeParams {
    pub help: bool,
    pub input: Option<PathBuf>,
    pub name: String,
    pub elem_type: Option<String>,
    pub lang: String,
    pub prefix_file: Option<PathBuf>,
    pub prefix_text: Option<String>,
    pub output: Option<PathBuf>,
    pub null_terminate: bool,
    pub columns: usize,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            help: m.get_flag("help"),
            input: m.get_one::<PathBuf>("input").cloned(),

            // Array shape
            name: m
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| "data".to_string()),
            elem_type: m.get_one::<String>("type").cloned(),
            lang: m
                .get_one::<String>("lang")
                .cloned()
                .unwrap_or_else(|| "c".to_string()),
            null_terminate: m.get_flag("null_terminate"),
            columns: m
                .get_one::<u16>("columns")
                .map(|&n| usize::from(n))
                .unwrap_or(DEFAULT_COLUMNS),

            // Prefix and output
            prefix_file: m.get_one::<PathBuf>("prefix_file").cloned(),
            prefix_text: m.get_one::<String>("prefix_text").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }

    /// Convert to command args; `None` when usage should be printed instead.
    pub fn into_args(self) -> Option<EncodeArgs> {
        if self.help {
            return None;
        }
        Some(EncodeArgs {
            input: self.input?,
            name: self.name,
            elem_type: self.elem_type,
            lang: self.lang,
            prefix_file: self.prefix_file,
            prefix_text: self.prefix_text,
            output: self.output,
            null_terminate: self.null_terminate,
            columns: self.columns,
        })
    }
}

pub struct LogParams {
    pub verbose: u8,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
        }
    }

    /// Default log level; `RUST_LOG` still overrides it.
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
