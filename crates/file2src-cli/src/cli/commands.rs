//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
///
/// clap's own help flag is disabled so `-h` can exit with a failure status.
pub fn build_cli() -> Command {
    Command::new("file2src")
        .about(
            "Encodes a file as an array of bytes in a source file, \
             so data files can be compiled into an executable",
        )
        .version(clap::crate_version!())
        .disable_help_flag(true)
        .override_usage("file2src [OPTIONS] <INPUT>")
        .after_help(
            r#"EXAMPLES:
  file2src logo.png                        # C array on stdout
  file2src -n font -o font.h font.ttf      # custom name, written to file
  file2src -l go -n cart -o cart.go cart.bin
  file2src -z -P '#pragma once\n' msg.txt  # null-terminated, with a prefix line"#,
        )
        .arg(input_arg())
        .arg(help_arg())
        .arg(name_arg())
        .arg(type_arg())
        .arg(lang_arg())
        .arg(prefix_file_arg())
        .arg(prefix_text_arg())
        .arg(output_file_arg())
        .arg(null_terminate_arg())
        .arg(columns_arg())
        .arg(verbose_arg())
        .arg(list_langs_arg())
}
