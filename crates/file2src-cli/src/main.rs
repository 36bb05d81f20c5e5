mod cli;
mod commands;

use cli::{EncodeParams, LogParams, build_cli};
use log::LevelFilter;

fn main() {
    let mut cmd = build_cli();
    let matches = cmd.get_matches_mut();

    init_logging(LogParams::from_matches(&matches).level());

    if matches.get_flag("list_langs") {
        commands::langs::run();
        return;
    }

    match EncodeParams::from_matches(&matches).into_args() {
        Some(args) => commands::encode::run(args),
        None => {
            eprint!("{}", cmd.render_help());
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; stdout carries only the generated source.
fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    );

    // Bare messages unless debugging.
    if level < LevelFilter::Debug {
        builder
            .format_timestamp(None)
            .format_level(false)
            .format_target(false);
    }

    builder.init();
}
