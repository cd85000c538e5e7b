mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show heapdom info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("heapdom", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Tree { path, depth, root } => {
            commands::tree::run(path, *depth, root.as_deref(), &cli.global)
        }
        Command::Idom { path, object } => commands::idom::run(path, object, &cli.global),
        Command::Stats { path, top } => commands::stats::run(path, *top, &cli.global),
    }
}
