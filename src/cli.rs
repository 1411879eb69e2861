//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;

use crate::core::config::ScanConfig;

/// treecat - print project trees and concatenate source files for review.
#[derive(Parser, Debug)]
#[command(name = "treecat")]
#[command(
    author,
    version,
    about,
    long_about = r#"treecat scans the fixed project roots (app, components, data, hooks, types)
under the current directory and prints:

1. a directory tree for every root that exists
2. a notice for every root that does not
3. the contents of every .tsx file found, separated by dashed lines
4. a closing instruction block for the reader

Directories named "ui" and the files layout.tsx, globals.tsx and globals.css
are skipped. The output is meant to be pasted into a chat or review tool.

Examples:
    treecat > context.txt
    treecat -vv 2>scan.log | pbcopy
"#
)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        long_help = "Increase the log level on stderr: -v for info, -vv for debug, -vvv for trace.\n\n\
Logging never changes what is printed to stdout."
    )]
    pub verbose: u8,

    /// Quiet mode (no diagnostics).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Turn off all logging on stderr, warnings included."
    )]
    pub quiet: bool,
}

fn setup_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", level);
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.quiet, cli.verbose);
    crate::flows::dump::run_dump(&ScanConfig::default())
}
