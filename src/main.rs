//! treecat - print project directory trees and concatenate source files
//!
//! treecat provides:
//! - Directory indexing with fixed exclusion rules
//! - Box-drawing tree rendering
//! - Concatenated dumps of every matching source file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
