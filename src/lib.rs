//! logtimes library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod errors;
pub mod export;
pub mod ui;

use clap::Parser;
use cli::Cli;
use errors::AppResult;
use std::path::Path;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI (no operational flags; clap still handles --help/--version
    // and rejects stray arguments)
    let _cli = Cli::parse();

    // process the fixed player_1.log..player_9.log set in the current dir
    core::convert::convert_all(Path::new("."))
}
