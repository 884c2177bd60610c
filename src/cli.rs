use clap::Parser;

/// Command-line interface definition for logtimes
/// CLI application to extract per-player timing values into CSV
#[derive(Parser)]
#[command(
    name = "logtimes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract \"Time Taken\" values from player_1.log..player_9.log into per-player CSV files",
    long_about = None
)]
pub struct Cli {}
