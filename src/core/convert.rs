//! Batch conversion of player logs into per-player timing CSV files.

use crate::core::extract::TimeExtractor;
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Player indices covered by the fixed naming scheme.
pub const FIRST_PLAYER: u32 = 1;
pub const LAST_PLAYER: u32 = 9;

pub fn input_log_name(player: u32) -> String {
    format!("player_{player}.log")
}

pub fn output_csv_name(player: u32) -> String {
    format!("time_taken_player_{player}.csv")
}

/// Process every player log under `dir` in ascending player order.
///
/// A missing log is skipped with a notice and leaves no output file
/// behind for that player. Any other I/O failure aborts the whole run;
/// CSV files already written for earlier players stay on disk.
pub fn convert_all(dir: &Path) -> AppResult<()> {
    let extractor = TimeExtractor::new();

    for player in FIRST_PLAYER..=LAST_PLAYER {
        let input_name = input_log_name(player);
        let input_path = dir.join(&input_name);

        if !input_path.is_file() {
            messages::warning(format!("{input_name} does not exist. Skipping."));
            continue;
        }

        let file = File::open(&input_path)?;
        let times = extractor.scan(BufReader::new(file))?;

        let output_name = output_csv_name(player);
        export::csv::write_times(&dir.join(&output_name), &times)?;

        messages::success(format!(
            "Time values extracted and saved to {output_name}"
        ));
    }

    Ok(())
}
