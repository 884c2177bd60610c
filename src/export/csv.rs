use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Header used for every generated timing CSV.
const TIME_TAKEN_HEADER: &str = "Time Taken (ms)";

/// Write the extracted values, one per row, creating or truncating `path`.
/// An empty value list still produces the header row.
pub fn write_times(path: &Path, times: &[u64]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([TIME_TAKEN_HEADER])?;

    for ms in times {
        wtr.write_record([ms.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
