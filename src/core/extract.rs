//! Timing annotation matching.
//!
//! A timing annotation is a substring of a log line of the exact form
//! `Time Taken: <digits> ms`. Only the first annotation on a line counts.

use crate::errors::AppResult;
use regex::Regex;
use std::io::BufRead;

pub struct TimeExtractor {
    pattern: Regex,
}

impl TimeExtractor {
    pub fn new() -> Self {
        let pattern = Regex::new(r"Time Taken: (\d+) ms").unwrap();
        Self { pattern }
    }

    /// Match the first timing annotation on a line, if any.
    /// The digit group is guaranteed by the pattern; parsing can only fail
    /// on a value too large for u64, which aborts the run.
    pub fn match_line(&self, line: &str) -> AppResult<Option<u64>> {
        match self.pattern.captures(line) {
            Some(caps) => Ok(Some(caps[1].parse::<u64>()?)),
            None => Ok(None),
        }
    }

    /// Scan a reader line by line and collect every matched value in
    /// file order. Lines without an annotation are ignored.
    pub fn scan<R: BufRead>(&self, reader: R) -> AppResult<Vec<u64>> {
        let mut times = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(ms) = self.match_line(&line)? {
                times.push(ms);
            }
        }

        Ok(times)
    }
}

impl Default for TimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
