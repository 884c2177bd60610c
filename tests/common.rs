#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn lt() -> Command {
    cargo_bin_cmd!("logtimes")
}

/// Create a unique empty working dir inside the system temp dir and remove
/// any leftover from a previous run
pub fn setup_work_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_logtimes", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create work dir");
    path
}

/// Write a player log fixture, one event per line
pub fn write_log(dir: &Path, player: u32, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(dir.join(format!("player_{player}.log")), content).expect("write log fixture");
}

pub fn csv_path(dir: &Path, player: u32) -> PathBuf {
    dir.join(format!("time_taken_player_{player}.csv"))
}

pub fn read_csv(dir: &Path, player: u32) -> String {
    fs::read_to_string(csv_path(dir, player)).expect("read generated csv")
}
