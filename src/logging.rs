//! File logging setup
//!
//! The terminal belongs to the UI while the app runs, so log records go to a
//! file instead of stderr.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Default log location when none is given on the command line.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("clima.log")
}

/// Install a global logger writing to `path` (truncated on start).
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .add_filter_allow_str("clima")
        .build();
    WriteLogger::init(level, config, file).map_err(io::Error::other)
}

/// Initializes a logger for tests; no-ops if one is already installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
