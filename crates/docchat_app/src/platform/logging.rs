//! Platform logging initialization for docchat_app.
//!
//! The terminal belongs to the transcript, so logs go to `./docchat.log` in
//! the current working directory; if that file cannot be created we fall
//! back to stderr.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./docchat.log";

pub(crate) fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match File::create(LOG_FILENAME) {
        Ok(file) => WriteLogger::new(level, config, file),
        Err(err) => {
            eprintln!("Warning: could not create {LOG_FILENAME}: {err}; logging to stderr");
            TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        }
    };

    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
