use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

use crate::dir::SoulDirectory;

const NOISY_TARGETS: [&str; 7] = [
    "wgpu_core",
    "wgpu_hal",
    "wgpu",
    "naga",
    "iced_wgpu",
    "cosmic_text",
    "hyper_util",
];

#[derive(Debug)]
pub enum LoggerError {
    LogFile(io::Error),
    Init(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogFile(e) => write!(f, "Failed to open log file: {}", e),
            Self::Init(e) => write!(f, "Failed to install logger: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Level used when the configuration does not name a valid one.
pub fn level_from_config(log_level: Option<&str>, debug: bool) -> LevelFilter {
    if debug {
        return LevelFilter::DEBUG;
    }
    log_level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO)
}

fn targets(level: LevelFilter) -> filter::Targets {
    NOISY_TARGETS
        .iter()
        .fold(filter::Targets::new().with_default(level), |t, target| {
            t.with_target(*target, Level::WARN)
        })
}

/// Installs the global subscriber: stdout and `<datadir>/soul-gui.log`.
pub fn setup_logger(datadir: &SoulDirectory, level: LevelFilter) -> Result<(), LoggerError> {
    let file = open_log_file(datadir).map_err(LoggerError::LogFile)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Arc::new(file))
        .with_filter(targets(level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stdout)
        .with_filter(targets(level));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

fn open_log_file(datadir: &SoulDirectory) -> Result<File, io::Error> {
    datadir.init()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(datadir.log_file())
}
