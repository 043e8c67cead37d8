use anyhow::{Context, Result};
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::path::Path;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of `-v` flags and the `-q` flag
    ///
    /// Quiet wins over any number of `-v`.
    pub fn from_flags(occurrences: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Warning;
        }
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Initialise the logger
///
/// Console output is coloured by level and carries only the message, since
/// the per-file progress lines are the main user-facing output. When a log
/// file is given, every record is also appended there with a timestamp and
/// the module target.
pub fn init_logger(verbosity: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let base_logger = Dispatch::new().level(verbosity.to_level_filter());

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let use_colors = atty::is(atty::Stream::Stderr);
    let console_logger = Dispatch::new()
        .format(move |out, message, record| {
            if use_colors {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors_line.get_color(&record.level()).to_fg_str(),
                    message
                ))
            } else {
                out.finish(format_args!("{message}"))
            }
        })
        .chain(std::io::stderr());

    let dispatch = match log_file {
        Some(path) => {
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let file_logger = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file);
            base_logger.chain(file_logger).chain(console_logger)
        }
        None => base_logger.chain(console_logger),
    };

    dispatch.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}
