use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

use env_logger::{Builder, Logger, Target, WriteStyle};
use log::{LevelFilter, Log, Metadata, Record};

use crate::env::EnvSnapshot;
use crate::error::Result;

/// Environment variable controlling the stderr sink's verbosity.
pub const STDERR_LEVEL_VAR: &str = "LOG_STDERR_LEVEL";

/// Environment variable controlling the file sink's verbosity.
pub const FILE_LEVEL_VAR: &str = "LOG_FILE_LEVEL";

const DEFAULT_LOG_FILE: &str = "clikit.log";

/// Resolved sink configuration for the process-wide logger.
///
/// Built from the environment once at startup and handed to [`init`], so
/// tests can construct settings directly instead of mutating the process
/// environment.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Verbosity threshold for the stderr sink.
    pub stderr_level: LevelFilter,

    /// Verbosity threshold for the file sink. `Off` disables the sink and
    /// no log file is created.
    pub file_level: LevelFilter,

    /// Where the file sink writes when enabled.
    pub file_path: PathBuf,
}

impl LogSettings {
    /// Read sink levels from `LOG_STDERR_LEVEL` and `LOG_FILE_LEVEL`.
    ///
    /// Unset or unparsable values fall back to `info` for stderr and `off`
    /// for the file sink.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            stderr_level: parse_level(env.lookup(STDERR_LEVEL_VAR)).unwrap_or(LevelFilter::Info),
            file_level: parse_level(env.lookup(FILE_LEVEL_VAR)).unwrap_or(LevelFilter::Off),
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

fn parse_level(raw: Option<&str>) -> Option<LevelFilter> {
    raw.and_then(|value| value.parse().ok())
}

/// Fans records out to the stderr sink and, when configured, the file sink.
/// Each sink applies its own level filter.
struct DualSink {
    stderr: Logger,
    file: Option<Logger>,
}

impl Log for DualSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.stderr.enabled(metadata)
            || self.file.as_ref().is_some_and(|sink| sink.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        self.stderr.log(record);
        if let Some(sink) = &self.file {
            sink.log(record);
        }
    }

    fn flush(&self) {
        self.stderr.flush();
        if let Some(sink) = &self.file {
            sink.flush();
        }
    }
}

static INIT: Once = Once::new();

/// Install the process-wide logger from the given settings.
///
/// Must run before argument parsing so early failures are still observable.
/// Idempotent: only the first call installs sinks; later calls are no-ops
/// and must not touch the log file the first call's sink is writing to.
/// Failure to create the log file propagates to the caller.
pub fn init(settings: &LogSettings) -> Result<()> {
    let mut outcome = Ok(());
    INIT.call_once(|| outcome = install(settings));
    outcome
}

fn install(settings: &LogSettings) -> Result<()> {
    let stderr = Builder::new()
        .filter_level(settings.stderr_level)
        .target(Target::Stderr)
        .build();

    let file = if settings.file_level == LevelFilter::Off {
        None
    } else {
        let sink = File::create(&settings.file_path)?;
        Some(
            Builder::new()
                .filter_level(settings.file_level)
                .target(Target::Pipe(Box::new(sink)))
                .write_style(WriteStyle::Never)
                .build(),
        )
    };

    let max_level = settings.stderr_level.max(settings.file_level);
    if log::set_boxed_logger(Box::new(DualSink { stderr, file })).is_ok() {
        log::set_max_level(max_level);
    }

    Ok(())
}
