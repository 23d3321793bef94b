//! # Logger
//!
//! Logging bootstrap shared by Tally binaries.
//!
//! Console output goes to **stderr** so that command output on stdout stays
//! machine readable. An optional rolling file sink uses a non-blocking writer
//! and may emit JSON lines. `RUST_LOG` is honoured on top of the configured level.
//!
//! ## Example
//!
//! ```rust
//! # use tally_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("tally")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    ansi: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            ansi: true,
            directory: None,
            level: LevelFilter::WARN,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Type-state builder for the global tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available, and the
/// file-only knobs appear after [`LoggerBuilder::directory`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    config: LoggerConfig,
    name: N,
    sink: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { config: self.config, name: Named(name.into()), sink: PhantomData }
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// Maximum number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes the file sink as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit directive set (e.g. `tally_lending=debug`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Toggles ANSI colouring of the console sink.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Enables the rolling file sink in `directory`.
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut config = self.config;
        config.directory = Some(directory.into());
        LoggerBuilder { config, name: self.name, sink: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: it owns the
    /// non-blocking file worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter or when no sink is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.config, &name)?;

        let filter = env_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(
                layer()
                    .compact()
                    .with_ansi(self.config.ansi)
                    .with_writer(std::io::stderr)
                    .boxed(),
            );
        }

        let guard = match self.config.directory {
            Some(directory) => {
                fs::create_dir_all(&directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(&directory)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.config.json { file.json().boxed() } else { file.boxed() });

                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging sink enabled; enable the console or a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        tracing::debug!(logger = %name, "Logging initialized");
        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// ```rust
    /// use tally_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder().name("tally").level(LevelFilter::INFO).init().unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed, sink: PhantomData }
    }

    /// Whether a file sink (and therefore a worker guard) is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing file logs before shutdown");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());

    match &config.env_filter {
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
        None => Ok(builder.from_env_lossy()),
    }
}
