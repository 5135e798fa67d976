// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in logging setup. The operations in this crate only emit `trace!` events on their
//! no-op paths (rejected index, value not found); nothing is printed unless the caller
//! installs a subscriber, either with the functions here or with their own.

use crate::try_create_layers;
use miette::IntoDiagnostic;
use std::ops::Add;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "r3bl_arrays_log.txt";

/// Configure where the tracing output goes, and how verbose it is.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. The operations in this crate log at
///   [`tracing::Level::TRACE`].
///
/// Anything that converts into a `TracingConfig` can be passed to
/// [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`], and
/// configs can be composed with `+`:
///
/// ```
/// use r3bl_arrays::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config: TracingConfig = TracingConfig::from(LevelFilter::TRACE)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// assert_eq!(config.level_filter, LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "r3bl_arrays_log.txt".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
/// - `String` is the path of the log file, eg: `/tmp/arrays.log` or `arrays.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install this config as the global default subscriber. This can only be done once
    /// per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Install this config as the subscriber for the current thread, until the returned
    /// guard is dropped. Great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Global default subscriber, which once set, can't be unset or changed. Logging is
/// **disabled** by default, and passing a config with [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// See [`TracingConfig::install_global`].
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber. Returns [`None`] if the level filter is
/// [`LevelFilter::OFF`]. Drop the guard to uninstall it.
///
/// # Errors
///
/// See [`TracingConfig::install_thread_local`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter,
                TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two configs. The more verbose level filter wins, and the writer configs are
    /// merged with [`WriterConfig`]'s `+`.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two writer configs. `rhs` has higher specificity, so on a collision its
    /// value clobbers the one in `self`. [`WriterConfig::None`] on either side never
    /// clobbers anything.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision.
                (None, rhs) => rhs,
                (lhs, None) => lhs,
                (Display(display), File(file)) | (File(file), Display(display)) => {
                    DisplayAndFile(display, file)
                }

                // Collision on the display.
                (Display(_), Display(display)) => Display(display),
                (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),

                // Collision on the file.
                (File(_), File(file)) => File(file),
                (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),

                // Collision on both.
                (_, DisplayAndFile(display, file)) => DisplayAndFile(display, file),
            }
        }
    }
}
