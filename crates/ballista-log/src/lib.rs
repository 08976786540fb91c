//! Structured logging for Ballista.
//!
//! Console output with uptime timestamps and targets, plus a JSON log file in
//! debug builds. The filter comes from `RUST_LOG` when set, otherwise from
//! `debug.log_level` in the config, otherwise [`DEFAULT_FILTER`].

use std::path::{Path, PathBuf};

use ballista_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config supplies one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log written into the log directory.
pub const LOG_FILE_NAME: &str = "ballista.log";

/// Filter string for `config`, ignoring the environment.
pub fn config_filter(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Install the global tracing subscriber.
///
/// In debug builds with a `log_dir`, records are also written as JSON to
/// [`LOG_FILE_NAME`] inside it; the returned path points at that file.
/// Calling this again after a subscriber is installed is a no-op.
///
/// ```no_run
/// use ballista_config::Config;
/// use ballista_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<PathBuf> {
    let filter = config_filter(config);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
    {
        let log_path = log_dir.join(LOG_FILE_NAME);
        if let Ok(log_file) = std::fs::File::create(&log_path) {
            let file_layer = fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime())
                .json();

            return subscriber.with(file_layer).try_init().ok().map(|_| log_path);
        }
    }

    let _ = subscriber.try_init();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_config_filter_prefers_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,ballista_flight=trace".to_string();
        assert_eq!(config_filter(Some(&config)), "debug,ballista_flight=trace");
    }

    #[test]
    fn test_config_filter_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(config_filter(Some(&config)), DEFAULT_FILTER);
        assert_eq!(config_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filters_parse() {
        for filter in [
            "info",
            "debug,ballista_camera=trace",
            "warn,ballista_flight=debug,ballista_trajectory=trace",
            "error",
        ] {
            assert!(EnvFilter::try_new(filter).is_ok(), "failed to parse {filter}");
        }
    }

    // The only test in this crate that installs the global subscriber.
    #[test]
    fn test_init_creates_json_log_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let config = Config::default();

        let path = init_logging(Some(log_dir.as_path()), true, Some(&config));

        let expected = log_dir.join(LOG_FILE_NAME);
        assert_eq!(path.as_deref(), Some(expected.as_path()));
        assert!(expected.is_file());
    }
}
