//! Logging and tracing initialization.
//!
//! Renderer children write straight to the controlling terminal, so
//! juzcast's own logs can be diverted to a file (`LoggingConfig.file`) to
//! keep the live render output readable.

use std::sync::Arc;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// If the configured log file cannot be opened, logging falls back to
/// stderr with a notice rather than failing the run.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let log_file = config.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| eprintln!("Failed to open log file {}: {err}", path.display()))
            .ok()
    });

    match (config.json, log_file) {
        (true, Some(file)) => {
            let subscriber = builder.json().with_writer(Arc::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (true, None) => {
            let subscriber = builder.json().finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, Some(file)) => {
            let subscriber = builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, None) => {
            let subscriber = builder.finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juzcast.log");

        init_logging(&LoggingConfig {
            level: "info".to_string(),
            json: false,
            file: Some(path.clone()),
        });

        assert!(path.is_file());
    }

    #[test]
    fn test_unopenable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory component that does not exist; open fails, init must
        // still complete.
        init_logging(&LoggingConfig {
            level: "info".to_string(),
            json: true,
            file: Some(dir.path().join("missing").join("juzcast.log")),
        });
    }
}
