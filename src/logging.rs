use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// `<state dir>/compose-deck/logs`, falling back to the data dir and then
/// the working directory
pub fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("compose-deck")
        .join("logs")
}

/// Install the global subscriber writing to a daily rolling
/// `{binary}.log`. The log level comes from `RUST_LOG` and defaults to
/// `info`. Keep the returned guard alive for the life of the process.
pub fn init(binary: &str) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = tracing_appender::rolling::daily(log_dir(), format!("{binary}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init();

    guard
}
