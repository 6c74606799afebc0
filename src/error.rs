use std::time::Duration;

use thiserror::Error;

/// Failures talking to the container runtime
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("container runtime unreachable: {0}")]
    Unreachable(#[from] bollard::errors::Error),

    #[error("malformed response from container runtime: {0}")]
    Malformed(String),

    #[error("failed to run `{command}` for project {project}: {source}")]
    Compose {
        project: String,
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures delivering an alert batch
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("alert send timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to run mail command: {0}")]
    Io(#[from] std::io::Error),

    #[error("mail command rejected the message: {0}")]
    Rejected(String),
}

/// Failures loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("key {token:?} is bound to both {first:?} and {second:?}")]
    DuplicateKey {
        token: String,
        first: String,
        second: String,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failures driving the terminal multiplexer
#[derive(Debug, Error)]
pub enum MultiplexerError {
    #[error("failed to run tmux: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("tmux {command} exited with {status}")]
    Failed { command: String, status: String },
}
