use bollard::container::LogsOptions;
use bollard::Docker;
use futures_util::StreamExt;

use crate::error::GatewayError;

/// Get the last `tail` log lines of a container
pub async fn get_container_logs(
    docker: &Docker,
    container_id: &str,
    tail: usize,
    timestamps: bool,
) -> Result<Vec<String>, GatewayError> {
    let options = LogsOptions::<String> {
        stdout: true,
        stderr: true,
        tail: tail.to_string(),
        timestamps,
        ..Default::default()
    };

    let mut stream = docker.logs(container_id, Some(options));
    let mut logs = Vec::new();

    while let Some(result) = stream.next().await {
        let output = result?;
        logs.extend(clean_lines(&output.to_string()));
    }

    Ok(logs)
}

/// Split a log frame into printable, non-empty lines
fn clean_lines(frame: &str) -> Vec<String> {
    frame
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
