use bollard::container::{Stats, StatsOptions};
use bollard::Docker;
use futures_util::StreamExt;

use crate::error::GatewayError;
use crate::models::StatsSample;

/// Get a stats sample for a container.
///
/// Not one-shot: the daemon waits for a second reading so the previous
/// CPU counters are populated and the usage delta is meaningful.
pub async fn get_container_stats(docker: &Docker, container_id: &str) -> Result<StatsSample, GatewayError> {
    let options = StatsOptions {
        stream: false,
        one_shot: false,
    };

    let mut stream = docker.stats(container_id, Some(options));

    match stream.next().await {
        Some(result) => Ok(sample_from_stats(&result?)),
        None => Err(GatewayError::Malformed(format!(
            "empty stats stream for container {}",
            container_id
        ))),
    }
}

/// Flatten the daemon's stats payload into the two-sample record
fn sample_from_stats(stats: &Stats) -> StatsSample {
    let cpu_stats = &stats.cpu_stats;
    let precpu_stats = &stats.precpu_stats;

    let num_cpus = cpu_stats
        .online_cpus
        .or(cpu_stats.cpu_usage.percpu_usage.as_ref().map(|v| v.len() as u64))
        .unwrap_or(1);

    StatsSample {
        cpu_usage_total: cpu_stats.cpu_usage.total_usage,
        previous_cpu_usage_total: precpu_stats.cpu_usage.total_usage,
        system_cpu_usage: cpu_stats.system_cpu_usage.unwrap_or(0),
        previous_system_cpu_usage: precpu_stats.system_cpu_usage.unwrap_or(0),
        num_cpus,
        memory_usage: stats.memory_stats.usage.unwrap_or(0),
        memory_limit: stats.memory_stats.limit.unwrap_or(0),
    }
}
