use serde::Deserialize;

/// Two consecutive runtime samples for one container, as returned by a
/// single stats call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsSample {
    pub cpu_usage_total: u64,
    pub previous_cpu_usage_total: u64,
    pub system_cpu_usage: u64,
    pub previous_system_cpu_usage: u64,
    pub num_cpus: u64,
    pub memory_usage: u64,
    pub memory_limit: u64,
}

impl StatsSample {
    /// CPU usage across all cores, `100.0` per fully busy core
    pub fn cpu_percent(&self) -> f64 {
        let cpu_delta = self.cpu_usage_total as f64 - self.previous_cpu_usage_total as f64;
        let system_delta = self.system_cpu_usage as f64 - self.previous_system_cpu_usage as f64;

        if system_delta > 0.0 && cpu_delta > 0.0 {
            (cpu_delta / system_delta) * self.num_cpus.max(1) as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn memory_percent(&self) -> f64 {
        if self.memory_limit > 0 {
            (self.memory_usage as f64 / self.memory_limit as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Per-project resource limits that trigger breach alerts
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Threshold {
    #[serde(default = "default_limit")]
    pub cpu_threshold: f64,
    #[serde(default = "default_limit")]
    pub memory_threshold: f64,
}

fn default_limit() -> f64 {
    80.0
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            cpu_threshold: default_limit(),
            memory_threshold: default_limit(),
        }
    }
}

/// Host-wide statistics shown in the header
#[derive(Debug, Clone, Default)]
pub struct SystemStats {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_used_gb: f32,
    pub memory_total_gb: f32,
}
