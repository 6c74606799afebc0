pub mod alert;
pub mod handle;

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{GatewayError, TransportError};
use crate::fleet::SnapshotProvider;
use crate::models::{ContainerHealth, ContainerRecord, ContainerStatus, Threshold};

pub use alert::{AlertBatch, AlertTransport, LogTransport, MailCommandTransport};
pub use handle::{MonitorHandle, StopOutcome};

pub const ALERT_SUBJECT: &str = "Container Health Alert!";

/// Tunables for the health monitor loop
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub recipient: String,
    pub max_emails: u32,
    pub email_interval: Duration,
    pub check_interval: Duration,
    pub send_timeout: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            max_emails: 5,
            email_interval: Duration::from_secs(30),
            check_interval: Duration::from_secs(30),
            send_timeout: Duration::from_secs(10),
        }
    }
}

/// Everything the monitor remembers between ticks
#[derive(Debug, Clone)]
pub struct MonitorState {
    pub status_by_id: HashMap<String, ContainerStatus>,
    pub health_by_id: HashMap<String, ContainerHealth>,
    pub alert_body: AlertBatch,
    pub email_count: u32,
    pub last_sent_at: Instant,
    pub max_emails: u32,
    pub email_interval: Duration,
}

impl MonitorState {
    pub fn new(max_emails: u32, email_interval: Duration, started_at: Instant) -> Self {
        Self {
            status_by_id: HashMap::new(),
            health_by_id: HashMap::new(),
            alert_body: AlertBatch::default(),
            email_count: 0,
            last_sent_at: started_at,
            max_emails,
            email_interval,
        }
    }

    /// Ids currently tracked (identical for both maps)
    pub fn tracked_ids(&self) -> HashSet<&str> {
        self.status_by_id.keys().map(String::as_str).collect()
    }

    fn forget(&mut self, id: &str) {
        self.status_by_id.remove(id);
        self.health_by_id.remove(id);
    }
}

/// Result of one dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing accumulated
    Empty,
    /// Inside the cooldown window; batch kept
    Throttled,
    Sent,
    /// Transport failed; batch kept for the next eligible tick
    Failed,
}

/// What a single tick did
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Alert lines appended during this tick, in order
    pub appended: Vec<String>,
    pub dispatches: Vec<DispatchOutcome>,
}

impl TickReport {
    pub fn sent(&self) -> bool {
        self.dispatches.contains(&DispatchOutcome::Sent)
    }
}

/// Background watcher diffing successive fleet snapshots
pub struct HealthMonitor {
    provider: SnapshotProvider,
    transport: Box<dyn AlertTransport>,
    thresholds: HashMap<String, Threshold>,
    settings: MonitorSettings,
    state: MonitorState,
}

impl HealthMonitor {
    pub fn new(
        provider: SnapshotProvider,
        transport: Box<dyn AlertTransport>,
        settings: MonitorSettings,
        thresholds: HashMap<String, Threshold>,
    ) -> Self {
        Self::starting_at(provider, transport, settings, thresholds, Instant::now())
    }

    /// Like [`HealthMonitor::new`] with an explicit start time, which is
    /// also the start of the first cooldown window
    pub fn starting_at(
        provider: SnapshotProvider,
        transport: Box<dyn AlertTransport>,
        settings: MonitorSettings,
        thresholds: HashMap<String, Threshold>,
        started_at: Instant,
    ) -> Self {
        let state = MonitorState::new(settings.max_emails, settings.email_interval, started_at);
        Self {
            provider,
            transport,
            thresholds,
            settings,
            state,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    fn threshold_for(&self, project: &str) -> Threshold {
        self.thresholds.get(project).copied().unwrap_or_default()
    }

    fn append(&mut self, appended: &mut Vec<String>, line: String) {
        debug!(%line, "Alert line");
        self.state.alert_body.push(line.clone());
        appended.push(line);
    }

    /// Diff `containers` against the retained maps and check resource
    /// thresholds, appending to the alert batch. Returns the new lines.
    pub async fn scan(&mut self, containers: &[ContainerRecord]) -> Vec<String> {
        let mut appended = Vec::new();

        for container in containers {
            let id = container.id.clone();

            if !self.state.status_by_id.contains_key(&id) {
                self.state.status_by_id.insert(id.clone(), container.status);
                self.state.health_by_id.insert(id.clone(), container.health);
            }

            if self.state.status_by_id.get(&id) != Some(&container.status) {
                self.state.status_by_id.insert(id.clone(), container.status);
                self.append(
                    &mut appended,
                    format!(
                        "The status of container {} has changed to {}.",
                        container.name, container.status
                    ),
                );
            }

            if self.state.health_by_id.get(&id) != Some(&container.health)
                && container.health.is_known()
            {
                self.state.health_by_id.insert(id.clone(), container.health);
                self.append(
                    &mut appended,
                    format!(
                        "The health of container {} has changed to {}.",
                        container.name, container.health
                    ),
                );
            }

            if container.status.is_running() {
                let stats = match self.provider.gateway().container_stats(&id).await {
                    Ok(stats) => stats,
                    Err(e) => {
                        // Usually the container went away mid-scan; the sweep reports it
                        warn!(container = %container.name, error = %e, "Skipping stats check");
                        continue;
                    }
                };

                let threshold = self.threshold_for(&container.project);
                let cpu_percent = stats.cpu_percent();
                let memory_percent = stats.memory_percent();
                debug!(container = %container.name, cpu_percent, memory_percent, "Stats sampled");

                if cpu_percent > threshold.cpu_threshold {
                    self.append(
                        &mut appended,
                        format!(
                            "The CPU usage of container {} has exceeded the threshold.",
                            container.name
                        ),
                    );
                }
                if memory_percent > threshold.memory_threshold {
                    self.append(
                        &mut appended,
                        format!(
                            "The memory usage of container {} has exceeded the threshold.",
                            container.name
                        ),
                    );
                }
            }
        }

        appended
    }

    /// Try to send the accumulated batch, honouring the cooldown window
    pub async fn dispatch(&mut self, now: Instant) -> DispatchOutcome {
        if self.state.alert_body.is_empty() {
            return DispatchOutcome::Empty;
        }
        if now.saturating_duration_since(self.state.last_sent_at) < self.state.email_interval {
            return DispatchOutcome::Throttled;
        }

        let body = self.state.alert_body.body();
        let send = self
            .transport
            .send(ALERT_SUBJECT, &body, &self.settings.recipient);
        let result = match tokio::time::timeout(self.settings.send_timeout, send).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.settings.send_timeout)),
        };

        match result {
            Ok(()) => {
                self.state.email_count += 1;
                self.state.last_sent_at = now;
                self.state.alert_body.clear();
                info!(count = self.state.email_count, "Alert sent");
                DispatchOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, "Alert send failed, keeping batch for retry");
                DispatchOutcome::Failed
            }
        }
    }

    /// Once the send cap is hit, restart the cooldown window and the counter.
    /// Returns true when a reset happened.
    pub fn enforce_email_cap(&mut self, now: Instant) -> bool {
        if self.state.email_count >= self.state.max_emails {
            self.state.last_sent_at = now;
            self.state.email_count = 0;
            info!(max_emails = self.state.max_emails, "Alert cap reached, cooling down");
            true
        } else {
            false
        }
    }

    /// Drop tracked containers missing from `current_ids`, appending a
    /// stopped line for each. Returns the new lines.
    pub fn sweep_removed(&mut self, current_ids: &HashSet<&str>) -> Vec<String> {
        let mut gone: Vec<String> = self
            .state
            .status_by_id
            .keys()
            .filter(|id| !current_ids.contains(id.as_str()))
            .cloned()
            .collect();
        gone.sort();

        let mut appended = Vec::new();
        for id in gone {
            self.append(&mut appended, format!("Container {} has been stopped.", id));
            self.state.forget(&id);
        }
        appended
    }

    /// One full poll: scan, dispatch, cap check, removal sweep
    pub async fn tick(&mut self, now: Instant) -> Result<TickReport, GatewayError> {
        let snapshot = self.provider.refresh().await?;
        let mut report = TickReport::default();

        report.appended = self.scan(&snapshot.containers).await;
        report.dispatches.push(self.dispatch(now).await);

        self.enforce_email_cap(now);

        let removed = self.sweep_removed(&snapshot.container_ids());
        if !removed.is_empty() {
            report.appended.extend(removed);
            report.dispatches.push(self.dispatch(now).await);
            // Removal notices go out once or not at all
            self.state.alert_body.clear();
        }

        Ok(report)
    }

    /// Poll every `check_interval` until `shutdown` resolves
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            check_interval_secs = self.settings.check_interval.as_secs(),
            email_interval_secs = self.settings.email_interval.as_secs(),
            max_emails = self.settings.max_emails,
            "Health monitor started"
        );

        loop {
            // A stop request abandons a tick in flight
            let result = tokio::select! {
                _ = &mut shutdown => break,
                result = self.tick(Instant::now()) => result,
            };
            match result {
                Ok(report) => debug!(
                    appended = report.appended.len(),
                    sent = report.sent(),
                    tracked = self.state.status_by_id.len(),
                    "Tick complete"
                ),
                Err(e) => warn!(error = %e, "Fleet refresh failed, skipping tick"),
            }

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.settings.check_interval) => {}
            }
        }

        info!("Health monitor stopped");
    }
}
