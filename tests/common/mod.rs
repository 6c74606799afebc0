#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use compose_deck::app::{App, Screen};
use compose_deck::docker::{ComposeCommand, ComposeProcess, FleetGateway};
use compose_deck::error::{GatewayError, MultiplexerError, TransportError};
use compose_deck::models::{ContainerRecord, Project, StatsSample, VolumeRecord};
use compose_deck::monitor::AlertTransport;
use compose_deck::multiplexer::Multiplexer;

#[derive(Default)]
struct Fleet {
    containers: Vec<ContainerRecord>,
    volumes: Vec<VolumeRecord>,
    stats: HashMap<String, StatsSample>,
    logs: HashMap<String, Vec<String>>,
    compose_script: String,
    unreachable: bool,
    stats_delay: Duration,
}

/// In-memory runtime; compose runs a real `sh -c` script
#[derive(Default)]
pub struct FakeGateway {
    fleet: Mutex<Fleet>,
    compose_calls: Mutex<Vec<(String, ComposeCommand)>>,
    list_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_containers(&self, containers: Vec<ContainerRecord>) {
        self.fleet.lock().unwrap().containers = containers;
    }

    pub fn set_volumes(&self, volumes: Vec<VolumeRecord>) {
        self.fleet.lock().unwrap().volumes = volumes;
    }

    pub fn set_stats(&self, id: &str, sample: StatsSample) {
        self.fleet.lock().unwrap().stats.insert(id.to_string(), sample);
    }

    pub fn set_logs(&self, id: &str, lines: Vec<String>) {
        self.fleet.lock().unwrap().logs.insert(id.to_string(), lines);
    }

    pub fn set_compose_script(&self, script: &str) {
        self.fleet.lock().unwrap().compose_script = script.to_string();
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.fleet.lock().unwrap().unreachable = unreachable;
    }

    /// Every stats call sleeps this long first
    pub fn set_stats_delay(&self, delay: Duration) {
        self.fleet.lock().unwrap().stats_delay = delay;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn compose_calls(&self) -> Vec<(String, ComposeCommand)> {
        self.compose_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FleetGateway for FakeGateway {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let fleet = self.fleet.lock().unwrap();
        if fleet.unreachable {
            return Err(GatewayError::Malformed("daemon unreachable".to_string()));
        }
        Ok(fleet.containers.clone())
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeRecord>, GatewayError> {
        Ok(self.fleet.lock().unwrap().volumes.clone())
    }

    async fn container_stats(&self, id: &str) -> Result<StatsSample, GatewayError> {
        let delay = self.fleet.lock().unwrap().stats_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.fleet
            .lock()
            .unwrap()
            .stats
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::Malformed(format!("no such container: {id}")))
    }

    async fn container_logs(
        &self,
        id: &str,
        tail: usize,
        _timestamps: bool,
    ) -> Result<Vec<String>, GatewayError> {
        let fleet = self.fleet.lock().unwrap();
        let lines = fleet.logs.get(id).cloned().unwrap_or_default();
        let skip = lines.len().saturating_sub(tail);
        Ok(lines.into_iter().skip(skip).collect())
    }

    async fn compose(
        &self,
        project: &Project,
        command: ComposeCommand,
    ) -> Result<ComposeProcess, GatewayError> {
        self.compose_calls
            .lock()
            .unwrap()
            .push((project.name.clone(), command));

        let script = self.fleet.lock().unwrap().compose_script.clone();
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(script);
        ComposeProcess::spawn(cmd).map_err(|source| GatewayError::Compose {
            project: project.name.clone(),
            command: command.to_string(),
            source,
        })
    }
}

/// Records every send; can be switched to fail or to hang
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
    hang: Arc<AtomicBool>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_hanging(&self, hang: bool) {
        self.hang.store(hang, Ordering::SeqCst);
    }
}

#[async_trait]
impl AlertTransport for RecordingTransport {
    async fn send(&self, _subject: &str, body: &str, _recipient: &str) -> Result<(), TransportError> {
        if self.hang.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("mailbox unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Session the recording multiplexer claims to run in
pub const HOST_SESSION: &str = "work";

/// Multiplexer that remembers what it was asked to do
#[derive(Clone, Default)]
pub struct RecordingMultiplexer {
    pub panes: Arc<Mutex<Vec<String>>>,
    pub killed: Arc<Mutex<Vec<String>>>,
}

impl Multiplexer for RecordingMultiplexer {
    fn spawn_interactive_pane(&self, command: &str) -> Result<(), MultiplexerError> {
        self.panes.lock().unwrap().push(command.to_string());
        Ok(())
    }

    fn current_session(&self) -> Result<String, MultiplexerError> {
        Ok(HOST_SESSION.to_string())
    }

    fn kill_session(&self, name: &str) -> Result<(), MultiplexerError> {
        self.killed.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

/// Screen that snapshots the output log on every draw
#[derive(Default)]
pub struct RecordingScreen {
    pub draws: usize,
    pub output_at_draw: Vec<Vec<String>>,
}

impl Screen for RecordingScreen {
    fn draw(&mut self, app: &mut App) -> anyhow::Result<()> {
        self.draws += 1;
        self.output_at_draw
            .push(app.output.texts().into_iter().map(String::from).collect());
        Ok(())
    }
}

pub fn cpu_sample(percent: u64) -> StatsSample {
    StatsSample {
        cpu_usage_total: percent,
        previous_cpu_usage_total: 0,
        system_cpu_usage: 100,
        previous_system_cpu_usage: 0,
        num_cpus: 1,
        memory_usage: 10,
        memory_limit: 100,
    }
}
