mod navigation;
mod output;
mod relay;
mod render;

use anyhow::Result;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sysinfo::System;
use tracing::{debug, info, warn};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::action::Action;
use crate::config::DisplayConfig;
use crate::docker::FleetGateway;
use crate::fleet::{FleetSnapshot, SnapshotProvider};
use crate::keymap::KeyMap;
use crate::models::{ContainerRecord, Project, SystemStats};
use crate::monitor::{MonitorHandle, StopOutcome};
use crate::multiplexer::Multiplexer;
use crate::ui::Palette;

pub use navigation::{Effect, Extents, NavigationState, Panel, RightView};
pub use output::{OutputKind, OutputLine, OutputLog};
pub use relay::ComposeOutcome;

/// Something the dashboard can be drawn onto
pub trait Screen {
    fn draw(&mut self, app: &mut App) -> Result<()>;
}

impl Screen for Terminal<CrosstermBackend<Stdout>> {
    fn draw(&mut self, app: &mut App) -> Result<()> {
        Terminal::draw(self, |frame| app.render(frame))?;
        Ok(())
    }
}

/// Main application state
pub struct App {
    provider: SnapshotProvider,
    multiplexer: Box<dyn Multiplexer>,
    monitor: MonitorHandle,

    pub keymap: KeyMap,
    pub display: DisplayConfig,
    pub palette: Palette,

    // Fleet data
    pub projects: Vec<Project>,
    pub snapshot: FleetSnapshot,

    // Logs of the selected container
    pub logs: Vec<String>,
    pub logs_container: String,

    pub nav: NavigationState,
    pub output: OutputLog,
    pub compose_status: Option<ComposeOutcome>,
    pub should_quit: bool,

    // System info
    pub system_stats: SystemStats,
    sys: System,

    // Refresh timing
    last_refresh: Instant,
    refresh_interval: Duration,
    last_error: Option<String>,
}

impl App {
    pub async fn new(
        gateway: Arc<dyn FleetGateway>,
        multiplexer: Box<dyn Multiplexer>,
        monitor: MonitorHandle,
        keymap: KeyMap,
        display: DisplayConfig,
        projects: Vec<Project>,
    ) -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let mut app = Self {
            provider: SnapshotProvider::new(gateway),
            multiplexer,
            monitor,
            keymap,
            palette: Palette::default(),
            output: OutputLog::new(display.max_stdout_lines),
            display,
            projects,
            snapshot: FleetSnapshot::empty(),
            logs: Vec::new(),
            logs_container: String::new(),
            nav: NavigationState::new(),
            compose_status: None,
            should_quit: false,
            system_stats: SystemStats::default(),
            sys,
            last_refresh: Instant::now(),
            refresh_interval: Duration::from_secs(3),
            last_error: None,
        };

        app.refresh().await;
        app
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.nav.project_index)
    }

    pub fn selected_container(&self) -> Option<&ContainerRecord> {
        self.snapshot.containers.get(self.nav.container_index)
    }

    pub fn monitor_running(&mut self) -> bool {
        self.monitor.is_running()
    }

    pub fn extents(&self) -> Extents {
        Extents {
            projects: self.projects.len(),
            containers: self.snapshot.containers.len(),
            volumes: self.snapshot.volumes.len(),
            log_lines: self.logs.len(),
            page_size: self.display.max_logs_display,
        }
    }

    /// Pull a new snapshot, reload logs when they are on screen and
    /// re-clamp the navigation state. A failed refresh keeps the previous
    /// snapshot.
    pub async fn refresh(&mut self) {
        self.last_refresh = Instant::now();
        self.refresh_system_stats();

        match self.provider.refresh().await {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.last_error = None;
            }
            Err(e) => {
                let message = format!("Refresh failed: {e}");
                // Report a persisting failure once
                if self.last_error.as_deref() != Some(message.as_str()) {
                    warn!(error = %e, "Snapshot refresh failed");
                    self.output.failure(message.clone());
                    self.last_error = Some(message);
                }
            }
        }

        let extents = self.extents();
        self.nav.clamp(&extents);
        if self.nav.active_view == RightView::Logs {
            self.load_logs().await;
        } else {
            // Drop the log of a container no longer on screen
            self.logs.clear();
        }
        let extents = self.extents();
        self.nav.clamp(&extents);
    }

    /// Refresh when the dashboard has been idle for the refresh interval
    pub async fn tick(&mut self) {
        if self.last_refresh.elapsed() >= self.refresh_interval {
            self.refresh().await;
        }
    }

    pub fn refresh_system_stats(&mut self) {
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();

        let memory_used = self.sys.used_memory() as f32;
        let memory_total = self.sys.total_memory() as f32;
        let memory_percent = if memory_total > 0.0 {
            (memory_used / memory_total) * 100.0
        } else {
            0.0
        };

        self.system_stats = SystemStats {
            cpu_percent: self.sys.global_cpu_usage(),
            memory_percent,
            memory_used_gb: memory_used / 1024.0 / 1024.0 / 1024.0,
            memory_total_gb: memory_total / 1024.0 / 1024.0 / 1024.0,
        };
    }

    async fn load_logs(&mut self) {
        let Some(container) = self.selected_container().cloned() else {
            self.logs.clear();
            self.logs_container.clear();
            return;
        };

        match self
            .provider
            .gateway()
            .container_logs(&container.id, self.display.log_tail, true)
            .await
        {
            Ok(lines) => self.logs = lines,
            Err(e) => {
                warn!(container = %container.name, error = %e, "Loading logs failed");
                self.output.failure(format!("Logs for {} unavailable: {e}", container.name));
                self.logs.clear();
            }
        }
        self.logs_container = container.name;
    }

    pub async fn handle_action(&mut self, action: Action, screen: &mut dyn Screen) -> Result<()> {
        debug!(?action, "Handling action");

        let extents = self.extents();
        let effect = self.nav.apply(action, &extents);
        match effect {
            Effect::None | Effect::OpenLogs => {}
            Effect::Compose(command) => self.run_compose(command, screen).await?,
            Effect::StopMonitor => self.stop_monitor().await,
            Effect::OpenTerminal => self.open_terminal(),
            Effect::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                return Ok(());
            }
        }

        self.refresh().await;
        Ok(())
    }

    async fn stop_monitor(&mut self) {
        match self.monitor.stop().await {
            Ok(StopOutcome::Stopped { pid }) => {
                info!(pid, "Health monitor stopped");
                self.output.info(format!("Health monitor (pid {pid}) stopped"));
            }
            Ok(StopOutcome::NotRunning) => self.output.info("Health monitor is not running"),
            Err(e) => {
                warn!(error = %e, "Stopping health monitor failed");
                self.output.failure(format!("Stopping health monitor failed: {e}"));
            }
        }
    }

    fn open_terminal(&mut self) {
        let Some(container) = self.selected_container() else {
            return;
        };
        let name = container.name.clone();
        let command = format!("docker exec -it {} /bin/bash", container.id);

        match self.multiplexer.spawn_interactive_pane(&command) {
            Ok(()) => self.output.info(format!("Opened terminal for {name}")),
            Err(e) => {
                warn!(container = %name, error = %e, "Opening terminal failed");
                self.output.failure(format!("Opening terminal for {name} failed: {e}"));
            }
        }
    }

    /// Tear down the multiplexer session hosting the dashboard
    pub fn end_session(&self) {
        let session = match self.multiplexer.current_session() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Cannot resolve the hosting session");
                return;
            }
        };
        if let Err(e) = self.multiplexer.kill_session(&session) {
            warn!(%session, error = %e, "Killing session failed");
        }
    }
}
