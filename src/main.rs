use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use compose_deck::app::App;
use compose_deck::config::Config;
use compose_deck::docker::{DockerClient, FleetGateway};
use compose_deck::keymap::key_token;
use compose_deck::logging;
use compose_deck::models::discover_projects;
use compose_deck::monitor::MonitorHandle;
use compose_deck::multiplexer::Tmux;
use compose_deck::tui::{self, Tui};

/// File name of the health monitor binary, expected next to this one
const MONITOR_BINARY: &str = "compose-deck-monitor";

#[derive(Parser, Debug)]
#[command(name = "compose-deck", version, about = "Terminal console for Docker Compose projects")]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not start the background health monitor
    #[arg(long)]
    no_monitor: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = logging::init("compose-deck");

    if config.tmux.auto_session && !Tmux::inside_session() {
        let exe = std::env::current_exe().context("Failed to locate executable")?;
        let args: Vec<String> = std::env::args().skip(1).collect();
        info!(session = %config.tmux.session, "Relaunching inside tmux");
        Tmux::run_in_new_session(&config.tmux.session, &exe.to_string_lossy(), &args)
            .context("Failed to start tmux session")?;
        return Ok(());
    }

    let keymap = config.keymap()?;
    let palette = config.colors.palette()?;
    let gateway: Arc<dyn FleetGateway> = Arc::new(
        DockerClient::connect(config.compose_command.clone())
            .context("Failed to connect to Docker")?,
    );
    let projects = discover_projects(&config.projects_path);
    info!(projects = projects.len(), "Discovered compose projects");

    let monitor = if config.monitor.spawn && !cli.no_monitor {
        spawn_monitor(cli.config.as_deref())
    } else {
        MonitorHandle::detached()
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(
        gateway,
        Box::new(Tmux),
        monitor,
        keymap,
        config.display.clone(),
        projects,
    )
    .await;
    app.palette = palette;

    let result = run(&mut terminal, &mut app).await;

    tui::restore()?;
    if Tmux::inside_session() {
        app.end_session();
    }

    result
}

/// Main event loop
async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                } else if let Some(action) = key_token(&key).and_then(|t| app.keymap.action(&t)) {
                    app.handle_action(action, terminal).await?;
                }
            }
        } else {
            // Tick for periodic updates
            app.tick().await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_monitor(config: Option<&Path>) -> MonitorHandle {
    let program = match std::env::current_exe() {
        Ok(exe) => exe.with_file_name(MONITOR_BINARY),
        Err(e) => {
            warn!(error = %e, "Cannot locate executable, health monitor not started");
            return MonitorHandle::detached();
        }
    };

    match MonitorHandle::spawn(&program, config) {
        Ok(handle) => handle,
        Err(e) => {
            warn!(program = %program.display(), error = %e, "Failed to start health monitor");
            MonitorHandle::detached()
        }
    }
}
