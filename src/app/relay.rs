use anyhow::Result;
use chrono::{DateTime, Local};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::app::{App, Screen};
use crate::docker::ComposeCommand;

/// How the last compose run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOutcome {
    pub project: String,
    pub command: ComposeCommand,
    /// Exit code; `None` when the child was killed by a signal
    pub code: Option<i32>,
    pub finished_at: DateTime<Local>,
}

impl ComposeOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn summary(&self) -> String {
        let exit = match self.code {
            Some(code) => format!("exit {code}"),
            None => "terminated by signal".to_string(),
        };
        format!(
            "{} {}: {} at {}",
            self.command,
            self.project,
            exit,
            self.finished_at.format("%H:%M:%S")
        )
    }
}

impl App {
    /// Run a compose command for the selected project, relaying its stderr
    /// into the output log one line at a time and redrawing after each.
    pub async fn run_compose(&mut self, command: ComposeCommand, screen: &mut dyn Screen) -> Result<()> {
        let Some(project) = self.selected_project().cloned() else {
            return Ok(());
        };

        self.output.info(format!("docker compose {command}..."));
        info!(project = %project.name, %command, "Running compose");
        screen.draw(self)?;

        let mut process = match self.provider.gateway().compose(&project, command).await {
            Ok(process) => process,
            Err(e) => {
                warn!(project = %project.name, error = %e, "Compose failed to start");
                self.output.failure(e.to_string());
                return Ok(());
            }
        };

        // Nobody shows stdout, but a full pipe would stall the child
        let stdout_drain = process.take_stdout().map(|mut stdout| {
            tokio::spawn(async move {
                let _ = tokio::io::copy(&mut stdout, &mut tokio::io::sink()).await;
            })
        });

        if let Some(stderr) = process.take_stderr() {
            let mut lines = BufReader::new(stderr).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        self.output.process(line.trim());
                        self.refresh().await;
                        screen.draw(self)?;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "Reading compose stderr failed");
                        self.output.failure(format!("Reading compose output failed: {e}"));
                        break;
                    }
                }
            }
        }
        screen.draw(self)?;

        if let Some(drain) = stdout_drain {
            let _ = drain.await;
        }

        let code = match process.wait().await {
            Ok(status) => status.code(),
            Err(e) => {
                warn!(error = %e, "Waiting on compose failed");
                None
            }
        };
        info!(project = %project.name, %command, ?code, "Compose finished");

        self.compose_status = Some(ComposeOutcome {
            project: project.name,
            command,
            code,
            finished_at: Local::now(),
        });
        Ok(())
    }
}
