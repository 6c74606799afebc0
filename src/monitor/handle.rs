use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

/// How long a stop request waits for a graceful exit before killing
const GRACE_PERIOD: Duration = Duration::from_secs(3);

/// Result of a stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped { pid: u32 },
    NotRunning,
}

/// Dashboard-side handle on the monitor process it started
#[derive(Debug, Default)]
pub struct MonitorHandle {
    child: Option<Child>,
    pid: Option<u32>,
}

impl MonitorHandle {
    /// A handle with no process behind it
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn from_child(child: Child) -> Self {
        let pid = child.id();
        Self {
            child: Some(child),
            pid,
        }
    }

    /// Start the monitor binary in the background. Needs a tokio runtime.
    pub fn spawn(program: &Path, config: Option<&Path>) -> io::Result<Self> {
        let mut cmd = Command::new(program);
        if let Some(config) = config {
            cmd.arg("--config").arg(config);
        }
        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(pid = child.id(), "Spawned health monitor");
        Ok(Self::from_child(child))
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Ask the monitor to exit, killing it if it has not exited within the
    /// grace period
    pub async fn stop(&mut self) -> io::Result<StopOutcome> {
        if !self.is_running() {
            self.child = None;
            self.pid = None;
            return Ok(StopOutcome::NotRunning);
        }
        let (Some(mut child), Some(pid)) = (self.child.take(), self.pid.take()) else {
            return Ok(StopOutcome::NotRunning);
        };

        request_exit(&mut child, pid)?;

        match tokio::time::timeout(GRACE_PERIOD, child.wait()).await {
            Ok(status) => {
                let status = status?;
                tracing::info!(pid, %status, "Health monitor exited");
            }
            Err(_) => {
                tracing::warn!(pid, "Health monitor ignored stop request, killing");
                child.kill().await?;
            }
        }
        Ok(StopOutcome::Stopped { pid })
    }
}

#[cfg(unix)]
fn request_exit(_child: &mut Child, pid: u32) -> io::Result<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    kill(Pid::from_raw(pid as i32), Signal::SIGTERM).map_err(io::Error::from)
}

#[cfg(not(unix))]
fn request_exit(child: &mut Child, _pid: u32) -> io::Result<()> {
    child.start_kill()
}
