use std::fmt;
use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, ChildStderr, ChildStdout, Command};

use crate::models::Project;

/// Compose lifecycle commands the console can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeCommand {
    Up,
    Down,
}

impl ComposeCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeCommand::Up => "up",
            ComposeCommand::Down => "down",
        }
    }

    /// Arguments passed after the compose program
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            // Detached so the relay ends once the services are started
            ComposeCommand::Up => &["up", "-d"],
            ComposeCommand::Down => &["down"],
        }
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the compose invocation for a project.
///
/// `program` is the compose entry point split into words, e.g.
/// `["docker", "compose"]` or `["docker-compose"]`.
pub fn compose_command(program: &[String], project: &Project, command: ComposeCommand) -> Command {
    let (bin, leading) = match program.split_first() {
        Some((bin, rest)) => (bin.as_str(), rest),
        None => ("docker", &[][..]),
    };

    let mut cmd = Command::new(bin);
    cmd.args(leading)
        .args(command.args())
        .current_dir(&project.path);
    cmd
}

/// A running compose child with its output streams
pub struct ComposeProcess {
    child: Child,
}

impl ComposeProcess {
    /// Spawn `command` with both output streams piped
    pub fn spawn(mut command: Command) -> io::Result<Self> {
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false)
            .spawn()?;
        Ok(Self { child })
    }

    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.stderr.take()
    }

    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    pub async fn wait(&mut self) -> io::Result<ExitStatus> {
        self.child.wait().await
    }
}
