use std::process::{Command, Stdio};

use crate::error::MultiplexerError;

/// Terminal multiplexer hosting the dashboard
pub trait Multiplexer: Send {
    /// Open `command` in a new pane next to the dashboard
    fn spawn_interactive_pane(&self, command: &str) -> Result<(), MultiplexerError>;

    /// Name of the session hosting the dashboard
    fn current_session(&self) -> Result<String, MultiplexerError>;

    /// Tear down the named session, including the dashboard's own pane
    fn kill_session(&self, name: &str) -> Result<(), MultiplexerError>;
}

/// tmux driven through its command line
#[derive(Debug, Clone, Default)]
pub struct Tmux;

impl Tmux {
    /// Whether this process runs inside a tmux client
    pub fn inside_session() -> bool {
        std::env::var_os("TMUX").is_some()
    }

    /// Run `program args...` inside a new session named `session`,
    /// attaching the current terminal until it ends
    pub fn run_in_new_session(session: &str, program: &str, args: &[String]) -> Result<(), MultiplexerError> {
        let mut cmd = Command::new("tmux");
        cmd.args(["new-session", "-s", session, program]).args(args);
        run(cmd, "new-session")
    }

    fn command() -> Command {
        let mut cmd = Command::new("tmux");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Multiplexer for Tmux {
    fn spawn_interactive_pane(&self, command: &str) -> Result<(), MultiplexerError> {
        let mut cmd = Self::command();
        cmd.args(["split-window", "-h", command]);
        run(cmd, "split-window")
    }

    fn current_session(&self) -> Result<String, MultiplexerError> {
        let output = Command::new("tmux")
            .args(["display-message", "-p", "#S"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        if !output.status.success() {
            return Err(MultiplexerError::Failed {
                command: "display-message".to_string(),
                status: output.status.to_string(),
            });
        }
        session_name(&output.stdout).ok_or_else(|| MultiplexerError::Failed {
            command: "display-message".to_string(),
            status: "empty session name".to_string(),
        })
    }

    fn kill_session(&self, name: &str) -> Result<(), MultiplexerError> {
        let mut cmd = Self::command();
        cmd.args(["kill-session", "-t", name]);
        run(cmd, "kill-session")
    }
}

fn run(mut cmd: Command, what: &str) -> Result<(), MultiplexerError> {
    let status = cmd.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(MultiplexerError::Failed {
            command: what.to_string(),
            status: status.to_string(),
        })
    }
}

fn session_name(stdout: &[u8]) -> Option<String> {
    let name = String::from_utf8_lossy(stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_name_trims_the_newline() {
        assert_eq!(session_name(b"work\n").as_deref(), Some("work"));
        assert_eq!(session_name(b"my session\n").as_deref(), Some("my session"));
        assert_eq!(session_name(b"\n"), None);
    }
}
