use async_trait::async_trait;
use chrono::Local;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::TransportError;

/// Outbound channel for alert batches
#[async_trait]
pub trait AlertTransport: Send + Sync {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), TransportError>;
}

/// Accumulated alert lines waiting for the next successful send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertBatch {
    lines: Vec<String>,
}

impl AlertBatch {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Message body, one event per line
    pub fn body(&self) -> String {
        let mut body = String::new();
        for line in &self.lines {
            body.push_str(line);
            body.push('\n');
        }
        body
    }
}

/// Hands the message to a sendmail-compatible program on stdin
pub struct MailCommandTransport {
    program: Vec<String>,
    sender: String,
}

impl MailCommandTransport {
    pub fn new(program: Vec<String>, sender: impl Into<String>) -> Self {
        Self {
            program,
            sender: sender.into(),
        }
    }

    fn message(&self, subject: &str, body: &str, recipient: &str) -> String {
        format!(
            "From: {}\nTo: {}\nSubject: {}\nDate: {}\nContent-Type: text/plain; charset=utf-8\n\n{}",
            self.sender,
            recipient,
            subject,
            Local::now().to_rfc2822(),
            body
        )
    }
}

#[async_trait]
impl AlertTransport for MailCommandTransport {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), TransportError> {
        let (bin, args) = self
            .program
            .split_first()
            .ok_or_else(|| TransportError::Rejected("mail command is empty".to_string()))?;

        let mut child = Command::new(bin)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            // A timed-out send drops this future; take the child down with it
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(self.message(subject, body, recipient).as_bytes())
                .await?;
        }

        let output = child.wait_with_output().await?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(TransportError::Rejected(if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            }))
        }
    }
}

/// Writes alerts to the log; used when no recipient is configured
pub struct LogTransport;

#[async_trait]
impl AlertTransport for LogTransport {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), TransportError> {
        tracing::warn!(%subject, %recipient, body = %body.trim_end(), "Container alert");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_body_has_one_line_per_event() {
        let mut batch = AlertBatch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.body(), "");

        batch.push("The status of container db has changed to exited.");
        batch.push("Container abc has been stopped.");

        assert_eq!(
            batch.body(),
            "The status of container db has changed to exited.\nContainer abc has been stopped.\n"
        );
        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn message_carries_headers_and_body() {
        let transport = MailCommandTransport::new(vec!["sendmail".into()], "deck@localhost");
        let message = transport.message("Container Health Alert!", "line\n", "ops@example.com");

        assert!(message.starts_with("From: deck@localhost\nTo: ops@example.com\n"));
        assert!(message.contains("Subject: Container Health Alert!\n"));
        assert!(message.ends_with("\n\nline\n"));
    }

    #[tokio::test]
    async fn failing_mail_command_is_rejected() {
        let transport = MailCommandTransport::new(
            vec!["sh".into(), "-c".into(), "cat >/dev/null; echo refused >&2; exit 3".into()],
            "deck@localhost",
        );

        let err = transport
            .send("subject", "body", "ops@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Rejected(ref msg) if msg == "refused"));
    }

    #[tokio::test]
    async fn successful_mail_command_is_accepted() {
        let transport = MailCommandTransport::new(
            vec!["sh".into(), "-c".into(), "cat >/dev/null".into()],
            "deck@localhost",
        );

        assert!(transport.send("subject", "body", "ops@example.com").await.is_ok());
    }
}
