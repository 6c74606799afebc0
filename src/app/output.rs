use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Where an output line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Console status message
    Info,
    /// Streamed from a compose child
    Process,
    Failure,
}

#[derive(Debug, Clone)]
pub struct OutputLine {
    pub at: DateTime<Local>,
    pub kind: OutputKind,
    pub text: String,
}

/// Bounded scrollback shown in the output panel; the oldest line is
/// dropped once `capacity` is reached
#[derive(Debug, Clone)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl OutputLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, kind: OutputKind, text: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(OutputLine {
            at: Local::now(),
            kind,
            text: text.into(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(OutputKind::Info, text);
    }

    pub fn process(&mut self, text: impl Into<String>) {
        self.push(OutputKind::Process, text);
    }

    pub fn failure(&mut self, text: impl Into<String>) {
        self.push(OutputKind::Failure, text);
    }

    /// Oldest first
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_lines() {
        let mut log = OutputLog::new(3);
        for i in 1..=5 {
            log.process(format!("line {i}"));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.texts(), vec!["line 3", "line 4", "line 5"]);
    }

    #[test]
    fn kinds_are_preserved() {
        let mut log = OutputLog::new(10);
        log.info("docker compose up...");
        log.failure("boom");

        let kinds: Vec<_> = log.lines().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![OutputKind::Info, OutputKind::Failure]);
        assert_eq!(log.last().map(|l| l.text.as_str()), Some("boom"));
    }

    #[test]
    fn zero_capacity_still_holds_one_line() {
        let mut log = OutputLog::new(0);
        log.info("a");
        log.info("b");
        assert_eq!(log.texts(), vec!["b"]);
    }
}
