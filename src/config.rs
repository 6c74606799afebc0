use ratatui::style::Color;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::action::Action;
use crate::error::ConfigError;
use crate::keymap::KeyMap;
use crate::models::Threshold;
use crate::monitor::{AlertTransport, LogTransport, MailCommandTransport, MonitorSettings};
use crate::ui::Palette;

/// Environment variable listing project directories, path-list separated
pub const PROJECTS_PATH_ENV: &str = "PROJECTS_PATH";

/// Dashboard display limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Log lines fetched per container
    pub log_tail: usize,
    /// Log lines per page in the logs view
    pub max_logs_display: usize,
    /// Lines kept in the output panel
    pub max_stdout_lines: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            log_tail: 100,
            max_logs_display: 20,
            max_stdout_lines: 100,
        }
    }
}

/// Health monitor and alerting settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Alert recipient; empty sends alerts to the log only
    pub email: String,
    pub sender: String,
    pub max_emails: u32,
    pub email_interval_secs: u64,
    pub check_interval_secs: u64,
    pub send_timeout_secs: u64,
    pub mail_command: Vec<String>,
    /// Start the monitor process together with the dashboard
    pub spawn: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            sender: "compose-deck@localhost".to_string(),
            max_emails: 5,
            email_interval_secs: 30,
            check_interval_secs: 30,
            send_timeout_secs: 10,
            mail_command: vec!["sendmail".to_string(), "-t".to_string()],
            spawn: true,
        }
    }
}

impl MonitorConfig {
    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings {
            recipient: self.email.clone(),
            max_emails: self.max_emails,
            email_interval: Duration::from_secs(self.email_interval_secs),
            check_interval: Duration::from_secs(self.check_interval_secs),
            send_timeout: Duration::from_secs(self.send_timeout_secs),
        }
    }

    pub fn transport(&self) -> Box<dyn AlertTransport> {
        if self.email.is_empty() {
            Box::new(LogTransport)
        } else {
            Box::new(MailCommandTransport::new(
                self.mail_command.clone(),
                self.sender.clone(),
            ))
        }
    }
}

/// Border colours by name (`blue`, `lightcyan`, `darkgray`) or `#rrggbb`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Unfocused panel borders
    pub console: Option<String>,
    /// Border of the focused panel
    pub panel_focus: Option<String>,
}

impl ColorsConfig {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut palette = Palette::default();
        if let Some(name) = &self.console {
            palette.border = parse_color("colors.console", name)?;
        }
        if let Some(name) = &self.panel_focus {
            palette.border_focused = parse_color("colors.panel_focus", name)?;
        }
        Ok(palette)
    }
}

fn parse_color(field: &'static str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::Invalid {
        field,
        reason: format!("unknown color {name:?}"),
    })
}

/// Terminal multiplexer settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    pub session: String,
    /// Relaunch inside a new session when started outside tmux
    pub auto_session: bool,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            session: "compose-deck".to_string(),
            auto_session: true,
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keybinds: BTreeMap<Action, String>,
    pub display: DisplayConfig,
    pub monitor: MonitorConfig,
    /// Per-project resource thresholds, keyed by compose project name
    pub projects: HashMap<String, Threshold>,
    pub projects_path: Vec<PathBuf>,
    pub compose_command: Vec<String>,
    pub tmux: TmuxConfig,
    pub colors: ColorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybinds: BTreeMap::new(),
            display: DisplayConfig::default(),
            monitor: MonitorConfig::default(),
            projects: HashMap::new(),
            projects_path: Vec::new(),
            compose_command: vec!["docker".to_string(), "compose".to_string()],
            tmux: TmuxConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/compose-deck/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("compose-deck").join("config.yaml"))
    }

    /// Load from `path`, or from the default location when it exists.
    /// With neither, every setting takes its default.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Some(paths) = std::env::var_os(PROJECTS_PATH_ENV) {
            config.projects_path = std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=50).contains(&self.display.max_logs_display) {
            return Err(ConfigError::Invalid {
                field: "display.max_logs_display",
                reason: format!("{} is outside 1..=50", self.display.max_logs_display),
            });
        }
        if self.display.max_stdout_lines == 0 {
            return Err(ConfigError::Invalid {
                field: "display.max_stdout_lines",
                reason: "must keep at least one line".to_string(),
            });
        }
        if self.compose_command.is_empty() {
            return Err(ConfigError::Invalid {
                field: "compose_command",
                reason: "must name a program".to_string(),
            });
        }
        if self.monitor.max_emails == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.max_emails",
                reason: "must allow at least one alert".to_string(),
            });
        }
        if self.monitor.check_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.check_interval_secs",
                reason: "must be at least one second".to_string(),
            });
        }
        if self.monitor.send_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "monitor.send_timeout_secs",
                reason: "must be at least one second".to_string(),
            });
        }
        self.colors.palette()?;
        self.keymap().map(|_| ())
    }

    pub fn keymap(&self) -> Result<KeyMap, ConfigError> {
        KeyMap::new(&self.keybinds)
    }
}
