use std::fmt;

/// Lifecycle state of a container as reported by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerStatus {
    Running,
    Exited,
    Paused,
    Created,
    Restarting,
    Removing,
    Dead,
    #[default]
    Unknown,
}

impl ContainerStatus {
    pub fn from_docker_state(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "running" => Self::Running,
            "exited" => Self::Exited,
            "paused" => Self::Paused,
            "created" => Self::Created,
            "restarting" => Self::Restarting,
            "removing" => Self::Removing,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Exited => "exited",
            Self::Paused => "paused",
            Self::Created => "created",
            Self::Restarting => "restarting",
            Self::Removing => "removing",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Healthcheck state; `Unknown` when the image defines no healthcheck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerHealth {
    Healthy,
    Unhealthy,
    Starting,
    #[default]
    Unknown,
}

impl ContainerHealth {
    /// Parse the health suffix docker appends to the human status,
    /// e.g. `Up 3 minutes (healthy)` or `Up 2 seconds (health: starting)`.
    pub fn from_status_text(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("(unhealthy)") {
            Self::Unhealthy
        } else if text.contains("(healthy)") {
            Self::Healthy
        } else if text.contains("(health: starting)") {
            Self::Starting
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Starting => "starting",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ContainerHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port mapping info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    pub host_port: Option<u16>,
    pub container_port: u16,
    pub protocol: String,
}

impl PortMapping {
    /// Format as "host:container/proto" or just "container/proto" if no host
    pub fn display(&self) -> String {
        match self.host_port {
            Some(hp) => format!("{}:{}/{}", hp, self.container_port, self.protocol),
            None => format!("{}/{}", self.container_port, self.protocol),
        }
    }
}

/// One container as seen by a single snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRecord {
    pub id: String,
    pub name: String,
    pub status: ContainerStatus,
    pub health: ContainerHealth,
    pub image: String,
    pub ports: Vec<PortMapping>,
    /// Compose project label, empty for standalone containers
    pub project: String,
}

impl ContainerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ContainerStatus::Unknown,
            health: ContainerHealth::Unknown,
            image: String::new(),
            ports: Vec::new(),
            project: String::new(),
        }
    }

    pub fn with_status(mut self, status: ContainerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_health(mut self, health: ContainerHealth) -> Self {
        self.health = health;
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn ports_display(&self) -> String {
        self.ports
            .iter()
            .map(PortMapping::display)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Single-line row shown in the containers view
    pub fn summary_line(&self) -> String {
        format!(
            "❑ {} | {} | {} | {} | {}",
            self.name,
            self.status,
            self.health,
            self.image,
            self.ports_display()
        )
    }
}
