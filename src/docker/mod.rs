pub mod client;
pub mod compose;
pub mod logs;
pub mod stats;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::{ContainerRecord, Project, StatsSample, VolumeRecord};

pub use client::DockerClient;
pub use compose::{ComposeCommand, ComposeProcess};

/// Everything the console and the monitor need from the container runtime
#[async_trait]
pub trait FleetGateway: Send + Sync {
    /// All containers, running or not
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, GatewayError>;

    /// Volumes mounted by at least one container
    async fn list_volumes(&self) -> Result<Vec<VolumeRecord>, GatewayError>;

    async fn container_stats(&self, id: &str) -> Result<StatsSample, GatewayError>;

    async fn container_logs(
        &self,
        id: &str,
        tail: usize,
        timestamps: bool,
    ) -> Result<Vec<String>, GatewayError>;

    /// Start a compose lifecycle command for `project`
    async fn compose(
        &self,
        project: &Project,
        command: ComposeCommand,
    ) -> Result<ComposeProcess, GatewayError>;
}
