use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::models::{ContainerSummary, MountPointTypeEnum};
use bollard::volume::ListVolumesOptions;
use bollard::Docker;
use std::collections::BTreeMap;

use crate::docker::compose::{compose_command, ComposeCommand, ComposeProcess};
use crate::docker::logs::get_container_logs;
use crate::docker::stats::get_container_stats;
use crate::docker::FleetGateway;
use crate::error::GatewayError;
use crate::models::{
    ContainerHealth, ContainerRecord, ContainerStatus, PortMapping, Project, StatsSample,
    VolumeRecord,
};

/// Label compose puts on every container it creates
const COMPOSE_PROJECT_LABEL: &str = "com.docker.compose.project";

/// Wrapper around the bollard Docker client
pub struct DockerClient {
    client: Docker,
    compose_program: Vec<String>,
}

impl DockerClient {
    /// Connect to the Docker daemon
    pub fn connect(compose_program: Vec<String>) -> Result<Self, GatewayError> {
        let client = Docker::connect_with_socket_defaults()?;
        Ok(Self {
            client,
            compose_program,
        })
    }

    async fn container_summaries(&self) -> Result<Vec<ContainerSummary>, GatewayError> {
        let options = ListContainersOptions::<String> {
            all: true,
            ..Default::default()
        };
        Ok(self.client.list_containers(Some(options)).await?)
    }
}

#[async_trait]
impl FleetGateway for DockerClient {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, GatewayError> {
        let mut result = self
            .container_summaries()
            .await?
            .into_iter()
            .map(record_from_summary)
            .collect::<Result<Vec<_>, GatewayError>>()?;

        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeRecord>, GatewayError> {
        // volume name -> (container names, host source path)
        let mut mounted: BTreeMap<String, (Vec<String>, Option<String>)> = BTreeMap::new();
        for summary in self.container_summaries().await? {
            let name = container_name(&summary);
            for mount in summary.mounts.unwrap_or_default() {
                if mount.typ != Some(MountPointTypeEnum::VOLUME) {
                    continue;
                }
                if let Some(volume) = mount.name {
                    let entry = mounted.entry(volume).or_default();
                    entry.0.push(name.clone());
                    if entry.1.is_none() {
                        entry.1 = mount.source;
                    }
                }
            }
        }

        let response = self
            .client
            .list_volumes(None::<ListVolumesOptions<String>>)
            .await?;

        let mut result = Vec::new();
        for volume in response.volumes.unwrap_or_default() {
            if let Some((containers, source)) = mounted.remove(&volume.name) {
                let mountpoint = if volume.mountpoint.is_empty() {
                    source.unwrap_or_default()
                } else {
                    volume.mountpoint
                };
                result.push(VolumeRecord {
                    name: volume.name,
                    driver: volume.driver,
                    mountpoint,
                    containers,
                });
            }
        }

        Ok(result)
    }

    async fn container_stats(&self, id: &str) -> Result<StatsSample, GatewayError> {
        get_container_stats(&self.client, id).await
    }

    async fn container_logs(
        &self,
        id: &str,
        tail: usize,
        timestamps: bool,
    ) -> Result<Vec<String>, GatewayError> {
        get_container_logs(&self.client, id, tail, timestamps).await
    }

    async fn compose(
        &self,
        project: &Project,
        command: ComposeCommand,
    ) -> Result<ComposeProcess, GatewayError> {
        let cmd = compose_command(&self.compose_program, project, command);
        ComposeProcess::spawn(cmd).map_err(|source| GatewayError::Compose {
            project: project.name.clone(),
            command: command.to_string(),
            source,
        })
    }
}

fn container_name(summary: &ContainerSummary) -> String {
    summary
        .names
        .as_ref()
        .and_then(|names| names.first().cloned())
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_default()
}

fn record_from_summary(summary: ContainerSummary) -> Result<ContainerRecord, GatewayError> {
    let name = container_name(&summary);
    let id = summary
        .id
        .ok_or_else(|| GatewayError::Malformed(format!("container {} has no id", name)))?;

    let status = ContainerStatus::from_docker_state(summary.state.as_deref().unwrap_or_default());
    let health = ContainerHealth::from_status_text(summary.status.as_deref().unwrap_or_default());

    let ports = summary
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(|p| PortMapping {
            host_port: p.public_port,
            container_port: p.private_port,
            protocol: p
                .typ
                .map(|t| format!("{:?}", t).to_lowercase())
                .unwrap_or_else(|| "tcp".to_string()),
        })
        .collect();

    let project = summary
        .labels
        .as_ref()
        .and_then(|labels| labels.get(COMPOSE_PROJECT_LABEL).cloned())
        .unwrap_or_default();

    Ok(ContainerRecord {
        id,
        name,
        status,
        health,
        image: summary.image.unwrap_or_default(),
        ports,
        project,
    })
}
