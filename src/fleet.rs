use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::sync::Arc;

use crate::docker::FleetGateway;
use crate::error::GatewayError;
use crate::models::{ContainerRecord, VolumeRecord};

/// Point-in-time view of every container and volume
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub containers: Vec<ContainerRecord>,
    pub volumes: Vec<VolumeRecord>,
    pub taken_at: DateTime<Local>,
}

impl FleetSnapshot {
    pub fn empty() -> Self {
        Self {
            containers: Vec::new(),
            volumes: Vec::new(),
            taken_at: Local::now(),
        }
    }

    pub fn container_ids(&self) -> HashSet<&str> {
        self.containers.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Pulls fresh snapshots from the gateway; never caches
#[derive(Clone)]
pub struct SnapshotProvider {
    gateway: Arc<dyn FleetGateway>,
}

impl SnapshotProvider {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<dyn FleetGateway> {
        &self.gateway
    }

    pub async fn refresh(&self) -> Result<FleetSnapshot, GatewayError> {
        let containers = self.gateway.list_containers().await?;
        let volumes = self.gateway.list_volumes().await?;
        Ok(FleetSnapshot {
            containers,
            volumes,
            taken_at: Local::now(),
        })
    }
}
