pub mod container;
pub mod project;
pub mod stats;
pub mod volume;

pub use container::{ContainerHealth, ContainerRecord, ContainerStatus, PortMapping};
pub use project::{discover_projects, Project};
pub use stats::{StatsSample, SystemStats, Threshold};
pub use volume::{VolumeRecord, VOLUME_ATTRS};
