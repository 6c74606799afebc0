/// Attribute columns a volume row can display, in cycling order
pub const VOLUME_ATTRS: [&str; 4] = ["name", "driver", "mountpoint", "containers"];

/// A named volume and the containers mounting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRecord {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub containers: Vec<String>,
}

impl VolumeRecord {
    /// Value of the attribute at `index` into [`VOLUME_ATTRS`]
    pub fn attr(&self, index: usize) -> String {
        match index % VOLUME_ATTRS.len() {
            0 => self.name.clone(),
            1 => self.driver.clone(),
            2 => self.mountpoint.clone(),
            _ => self.containers.join(", "),
        }
    }
}
