use std::path::{Path, PathBuf};

/// File names docker compose looks for, in its own lookup order
pub const COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// A compose project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    /// Build a project from a directory if it holds a compose file
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Option<Self> {
        let path = dir.as_ref();
        if !COMPOSE_FILES.iter().any(|f| path.join(f).is_file()) {
            return None;
        }

        // Compose derives the project label from the directory name
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        Some(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Resolve the configured directories into projects, skipping the ones
/// without a compose file
pub fn discover_projects<P: AsRef<Path>>(dirs: &[P]) -> Vec<Project> {
    let mut projects = Vec::new();
    for dir in dirs {
        match Project::from_dir(dir) {
            Some(project) => projects.push(project),
            None => {
                tracing::debug!(path = %dir.as_ref().display(), "No compose file, skipping");
            }
        }
    }
    projects
}
