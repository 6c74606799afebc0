pub mod container_list;
pub mod header;
pub mod logs_view;
pub mod output_panel;
pub mod projects_panel;
pub mod status_bar;
pub mod terminal_overlay;
pub mod volume_list;

pub use container_list::ContainerList;
pub use header::Header;
pub use logs_view::LogsView;
pub use output_panel::OutputPanel;
pub use projects_panel::ProjectsPanel;
pub use status_bar::StatusBar;
pub use terminal_overlay::TerminalOverlay;
pub use volume_list::VolumeList;
