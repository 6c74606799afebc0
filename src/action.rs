use serde::Deserialize;

/// Logical dashboard actions; the keymap binds raw key tokens to these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SwitchPanel,

    // Compose lifecycle
    ComposeUp,
    ComposeDown,

    // Logs
    ViewLogs,
    LogsPageUp,
    LogsPageDown,
    LogsHome,
    LogsEnd,

    // Views
    ViewContainers,
    ViewVolumes,
    DefaultView,
    ContainerTerminal,

    // App control
    Quit,
}

impl Action {
    pub const ALL: [Action; 17] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::SwitchPanel,
        Action::ComposeUp,
        Action::ComposeDown,
        Action::ViewLogs,
        Action::LogsPageUp,
        Action::LogsPageDown,
        Action::LogsHome,
        Action::LogsEnd,
        Action::ViewContainers,
        Action::ViewVolumes,
        Action::DefaultView,
        Action::ContainerTerminal,
        Action::Quit,
    ];

    /// Name used in the config file
    pub fn config_name(&self) -> &'static str {
        match self {
            Action::MoveUp => "MOVE_UP",
            Action::MoveDown => "MOVE_DOWN",
            Action::MoveLeft => "MOVE_LEFT",
            Action::MoveRight => "MOVE_RIGHT",
            Action::SwitchPanel => "SWITCH_PANEL",
            Action::ComposeUp => "COMPOSE_UP",
            Action::ComposeDown => "COMPOSE_DOWN",
            Action::ViewLogs => "VIEW_LOGS",
            Action::LogsPageUp => "LOGS_PAGE_UP",
            Action::LogsPageDown => "LOGS_PAGE_DOWN",
            Action::LogsHome => "LOGS_HOME",
            Action::LogsEnd => "LOGS_END",
            Action::ViewContainers => "VIEW_CONTAINERS",
            Action::ViewVolumes => "VIEW_VOLUMES",
            Action::DefaultView => "DEFAULT_VIEW",
            Action::ContainerTerminal => "CONTAINER_TERMINAL",
            Action::Quit => "QUIT",
        }
    }

    /// Factory key token
    pub fn default_token(&self) -> &'static str {
        match self {
            Action::MoveUp => "\x1b[A",
            Action::MoveDown => "\x1b[B",
            Action::MoveLeft => "\x1b[D",
            Action::MoveRight => "\x1b[C",
            Action::SwitchPanel => "\t",
            Action::ComposeUp => "u",
            Action::ComposeDown => "d",
            Action::ViewLogs => "l",
            Action::LogsPageUp => "k",
            Action::LogsPageDown => "j",
            Action::LogsHome => "g",
            Action::LogsEnd => "f",
            Action::ViewContainers => "c",
            Action::ViewVolumes => "v",
            Action::DefaultView => "q",
            Action::ContainerTerminal => "t",
            Action::Quit => "e",
        }
    }
}
