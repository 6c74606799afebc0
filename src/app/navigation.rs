use crate::action::Action;
use crate::docker::ComposeCommand;
use crate::models::VOLUME_ATTRS;

/// Top-level dashboard region holding focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Left,
    Right,
}

impl Panel {
    fn toggle(self) -> Self {
        match self {
            Panel::Left => Panel::Right,
            Panel::Right => Panel::Left,
        }
    }
}

/// What the right panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightView {
    #[default]
    Containers,
    Logs,
    Volumes,
}

impl RightView {
    pub fn as_str(&self) -> &'static str {
        match self {
            RightView::Containers => "containers",
            RightView::Logs => "logs",
            RightView::Volumes => "volumes",
        }
    }
}

/// Sizes of the collections the indices point into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extents {
    pub projects: usize,
    pub containers: usize,
    pub volumes: usize,
    pub log_lines: usize,
    pub page_size: usize,
}

impl Extents {
    pub fn max_log_offset(&self) -> usize {
        self.log_lines.saturating_sub(self.page_size)
    }
}

/// Side effect a transition asks the dashboard to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Compose(ComposeCommand),
    OpenLogs,
    StopMonitor,
    OpenTerminal,
    Quit,
}

/// Focus, view and scroll position of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub focused_panel: Panel,
    pub active_view: RightView,
    pub project_index: usize,
    pub container_index: usize,
    /// Horizontal scroll of the selected container row, in characters
    pub container_hscroll: usize,
    pub volume_index: usize,
    pub volume_attr_index: usize,
    pub log_offset: usize,
    pub terminal_overlay: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    fn right_view(&self) -> Option<RightView> {
        match self.focused_panel {
            Panel::Right => Some(self.active_view),
            Panel::Left => None,
        }
    }

    fn select_container(&mut self, index: usize) {
        if index != self.container_index {
            self.container_index = index;
            self.container_hscroll = 0;
        }
    }

    /// Apply one logical action. Indices are assumed clamped to `ext`.
    pub fn apply(&mut self, action: Action, ext: &Extents) -> Effect {
        match action {
            Action::MoveUp => {
                match self.right_view() {
                    None => self.project_index = self.project_index.saturating_sub(1),
                    Some(RightView::Containers) => {
                        self.select_container(self.container_index.saturating_sub(1))
                    }
                    Some(RightView::Logs) => self.log_offset = self.log_offset.saturating_sub(1),
                    Some(RightView::Volumes) => {
                        self.volume_index = self.volume_index.saturating_sub(1)
                    }
                }
                Effect::None
            }

            Action::MoveDown => {
                match self.right_view() {
                    None => self.project_index = step_down(self.project_index, ext.projects),
                    Some(RightView::Containers) => {
                        self.select_container(step_down(self.container_index, ext.containers))
                    }
                    Some(RightView::Logs) => {
                        if self.log_offset < ext.max_log_offset() {
                            self.log_offset += 1;
                        }
                    }
                    Some(RightView::Volumes) => {
                        self.volume_index = step_down(self.volume_index, ext.volumes)
                    }
                }
                Effect::None
            }

            Action::MoveRight => {
                match self.right_view() {
                    Some(RightView::Containers) => {
                        self.container_hscroll = self.container_hscroll.saturating_add(1)
                    }
                    Some(RightView::Volumes) => {
                        self.volume_attr_index = (self.volume_attr_index + 1) % VOLUME_ATTRS.len()
                    }
                    _ => {}
                }
                Effect::None
            }

            Action::MoveLeft => {
                match self.right_view() {
                    Some(RightView::Containers) => {
                        self.container_hscroll = self.container_hscroll.saturating_sub(1)
                    }
                    Some(RightView::Volumes) => {
                        self.volume_attr_index = self.volume_attr_index.saturating_sub(1)
                    }
                    _ => {}
                }
                Effect::None
            }

            Action::SwitchPanel => {
                self.focused_panel = self.focused_panel.toggle();
                Effect::None
            }

            Action::ComposeUp => {
                if self.focused_panel == Panel::Left && ext.projects > 0 {
                    Effect::Compose(ComposeCommand::Up)
                } else {
                    Effect::None
                }
            }

            Action::ComposeDown => {
                if self.focused_panel == Panel::Left && ext.projects > 0 {
                    self.active_view = RightView::Containers;
                    Effect::Compose(ComposeCommand::Down)
                } else {
                    Effect::None
                }
            }

            Action::ViewLogs => {
                if self.active_view == RightView::Containers && ext.containers > 0 {
                    self.active_view = RightView::Logs;
                    self.log_offset = 0;
                    Effect::OpenLogs
                } else {
                    Effect::None
                }
            }

            Action::LogsPageUp => {
                if self.active_view == RightView::Logs {
                    self.log_offset = self.log_offset.saturating_sub(ext.page_size);
                    Effect::None
                } else {
                    Effect::StopMonitor
                }
            }

            Action::LogsPageDown => {
                if self.active_view == RightView::Logs {
                    self.log_offset = (self.log_offset + ext.page_size).min(ext.max_log_offset());
                }
                Effect::None
            }

            Action::LogsHome => {
                if self.active_view == RightView::Logs {
                    self.log_offset = 0;
                }
                Effect::None
            }

            Action::LogsEnd => {
                if self.active_view == RightView::Logs {
                    self.log_offset = ext.max_log_offset();
                }
                Effect::None
            }

            Action::ViewContainers => {
                self.active_view = RightView::Containers;
                Effect::None
            }

            Action::ViewVolumes => {
                self.active_view = RightView::Volumes;
                Effect::None
            }

            Action::DefaultView => {
                self.terminal_overlay = false;
                self.active_view = RightView::Containers;
                Effect::None
            }

            Action::ContainerTerminal => {
                self.terminal_overlay = true;
                if ext.containers > 0 {
                    Effect::OpenTerminal
                } else {
                    Effect::None
                }
            }

            Action::Quit => Effect::Quit,
        }
    }

    /// Pull every index back inside `ext` after the collections changed
    pub fn clamp(&mut self, ext: &Extents) {
        self.project_index = clamp_index(self.project_index, ext.projects);
        self.select_container(clamp_index(self.container_index, ext.containers));
        self.volume_index = clamp_index(self.volume_index, ext.volumes);
        self.volume_attr_index = self.volume_attr_index.min(VOLUME_ATTRS.len() - 1);
        self.log_offset = self.log_offset.min(ext.max_log_offset());

        if self.active_view == RightView::Logs && ext.containers == 0 {
            self.active_view = RightView::Containers;
        }
    }
}

fn step_down(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(containers: usize, log_lines: usize, page_size: usize) -> Extents {
        Extents {
            projects: 3,
            containers,
            volumes: 2,
            log_lines,
            page_size,
        }
    }

    fn right(view: RightView) -> NavigationState {
        NavigationState {
            focused_panel: Panel::Right,
            active_view: view,
            ..Default::default()
        }
    }

    #[test]
    fn left_focus_moves_project_selection() {
        let ext = extents(0, 0, 10);
        let mut nav = NavigationState::new();

        nav.apply(Action::MoveUp, &ext);
        assert_eq!(nav.project_index, 0);
        nav.apply(Action::MoveDown, &ext);
        nav.apply(Action::MoveDown, &ext);
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.project_index, 2);
    }

    #[test]
    fn container_index_stays_in_range_and_resets_hscroll() {
        let ext = extents(3, 0, 10);
        let mut nav = right(RightView::Containers);

        nav.apply(Action::MoveRight, &ext);
        nav.apply(Action::MoveRight, &ext);
        assert_eq!(nav.container_hscroll, 2);

        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.container_index, 1);
        assert_eq!(nav.container_hscroll, 0);

        nav.apply(Action::MoveDown, &ext);
        nav.apply(Action::MoveRight, &ext);
        let before = nav.clone();
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav, before, "MoveDown at the last row is a no-op");

        for _ in 0..5 {
            nav.apply(Action::MoveUp, &ext);
        }
        assert_eq!(nav.container_index, 0);
        assert_eq!(nav.container_hscroll, 0);
    }

    #[test]
    fn empty_container_list_keeps_index_at_zero() {
        let ext = extents(0, 0, 10);
        let mut nav = right(RightView::Containers);
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.container_index, 0);
        assert_eq!(nav.apply(Action::ViewLogs, &ext), Effect::None);
        assert_eq!(nav.active_view, RightView::Containers);
    }

    #[test]
    fn logs_paging_respects_bounds() {
        let ext = extents(1, 45, 10);
        let mut nav = right(RightView::Containers);
        assert_eq!(nav.apply(Action::ViewLogs, &ext), Effect::OpenLogs);
        assert_eq!(nav.active_view, RightView::Logs);

        nav.apply(Action::LogsEnd, &ext);
        assert_eq!(nav.log_offset, 35);

        nav.apply(Action::LogsPageDown, &ext);
        assert_eq!(nav.log_offset, 35);
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.log_offset, 35);

        nav.apply(Action::LogsPageUp, &ext);
        assert_eq!(nav.log_offset, 25);
        nav.apply(Action::LogsPageUp, &ext);
        nav.apply(Action::LogsPageUp, &ext);
        nav.apply(Action::LogsPageUp, &ext);
        assert_eq!(nav.log_offset, 0);

        nav.apply(Action::LogsPageDown, &ext);
        assert_eq!(nav.log_offset, 10);
        nav.apply(Action::LogsHome, &ext);
        assert_eq!(nav.log_offset, 0);
    }

    #[test]
    fn short_log_never_scrolls() {
        let ext = extents(1, 4, 10);
        let mut nav = right(RightView::Logs);

        nav.apply(Action::LogsEnd, &ext);
        assert_eq!(nav.log_offset, 0);
        nav.apply(Action::LogsPageDown, &ext);
        assert_eq!(nav.log_offset, 0);
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.log_offset, 0);
    }

    #[test]
    fn log_jumps_only_apply_in_logs_view() {
        // A log from an earlier visit is still loaded
        let ext = extents(1, 45, 10);
        let mut nav = right(RightView::Containers);

        nav.apply(Action::LogsEnd, &ext);
        assert_eq!(nav.log_offset, 0);

        nav.apply(Action::ViewLogs, &ext);
        nav.apply(Action::LogsEnd, &ext);
        assert_eq!(nav.log_offset, 35);
        nav.apply(Action::ViewVolumes, &ext);
        nav.apply(Action::LogsHome, &ext);
        assert_eq!(nav.log_offset, 35);
    }

    #[test]
    fn page_up_outside_logs_stops_monitor() {
        let ext = extents(1, 0, 10);
        let mut nav = right(RightView::Volumes);
        assert_eq!(nav.apply(Action::LogsPageUp, &ext), Effect::StopMonitor);

        let mut nav = right(RightView::Logs);
        assert_eq!(nav.apply(Action::LogsPageUp, &ext), Effect::None);
    }

    #[test]
    fn volume_attribute_cycles_right_and_floors_left() {
        let ext = extents(1, 0, 10);
        let mut nav = right(RightView::Volumes);

        for _ in 0..VOLUME_ATTRS.len() {
            nav.apply(Action::MoveRight, &ext);
        }
        assert_eq!(nav.volume_attr_index, 0);

        nav.apply(Action::MoveLeft, &ext);
        assert_eq!(nav.volume_attr_index, 0);

        nav.apply(Action::MoveDown, &ext);
        nav.apply(Action::MoveDown, &ext);
        assert_eq!(nav.volume_index, 1);
    }

    #[test]
    fn compose_requires_left_focus() {
        let ext = extents(1, 0, 10);
        let mut nav = right(RightView::Volumes);
        assert_eq!(nav.apply(Action::ComposeDown, &ext), Effect::None);
        assert_eq!(nav.active_view, RightView::Volumes);

        nav.apply(Action::SwitchPanel, &ext);
        assert_eq!(nav.apply(Action::ComposeUp, &ext), Effect::Compose(ComposeCommand::Up));
        assert_eq!(
            nav.apply(Action::ComposeDown, &ext),
            Effect::Compose(ComposeCommand::Down)
        );
        assert_eq!(nav.active_view, RightView::Containers);

        let no_projects = Extents { projects: 0, ..ext };
        assert_eq!(nav.apply(Action::ComposeUp, &no_projects), Effect::None);
    }

    #[test]
    fn terminal_overlay_and_default_view() {
        let ext = extents(2, 0, 10);
        let mut nav = right(RightView::Volumes);

        assert_eq!(nav.apply(Action::ContainerTerminal, &ext), Effect::OpenTerminal);
        assert!(nav.terminal_overlay);

        nav.apply(Action::DefaultView, &ext);
        assert!(!nav.terminal_overlay);
        assert_eq!(nav.active_view, RightView::Containers);

        let empty = extents(0, 0, 10);
        assert_eq!(nav.apply(Action::ContainerTerminal, &empty), Effect::None);
        assert!(nav.terminal_overlay);
    }

    #[test]
    fn clamp_follows_shrinking_collections() {
        let mut nav = NavigationState {
            focused_panel: Panel::Right,
            active_view: RightView::Logs,
            project_index: 4,
            container_index: 5,
            container_hscroll: 7,
            volume_index: 3,
            log_offset: 40,
            ..Default::default()
        };

        nav.clamp(&extents(2, 30, 10));
        assert_eq!(nav.project_index, 2);
        assert_eq!(nav.container_index, 1);
        assert_eq!(nav.container_hscroll, 0);
        assert_eq!(nav.volume_index, 1);
        assert_eq!(nav.log_offset, 20);
        assert_eq!(nav.active_view, RightView::Logs);

        nav.clamp(&extents(0, 0, 10));
        assert_eq!(nav.container_index, 0);
        assert_eq!(nav.active_view, RightView::Containers);
    }
}
