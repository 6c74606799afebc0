use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::action::Action;
use crate::components::status_bar::display_token;
use crate::components::{
    ContainerList, Header, LogsView, OutputPanel, ProjectsPanel, StatusBar, TerminalOverlay,
    VolumeList,
};
use crate::ui::{main_layout, split_pane, Theme};

use super::{App, Panel, RightView};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), frame.area());

        let layout = main_layout(frame.area());
        let monitor_running = self.monitor_running();
        Header::render(frame, layout.header, &self.system_stats, monitor_running);

        let (left, right) = split_pane(layout.body);
        let right_focused = self.nav.focused_panel == Panel::Right;

        ProjectsPanel::render(
            frame,
            left,
            &self.projects,
            self.nav.project_index,
            !right_focused,
            &self.palette,
        );

        if self.nav.terminal_overlay {
            let back = self
                .keymap
                .token_for(Action::DefaultView)
                .map(display_token)
                .unwrap_or_default();
            TerminalOverlay::render(
                frame,
                right,
                self.selected_container().map(|c| c.name.as_str()),
                &back,
            );
        } else {
            match self.nav.active_view {
                RightView::Containers => ContainerList::render(
                    frame,
                    right,
                    &self.snapshot.containers,
                    self.nav.container_index,
                    self.nav.container_hscroll,
                    right_focused,
                    &self.palette,
                ),
                RightView::Logs => LogsView::render(
                    frame,
                    right,
                    &self.logs,
                    &self.logs_container,
                    self.nav.log_offset,
                    self.display.max_logs_display,
                    right_focused,
                    &self.palette,
                ),
                RightView::Volumes => VolumeList::render(
                    frame,
                    right,
                    &self.snapshot.volumes,
                    self.nav.volume_index,
                    self.nav.volume_attr_index,
                    right_focused,
                    &self.palette,
                ),
            }
        }

        OutputPanel::render(
            frame,
            layout.output,
            &self.output,
            self.compose_status.as_ref(),
            &self.palette,
        );
        StatusBar::render(
            frame,
            layout.footer,
            &self.keymap,
            self.nav.focused_panel,
            self.nav.active_view,
        );
    }
}
