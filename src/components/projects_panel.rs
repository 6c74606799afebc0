use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::models::Project;
use crate::ui::{border_style, selected_style, title_style, Palette, Theme};

/// Left panel listing the compose projects
pub struct ProjectsPanel;

impl ProjectsPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        projects: &[Project],
        selected: usize,
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(Span::styled(" Projects ", title_style(focused)))
            .borders(Borders::ALL)
            .border_style(border_style(palette, focused));

        if projects.is_empty() {
            let hint = Paragraph::new(
                "No projects found. Add compose project directories to projects_path or PROJECTS_PATH.",
            )
            .style(Style::default().fg(Theme::FG_DARK))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = projects
            .iter()
            .map(|p| ListItem::new(format!(" 🗀 {}", p.name)).style(Style::default().fg(Theme::FG)))
            .collect();

        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(selected_style());
        }

        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
