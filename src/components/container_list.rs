use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::ContainerRecord;
use crate::ui::{border_style, selected_style, status_color, title_style, Palette, Theme};

/// Container list; the selected row scrolls horizontally
pub struct ContainerList;

impl ContainerList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        containers: &[ContainerRecord],
        selected: usize,
        hscroll: usize,
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(Span::styled(
                format!(" Containers ({}) ", containers.len()),
                title_style(focused),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(palette, focused));

        if containers.is_empty() {
            let hint = Paragraph::new("No containers found. Compose a project first.")
                .style(Style::default().fg(Theme::FG_DARK))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = containers
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let text = row_text(c, i == selected, hscroll);
                ListItem::new(format!(" {text}")).style(Style::default().fg(status_color(&c.status)))
            })
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

/// Row text, shifted left by `hscroll` characters when selected
pub fn row_text(container: &ContainerRecord, selected: bool, hscroll: usize) -> String {
    let line = container.summary_line();
    if selected {
        line.chars().skip(hscroll).collect()
    } else {
        line
    }
}
