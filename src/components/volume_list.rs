use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::{VolumeRecord, VOLUME_ATTRS};
use crate::ui::{border_style, selected_style, title_style, Palette, Theme};

/// Volume list; the selected row shows one attribute at a time
pub struct VolumeList;

impl VolumeList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        volumes: &[VolumeRecord],
        selected: usize,
        attr: usize,
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(Span::styled(
                format!(" Volumes ({}) ", volumes.len()),
                title_style(focused),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(palette, focused));

        if volumes.is_empty() {
            let hint = Paragraph::new("No volumes found.")
                .style(Style::default().fg(Theme::FG_DARK))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = volumes
            .iter()
            .enumerate()
            .map(|(i, v)| {
                ListItem::new(format!(" {}", row_text(v, i == selected, attr)))
                    .style(Style::default().fg(Theme::FG))
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

pub fn row_text(volume: &VolumeRecord, selected: bool, attr: usize) -> String {
    if selected {
        let attr = attr % VOLUME_ATTRS.len();
        format!("⊟ {} - {}", VOLUME_ATTRS[attr], volume.attr(attr))
    } else {
        format!("⊟ name - {}", volume.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_shows_chosen_attribute() {
        let v = VolumeRecord {
            name: "pgdata".to_string(),
            driver: "local".to_string(),
            mountpoint: "/var/lib/docker/volumes/pgdata/_data".to_string(),
            containers: vec!["db-1".to_string(), "backup-1".to_string()],
        };

        assert_eq!(row_text(&v, false, 3), "⊟ name - pgdata");
        assert_eq!(row_text(&v, true, 1), "⊟ driver - local");
        assert_eq!(row_text(&v, true, 3), "⊟ containers - db-1, backup-1");
    }
}
