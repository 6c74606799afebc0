use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::ui::{border_style, title_style, Palette, Theme};

/// One page of a container's log, starting at `offset`
pub struct LogsView;

impl LogsView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        logs: &[String],
        container_name: &str,
        offset: usize,
        page_size: usize,
        focused: bool,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} │ {} ", page_title(offset, page_size, logs.len()), container_name),
                title_style(focused),
            ))
            .borders(Borders::ALL)
            .border_style(border_style(palette, focused));

        let visible_logs: Vec<Line> = logs
            .iter()
            .enumerate()
            .skip(offset)
            .take(page_size)
            .map(|(i, line)| {
                let number = Span::styled(
                    format!("{:>4} │ ", i + 1),
                    Style::default().fg(Theme::OVERLAY),
                );
                // Timestamps come first when requested
                if line.len() > 30 && line.is_char_boundary(30) && line.chars().nth(4) == Some('-') {
                    let (timestamp, rest) = line.split_at(30);
                    Line::from(vec![
                        number,
                        Span::styled(timestamp.to_string(), Style::default().fg(Color::DarkGray)),
                        Span::raw(rest.to_string()),
                    ])
                } else {
                    Line::from(vec![number, Span::raw(line.clone())])
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(visible_logs).block(block), area);

        if logs.len() > page_size {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let mut scrollbar_state =
                ScrollbarState::new(logs.len().saturating_sub(page_size)).position(offset);

            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// `Log Inspection (a-b of n)`, 1-based and inclusive
pub fn page_title(offset: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "Log Inspection (empty)".to_string();
    }
    let first = offset + 1;
    let last = (offset + page_size).min(total);
    format!("Log Inspection ({first}-{last} of {total})")
}
