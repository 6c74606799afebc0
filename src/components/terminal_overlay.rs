use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::{centered_modal, Theme};

/// Placeholder over the right panel while a container shell is open
pub struct TerminalOverlay;

impl TerminalOverlay {
    pub fn render(frame: &mut Frame, area: Rect, container: Option<&str>, back_key: &str) {
        let modal_area = centered_modal(area, 80, 7);
        frame.render_widget(Clear, modal_area);

        let target = container.unwrap_or("no container selected");
        let text = vec![
            Line::raw(""),
            Line::styled(
                format!("Shell for {target} runs in the pane alongside."),
                Style::default().fg(Theme::FG),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled(format!(" {back_key} "), Style::default().fg(Theme::GREEN)),
                Span::raw("back to containers"),
            ]),
        ];

        let block = Block::default()
            .title(" Container Terminal ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::MODAL_BORDER))
            .style(Style::default().bg(Theme::MODAL_BG));

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, modal_area);
    }
}
