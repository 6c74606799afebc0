use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{ComposeOutcome, OutputLog};
use crate::ui::{border_style, output_color, Palette, Theme};

/// Bounded output of console messages and compose runs
pub struct OutputPanel;

impl OutputPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        output: &OutputLog,
        outcome: Option<&ComposeOutcome>,
        palette: &Palette,
    ) {
        let mut title = vec![Span::styled(" Output ", Style::default().fg(Theme::FG_DARK))];
        if let Some(outcome) = outcome {
            let color = if outcome.success() { Theme::GREEN } else { Theme::RED };
            title.push(Span::styled(
                format!("[{}] ", outcome.summary()),
                Style::default().fg(color),
            ));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(border_style(palette, false));

        // Newest lines stay in view
        let visible = block.inner(area).height as usize;
        let skip = output.len().saturating_sub(visible);

        let lines: Vec<Line> = output
            .lines()
            .skip(skip)
            .map(|l| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", l.at.format("%H:%M:%S")),
                        Style::default().fg(Theme::OVERLAY),
                    ),
                    Span::styled(l.text.clone(), Style::default().fg(output_color(l.kind))),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
