use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::models::SystemStats;
use crate::ui::{header_layout, Theme};

/// Header component with title, monitor state and host stats
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, stats: &SystemStats, monitor_running: bool) {
        let (title_area, stats_area) = header_layout(area);

        let title = Paragraph::new(" Compose Deck ")
            .style(Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        let (monitor_icon, monitor_color) = if monitor_running {
            ("●", Theme::GREEN)
        } else {
            ("○", Theme::OVERLAY)
        };

        let spans = vec![
            Span::styled("MON ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(monitor_icon, Style::default().fg(monitor_color)),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled("CPU ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(
                format!("{:>4.0}%", stats.cpu_percent),
                Style::default().fg(stat_color(stats.cpu_percent)),
            ),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled("MEM ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(
                format!("{:.1}/{:.0}G", stats.memory_used_gb, stats.memory_total_gb),
                Style::default().fg(stat_color(stats.memory_percent)),
            ),
            Span::raw(" "),
        ];

        let stats_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
        frame.render_widget(stats_widget, stats_area);
    }
}

/// Get color based on usage percentage
fn stat_color(percent: f32) -> Color {
    if percent > 80.0 {
        Theme::RED
    } else if percent > 60.0 {
        Theme::ORANGE
    } else if percent > 40.0 {
        Theme::YELLOW
    } else {
        Theme::GREEN
    }
}
