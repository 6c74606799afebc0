use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::action::Action;
use crate::app::{Panel, RightView};
use crate::keymap::KeyMap;
use crate::ui::{key_desc_span, key_span, Theme};

/// Status bar component (bottom of screen) - keybindings only
pub struct StatusBar;

impl StatusBar {
    /// Bindings relevant to where focus is
    pub fn bindings(panel: Panel, view: RightView) -> Vec<(Action, &'static str)> {
        let mut bindings = vec![
            (Action::MoveUp, "up"),
            (Action::MoveDown, "down"),
            (Action::SwitchPanel, "panel"),
        ];

        match (panel, view) {
            (Panel::Left, _) => {
                bindings.push((Action::ComposeUp, "compose up"));
                bindings.push((Action::ComposeDown, "compose down"));
            }
            (Panel::Right, RightView::Logs) => {
                bindings.push((Action::LogsPageUp, "page up"));
                bindings.push((Action::LogsPageDown, "page down"));
                bindings.push((Action::LogsHome, "top"));
                bindings.push((Action::LogsEnd, "end"));
            }
            (Panel::Right, RightView::Containers) => {
                bindings.push((Action::MoveRight, "scroll"));
                bindings.push((Action::ViewLogs, "logs"));
                bindings.push((Action::ContainerTerminal, "terminal"));
            }
            (Panel::Right, RightView::Volumes) => {
                bindings.push((Action::MoveRight, "attribute"));
            }
        }

        bindings.push((Action::ViewContainers, "containers"));
        bindings.push((Action::ViewVolumes, "volumes"));
        bindings.push((Action::Quit, "quit"));
        bindings
    }

    pub fn render(frame: &mut Frame, area: Rect, keymap: &KeyMap, panel: Panel, view: RightView) {
        let mut spans: Vec<Span> = Vec::new();
        for (action, desc) in Self::bindings(panel, view) {
            if let Some(token) = keymap.token_for(action) {
                spans.push(key_span(&display_token(token)));
                spans.push(key_desc_span(desc));
            }
        }

        let keys_widget = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Theme::BG_DARK))
            .alignment(Alignment::Center);
        frame.render_widget(keys_widget, area);
    }
}

/// Printable label for a raw key token
pub fn display_token(token: &str) -> String {
    match token {
        "\x1b[A" => "↑".to_string(),
        "\x1b[B" => "↓".to_string(),
        "\x1b[C" => "→".to_string(),
        "\x1b[D" => "←".to_string(),
        "\x1b[H" => "Home".to_string(),
        "\x1b[F" => "End".to_string(),
        "\x1b[5~" => "PgUp".to_string(),
        "\x1b[6~" => "PgDn".to_string(),
        "\x1b" => "Esc".to_string(),
        "\t" => "Tab".to_string(),
        "\n" => "Enter".to_string(),
        " " => "Space".to_string(),
        other => other.to_string(),
    }
}
