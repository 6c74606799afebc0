use ratatui::prelude::*;

use crate::app::OutputKind;
use crate::models::{ContainerHealth, ContainerStatus};

/// Catppuccin Mocha color theme
/// https://github.com/catppuccin/catppuccin
pub struct Theme;

impl Theme {
    pub const CRUST: Color = Color::Rgb(17, 17, 27);          // #11111b
    pub const BG: Color = Self::CRUST;
    pub const BG_DARK: Color = Color::Rgb(12, 12, 20);        // modals, status bar
    pub const SURFACE0: Color = Color::Rgb(49, 50, 68);       // #313244
    pub const FG: Color = Color::Rgb(205, 214, 244);          // #cdd6f4
    pub const FG_DARK: Color = Color::Rgb(147, 153, 178);     // #9399b2
    pub const OVERLAY: Color = Color::Rgb(127, 132, 156);     // #7f849c

    pub const MAUVE: Color = Color::Rgb(203, 166, 247);       // #cba6f7
    pub const RED: Color = Color::Rgb(243, 139, 168);         // #f38ba8
    pub const PEACH: Color = Color::Rgb(250, 179, 135);       // #fab387
    pub const YELLOW: Color = Color::Rgb(249, 226, 175);      // #f9e2af
    pub const GREEN: Color = Color::Rgb(166, 227, 161);       // #a6e3a1
    pub const TEAL: Color = Color::Rgb(148, 226, 213);        // #94e2d5
    pub const BLUE: Color = Color::Rgb(137, 180, 250);        // #89b4fa
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254);    // #b4befe

    pub const ORANGE: Color = Self::PEACH;

    // UI elements
    pub const BORDER: Color = Self::SURFACE0;
    pub const BORDER_FOCUSED: Color = Self::MAUVE;
    pub const SELECTION_BG: Color = Self::SURFACE0;
    pub const SELECTION_FG: Color = Self::LAVENDER;

    // Modal
    pub const MODAL_BG: Color = Self::BG_DARK;
    pub const MODAL_BORDER: Color = Self::MAUVE;
}

/// Border colours, overridable from the `colors` config section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: Theme::BORDER,
            border_focused: Theme::BORDER_FOCUSED,
        }
    }
}

/// Color for a container lifecycle state
pub fn status_color(status: &ContainerStatus) -> Color {
    match status {
        ContainerStatus::Running => Theme::GREEN,
        ContainerStatus::Exited | ContainerStatus::Dead | ContainerStatus::Removing => Theme::RED,
        ContainerStatus::Paused | ContainerStatus::Restarting => Theme::YELLOW,
        ContainerStatus::Created => Theme::PEACH,
        ContainerStatus::Unknown => Theme::OVERLAY,
    }
}

pub fn health_color(health: &ContainerHealth) -> Color {
    match health {
        ContainerHealth::Healthy => Theme::GREEN,
        ContainerHealth::Unhealthy => Theme::RED,
        ContainerHealth::Starting => Theme::YELLOW,
        ContainerHealth::Unknown => Theme::OVERLAY,
    }
}

pub fn output_color(kind: OutputKind) -> Color {
    match kind {
        OutputKind::Info => Theme::TEAL,
        OutputKind::Process => Theme::FG,
        OutputKind::Failure => Theme::RED,
    }
}

/// Create a style for selected items
pub fn selected_style() -> Style {
    Style::default()
        .bg(Theme::SELECTION_BG)
        .fg(Theme::SELECTION_FG)
        .add_modifier(Modifier::BOLD)
}

/// Create a style for borders
pub fn border_style(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().fg(palette.border_focused)
    } else {
        Style::default().fg(palette.border)
    }
}

/// Create a style for panel titles
pub fn title_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Theme::LAVENDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::OVERLAY)
    }
}

/// Create a keybinding span (highlighted key)
pub fn key_span(key: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default()
            .bg(Theme::MAUVE)
            .fg(Theme::BG_DARK)
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a keybinding description span (with trailing separator)
pub fn key_desc_span(desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {}   ", desc),
        Style::default().fg(Theme::FG_DARK),
    )
}
