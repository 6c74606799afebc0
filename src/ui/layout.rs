use ratatui::prelude::*;

/// Dashboard areas, top to bottom
pub struct DashboardLayout {
    pub header: Rect,
    pub body: Rect,
    pub output: Rect,
    pub footer: Rect,
}

/// Header, body, output panel and status bar
pub fn main_layout(area: Rect) -> DashboardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(8),     // Body
            Constraint::Length(10), // Output panel
            Constraint::Length(1),  // Footer/status bar
        ])
        .split(area);

    DashboardLayout {
        header: chunks[0],
        body: chunks[1],
        output: chunks[2],
        footer: chunks[3],
    }
}

/// Split header into title and stats sections
pub fn header_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(16),    // Title
            Constraint::Length(48), // Stats
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Projects on the left, the active view on the right
pub fn split_pane(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered modal area
pub fn centered_modal(area: Rect, width_percent: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent.min(100)) / 2),
            Constraint::Percentage(width_percent.min(100)),
            Constraint::Percentage((100 - width_percent.min(100)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_layout_reserves_fixed_rows() {
        let layout = main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.output.height, 10);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.body.height, 28);
    }

    #[test]
    fn split_pane_gives_projects_a_third() {
        let (left, right) = split_pane(Rect::new(0, 0, 100, 10));
        assert_eq!(left.width, 35);
        assert_eq!(right.width, 65);
    }
}
