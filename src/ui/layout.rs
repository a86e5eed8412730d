use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for a mounted stack
pub struct LayoutInfo {
    /// Top title bar area
    pub header_area: Rect,
    /// Screen content
    pub content_area: Rect,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout: header, content, legend, status bar
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (border, text, border)
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        content_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
