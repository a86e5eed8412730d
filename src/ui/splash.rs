use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::centered_rect;
use super::theme::Palette;
use dasper::logic::ui::spinner_frame;
use dasper::model::backend::ConnectionState;

/// Render the startup splash: app name, tagline and a loading spinner
pub fn render_splash(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    spinner_tick: usize,
    connection_state: &ConnectionState,
) {
    let status = match connection_state {
        ConnectionState::Resolving => "Connecting to server",
        ConnectionState::Connected { .. } => "Connected",
        ConnectionState::Degraded { .. } => "Server unreachable, continuing offline",
    };

    let lines = vec![
        Line::from(Span::styled("D A S P E R", palette.title())),
        Line::from(Span::styled(
            "Disaster damage assessment",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(spinner_tick), palette.hotkey()),
            Span::raw(" "),
            Span::styled(status, Style::default().fg(palette.muted)),
        ]),
    ];

    let splash_area = centered_rect(area, 60, lines.len() as u16);
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.base());

    f.render_widget(splash, splash_area);
}
