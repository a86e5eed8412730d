use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use dasper::model::backend::ConnectionState;
use dasper::model::SessionState;

/// Build the status text (extracted for testability)
pub fn build_status_text(connection: &ConnectionState, session: &SessionState) -> (String, String) {
    let server = match connection {
        ConnectionState::Resolving => "● connecting".to_string(),
        ConnectionState::Connected { base_url } => format!("● {}", base_url),
        ConnectionState::Degraded { base_url, error_type, .. } => {
            format!("○ {} ({:?})", base_url, error_type)
        }
    };

    let who = match session {
        SessionState::Unknown => "checking session".to_string(),
        SessionState::Unauthenticated => "signed out".to_string(),
        SessionState::Authenticated(user) => format!("signed in as {}", user.email),
    };

    (server, who)
}

/// Render the bottom status bar: endpoint health on the left, session on the right
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    connection: &ConnectionState,
    session: &SessionState,
    palette: &Palette,
) {
    let (server, who) = build_status_text(connection, session);
    let server_color = match connection {
        ConnectionState::Resolving => palette.muted,
        ConnectionState::Connected { .. } => palette.success,
        ConnectionState::Degraded { .. } => palette.error,
    };

    let gap = (area.width as usize).saturating_sub(server.chars().count() + who.chars().count() + 2);

    let line = Line::from(vec![
        Span::styled(format!(" {}", server), Style::default().fg(server_color)),
        Span::raw(" ".repeat(gap)),
        Span::styled(format!("{} ", who), Style::default().fg(palette.muted)),
    ]);

    f.render_widget(Paragraph::new(line).style(palette.base()), area);
}
