//! Main stack screens: home, profile menu, edit profile

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::forms::render_form;
use super::theme::Palette;
use dasper::logic::formatting::{display_name, initials, member_since, or_dash};
use dasper::logic::menu::{profile_menu, setting_value};
use dasper::model::backend::ConnectionState;
use dasper::model::{MainScreen, MenuAction, Model, UserProfile};

pub fn render_main_stack(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    // Main stack is only mounted with a user; render nothing rather than guess
    let Some(user) = model.current_user() else {
        return;
    };

    match model.navigation.main_screen {
        MainScreen::Home => render_home(f, area, model, user, palette),
        MainScreen::Profile => render_profile(f, area, model, user, palette),
        MainScreen::EditProfile => {
            if let Some(form) = &model.ui.profile_form {
                render_form(f, area, "Edit Profile", form, palette, "save")
            }
        }
    }
}

fn card<'a>(title: &'a str, lines: Vec<Line<'a>>, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", title), palette.title()))
                .border_style(Style::default().fg(palette.border)),
        )
        .style(palette.base())
}

/// Header lines shared by home and profile: avatar initials, name, email
fn identity_lines(user: &UserProfile, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", initials(&user.full_name)),
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(display_name(user), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(palette.muted))),
    ];
    if let Some(since) = member_since(user) {
        lines.push(Line::from(Span::styled(since, Style::default().fg(palette.muted))));
    }
    lines
}

fn render_home(f: &mut Frame, area: Rect, model: &Model, user: &UserProfile, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut profile_lines = identity_lines(user, palette);
    profile_lines.push(Line::from(""));
    profile_lines.push(Line::from(format!("Organization  {}", or_dash(&user.organization))));
    profile_lines.push(Line::from(format!("Role          {}", or_dash(&user.role))));
    profile_lines.push(Line::from(format!("Phone         {}", or_dash(&user.phone))));
    f.render_widget(card("Responder", profile_lines, palette), chunks[0]);

    let (status, status_style) = match &model.backend.connection_state {
        ConnectionState::Resolving => ("Connecting".to_string(), Style::default().fg(palette.muted)),
        ConnectionState::Connected { .. } => ("Online".to_string(), Style::default().fg(palette.success)),
        ConnectionState::Degraded { message, .. } => {
            (format!("Offline ({})", message), Style::default().fg(palette.error))
        }
    };
    let mut server_lines = vec![
        Line::from(vec![Span::raw("Status    "), Span::styled(status, status_style)]),
        Line::from(format!(
            "Endpoint  {}",
            model.backend.connection_state.base_url().unwrap_or("—")
        )),
    ];
    if let Some(health) = &model.backend.health {
        let flag = |ok: bool| if ok { "up" } else { "down" };
        server_lines.push(Line::from(format!("Database  {}", flag(health.mongodb))));
        server_lines.push(Line::from(format!("Models    {}", flag(health.model_manager))));
    }
    f.render_widget(card("Server", server_lines, palette), chunks[1]);
}

fn render_profile(f: &mut Frame, area: Rect, model: &Model, user: &UserProfile, palette: &Palette) {
    let header_lines = identity_lines(user, palette);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_lines.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(card("Profile", header_lines, palette), chunks[0]);

    let items: Vec<ListItem> = profile_menu()
        .into_iter()
        .map(|entry| {
            let suffix = match &entry.action {
                MenuAction::Toggle(setting) => {
                    if setting_value(*setting, model.ui.color_scheme, Some(user)) {
                        "  [on]"
                    } else {
                        "  [off]"
                    }
                }
                MenuAction::Navigate(_) => "  ›",
                MenuAction::Confirm(_) => "",
            };
            let style = match entry.action {
                MenuAction::Confirm(_) => Style::default().fg(palette.error),
                _ => Style::default().fg(palette.fg),
            };
            ListItem::new(Line::from(vec![
                Span::styled(entry.label, style),
                Span::styled(suffix, Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(model.navigation.menu_selection));

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", palette.title()))
                .border_style(Style::default().fg(palette.border)),
        )
        .style(palette.base())
        .highlight_style(palette.selected())
        .highlight_symbol("▶ ");

    f.render_stateful_widget(menu, chunks[1], &mut state);
}
