//! Auth stack screens: welcome, sign in, register

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::forms::render_form;
use super::layout::centered_rect;
use super::theme::Palette;
use dasper::model::{AuthScreen, Model};

pub fn render_auth_stack(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    match model.navigation.auth_screen {
        AuthScreen::Welcome => render_welcome(f, area, palette),
        AuthScreen::SignIn => {
            render_form(f, area, "Sign In", &model.ui.sign_in_form, palette, "sign in")
        }
        AuthScreen::Register => render_form(
            f,
            area,
            "Create Account",
            &model.ui.register_form,
            palette,
            "create account",
        ),
    }
}

fn render_welcome(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("Welcome to DASPER", palette.title())),
        Line::from(""),
        Line::from(Span::styled(
            "Assess building damage after a disaster,",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            "estimate repair costs and share reports with responders.",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", palette.hotkey()),
            Span::raw("  Sign in      "),
            Span::styled("r", palette.hotkey()),
            Span::raw("  Create an account"),
        ]),
    ];

    let welcome_area = centered_rect(area, 64, lines.len() as u16);
    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.base());
    f.render_widget(welcome, welcome_area);
}
