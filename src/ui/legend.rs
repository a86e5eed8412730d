use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use dasper::model::{AuthScreen, MainScreen, StackId};

/// Hotkeys that apply to the screen currently on top of a stack
pub fn hotkeys(stack: StackId, auth: AuthScreen, main: MainScreen) -> Vec<(&'static str, &'static str)> {
    match stack {
        StackId::AuthStack => match auth {
            AuthScreen::Welcome => vec![("Enter", "Sign in"), ("r", "Register"), ("q", "Quit")],
            AuthScreen::SignIn | AuthScreen::Register => vec![
                ("Tab/↑↓", "Field"),
                ("Enter", "Next/Submit"),
                ("Esc", "Back"),
                ("^C", "Quit"),
            ],
        },
        StackId::MainStack => match main {
            MainScreen::Home => vec![("p", "Profile"), ("r", "Refresh"), ("q", "Quit")],
            MainScreen::Profile => vec![
                ("↑/↓", "Nav"),
                ("Enter", "Select"),
                ("Esc", "Back"),
                ("q", "Quit"),
            ],
            MainScreen::EditProfile => vec![
                ("Tab/↑↓", "Field"),
                ("Enter", "Next/Save"),
                ("Esc", "Cancel"),
                ("^C", "Quit"),
            ],
        },
    }
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(keys: &[(&'static str, &'static str)], palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(*key, palette.hotkey()));
        spans.push(Span::raw(format!(":{}  ", label)));
    }
    spans
}

pub fn render_legend(f: &mut Frame, area: Rect, keys: &[(&'static str, &'static str)], palette: &Palette) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(keys, palette))).style(palette.base());
    f.render_widget(legend, area);
}
