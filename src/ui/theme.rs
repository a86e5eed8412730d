use ratatui::style::{Color, Modifier, Style};

use dasper::ColorScheme;

/// Colors for one scheme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub error: Color,
    pub success: Color,
}

pub fn palette(scheme: ColorScheme) -> Palette {
    match scheme {
        ColorScheme::Dark => Palette {
            bg: Color::Black,
            fg: Color::White,
            muted: Color::Gray,
            accent: Color::LightRed,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        },
        ColorScheme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Red,
            border: Color::Gray,
            highlight_bg: Color::Gray,
            error: Color::Red,
            success: Color::Green,
        },
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn hotkey(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}
