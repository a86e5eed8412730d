use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use super::theme::Palette;
use dasper::logic::ui::spinner_frame;
use dasper::model::ConfirmAction;

/// Render a y/n confirmation dialog
pub fn render_confirmation(f: &mut Frame, action: &ConfirmAction, palette: &Palette) {
    let prompt_text = format!("{}\n\nContinue? (y/n)", action.prompt());

    let prompt_area = centered_rect(f.area(), 50, 7);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", action.title()))
                .border_style(Style::default().fg(palette.error)),
        )
        .style(palette.base())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the activity overlay shown while a request is in flight
pub fn render_busy(f: &mut Frame, label: &str, spinner_tick: usize, palette: &Palette) {
    let width = (label.chars().count() as u16 + 8).max(24);
    let busy_area = centered_rect(f.area(), width, 3);

    let line = Line::from(vec![
        Span::styled(
            spinner_frame(spinner_tick),
            palette.hotkey().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(label.to_string()),
    ]);

    let busy = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(palette.base())
        .alignment(Alignment::Center);

    f.render_widget(Clear, busy_area);
    f.render_widget(busy, busy_area);
}
