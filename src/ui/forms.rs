use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use super::theme::Palette;
use dasper::logic::formatting::{mask_secret, truncate_to_width};
use dasper::model::FormState;

const FORM_WIDTH: u16 = 56;

/// Build the lines of a form (extracted for testability)
pub fn build_form_lines(form: &FormState, palette: &Palette, submit_label: &str) -> Vec<Line<'static>> {
    let value_width = FORM_WIDTH as usize - 6;
    let mut lines = Vec::new();

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let label_style = if focused {
            palette.title()
        } else {
            Style::default().fg(palette.muted)
        };

        let shown = if field.key.is_secret() {
            mask_secret(&field.value)
        } else {
            field.value.clone()
        };
        let mut value = truncate_to_width(&shown, value_width);
        if focused {
            value.push('▏');
        }

        lines.push(Line::from(Span::styled(field.key.label().to_string(), label_style)));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                value,
                if focused {
                    Style::default().fg(palette.fg).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(palette.fg)
                },
            ),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(palette.error),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", palette.hotkey()),
        Span::raw(format!(" on the last field: {}", submit_label)),
    ]));

    lines
}

pub fn render_form(
    f: &mut Frame,
    area: Rect,
    title: &str,
    form: &FormState,
    palette: &Palette,
    submit_label: &str,
) {
    let lines = build_form_lines(form, palette, submit_label);
    let height = lines.len() as u16 + 2;
    let form_area = centered_rect(area, FORM_WIDTH, height);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(palette.border)),
        )
        .style(palette.base())
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, form_area);
}
