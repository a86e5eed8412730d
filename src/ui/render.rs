use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    auth::render_auth_stack, dialogs, layout, legend, main_stack::render_main_stack,
    splash::render_splash, status_bar, theme, toast,
};
use dasper::logic::navigation::root_view;
use dasper::model::{AuthScreen, Model, RootView, StackId};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model, splash_visible: bool) {
    let size = f.area();
    let palette = theme::palette(model.ui.color_scheme);

    f.render_widget(Block::default().style(palette.base()), size);

    let stack = match root_view(splash_visible, &model.session) {
        RootView::Splash => {
            render_splash(
                f,
                size,
                &palette,
                model.ui.spinner_tick,
                &model.backend.connection_state,
            );
            return;
        }
        RootView::Stack(stack) => stack,
    };

    let layout_info = layout::calculate_layout(size);

    render_header(f, layout_info.header_area, model, stack, &palette);

    match stack {
        StackId::AuthStack => render_auth_stack(f, layout_info.content_area, model, &palette),
        StackId::MainStack => render_main_stack(f, layout_info.content_area, model, &palette),
    }

    let keys = legend::hotkeys(
        stack,
        model.navigation.auth_screen,
        model.navigation.main_screen,
    );
    legend::render_legend(f, layout_info.legend_area, &keys, &palette);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &model.backend.connection_state,
        &model.session,
        &palette,
    );

    if let Some(action) = &model.ui.confirm_action {
        dialogs::render_confirmation(f, action, &palette);
    }

    if let Some(label) = &model.ui.busy {
        dialogs::render_busy(f, label, model.ui.spinner_tick, &palette);
    }

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message, &palette);
    }
}

fn render_header(f: &mut Frame, area: Rect, model: &Model, stack: StackId, palette: &theme::Palette) {
    let screen = match stack {
        StackId::AuthStack => match model.navigation.auth_screen {
            AuthScreen::Welcome => "Welcome",
            AuthScreen::SignIn => "Sign In",
            AuthScreen::Register => "Register",
        },
        StackId::MainStack => model.navigation.main_screen.title(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("DASPER", palette.title()),
        Span::styled(format!("  {}", screen), Style::default().fg(palette.fg)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    )
    .style(palette.base());

    f.render_widget(header, area);
}
