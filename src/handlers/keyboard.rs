//! Keyboard Input Handler
//!
//! Handles all keyboard input. Precedence: Ctrl+C, the confirmation dialog,
//! the busy overlay, then the screen on top of the mounted stack.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use dasper::logic::menu::profile_menu;
use dasper::logic::ui::{auth_back, main_back};
use dasper::model::{AuthScreen, ConfirmAction, FormState, MainScreen, StackId};
use dasper::services::ApiRequest;

/// What a key did to a form
#[derive(Debug, PartialEq, Eq)]
pub enum FormKeyOutcome {
    /// Field contents or focus changed (or nothing happened)
    Edited,
    /// Enter on the last field
    Submit,
    /// Esc
    Cancel,
}

/// Shared text-form editing (extracted for testability)
pub fn apply_form_key(form: &mut FormState, key: &KeyEvent) -> FormKeyOutcome {
    match key.code {
        KeyCode::Esc => return FormKeyOutcome::Cancel,
        KeyCode::Enter => {
            if form.is_last_field() {
                return FormKeyOutcome::Submit;
            }
            form.focus_next();
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
    FormKeyOutcome::Edited
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    // Splash swallows input until startup is ready
    if app.splash.is_visible() {
        if key.code == KeyCode::Char('q') {
            app.model.ui.should_quit = true;
        }
        return;
    }

    if app.model.has_modal() {
        handle_confirm_key(app, key);
        return;
    }

    // One request at a time from the keyboard
    if app.model.ui.busy.is_some() {
        return;
    }

    match app.model.stack() {
        StackId::AuthStack => handle_auth_key(app, key),
        StackId::MainStack => handle_main_key(app, key),
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    match app.model.navigation.auth_screen {
        AuthScreen::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                app.model.navigation.auth_screen = AuthScreen::SignIn;
            }
            KeyCode::Char('r') => app.model.navigation.auth_screen = AuthScreen::Register,
            KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
            _ => {}
        },
        AuthScreen::SignIn => match apply_form_key(&mut app.model.ui.sign_in_form, &key) {
            FormKeyOutcome::Submit => app.submit_sign_in(),
            FormKeyOutcome::Cancel => auth_go_back(app),
            FormKeyOutcome::Edited => {}
        },
        AuthScreen::Register => match apply_form_key(&mut app.model.ui.register_form, &key) {
            FormKeyOutcome::Submit => app.submit_register(),
            FormKeyOutcome::Cancel => auth_go_back(app),
            FormKeyOutcome::Edited => {}
        },
    }
}

fn auth_go_back(app: &mut App) {
    if let Some(previous) = auth_back(app.model.navigation.auth_screen) {
        app.model.navigation.auth_screen = previous;
        app.model.ui.reset_auth_forms();
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    match app.model.navigation.main_screen {
        MainScreen::Home => match key.code {
            KeyCode::Char('p') | KeyCode::Enter => {
                app.model.navigation.main_screen = MainScreen::Profile;
            }
            KeyCode::Char('r') => {
                app.send_request(ApiRequest::CheckHealth);
                app.last_health_check = std::time::Instant::now();
            }
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            _ => {}
        },
        MainScreen::Profile => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.model.navigation.select_prev_menu(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.model.navigation.select_next_menu(profile_menu().len());
            }
            KeyCode::Enter => app.activate_menu_entry(),
            KeyCode::Esc | KeyCode::Left => main_go_back(app),
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            _ => {}
        },
        MainScreen::EditProfile => {
            let Some(form) = app.model.ui.profile_form.as_mut() else {
                app.close_edit_profile();
                return;
            };
            match apply_form_key(form, &key) {
                FormKeyOutcome::Submit => app.submit_profile_form(),
                FormKeyOutcome::Cancel => app.close_edit_profile(),
                FormKeyOutcome::Edited => {}
            }
        }
    }
}

fn main_go_back(app: &mut App) {
    if let Some(previous) = main_back(app.model.navigation.main_screen) {
        app.model.navigation.main_screen = previous;
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    let Some(action) = app.model.ui.confirm_action.clone() else {
        return;
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.model.ui.close_all_modals();
            match action {
                ConfirmAction::SignOut => app.sign_out(),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.model.ui.close_all_modals();
        }
        // Ignore other keys while the prompt is showing
        _ => {}
    }
}
