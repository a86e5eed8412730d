//! Profile orchestration methods
//!
//! Menu activation, preference toggles and the edit profile form.

use crate::App;
use dasper::logic::forms::profile_update_from_form;
use dasper::logic::menu::{preference_toggle_update, profile_menu};
use dasper::model::{FormState, MainScreen, MenuAction, Setting};
use dasper::services::ApiRequest;

impl App {
    /// Run the action of the selected profile menu entry
    pub(crate) fn activate_menu_entry(&mut self) {
        let menu = profile_menu();
        let Some(entry) = menu.get(self.model.navigation.menu_selection) else {
            return;
        };

        match &entry.action {
            MenuAction::Navigate(MainScreen::EditProfile) => self.open_edit_profile(),
            MenuAction::Navigate(screen) => self.model.navigation.main_screen = *screen,
            MenuAction::Toggle(setting) => self.toggle_setting(*setting),
            MenuAction::Confirm(action) => self.model.ui.confirm_action = Some(action.clone()),
        }
    }

    pub(crate) fn toggle_setting(&mut self, setting: Setting) {
        if setting == Setting::DarkMode {
            let scheme = self.model.ui.color_scheme.toggled();
            self.model.ui.color_scheme = scheme;

            let saved = match self.store.lock() {
                Ok(store) => store.set_dark_mode(scheme.is_dark()),
                Err(_) => Err(anyhow::anyhow!("session store lock poisoned")),
            };
            if let Err(e) = saved {
                tracing::warn!(error = %e, "Failed to persist dark mode preference");
            }
            return;
        }

        let Some(user) = self.model.current_user() else {
            return;
        };
        if let Some(update) = preference_toggle_update(setting, user) {
            self.model.ui.set_busy("Saving preference");
            self.send_request(ApiRequest::UpdateProfile(update));
        }
    }

    pub(crate) fn open_edit_profile(&mut self) {
        let Some(user) = self.model.current_user() else {
            return;
        };
        self.model.ui.profile_form = Some(FormState::edit_profile(user));
        self.model.navigation.main_screen = MainScreen::EditProfile;
    }

    pub(crate) fn close_edit_profile(&mut self) {
        self.model.ui.profile_form = None;
        self.model.navigation.main_screen = MainScreen::Profile;
    }

    pub(crate) fn submit_profile_form(&mut self) {
        let (Some(form), Some(user)) = (self.model.ui.profile_form.as_ref(), self.model.current_user())
        else {
            return;
        };

        let update = match profile_update_from_form(form, user) {
            Ok(update) => update,
            Err(message) => {
                if let Some(form) = self.model.ui.profile_form.as_mut() {
                    form.error = Some(message);
                }
                return;
            }
        };

        if update.is_empty() {
            self.model.show_toast("No changes to save".to_string());
            self.close_edit_profile();
            return;
        }

        self.model.ui.set_busy("Saving profile");
        self.send_request(ApiRequest::UpdateProfile(update));
    }
}
