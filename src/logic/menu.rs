//! Profile menu
//!
//! The menu is a fixed list of tagged entries. Each entry says what it does
//! through its `MenuAction`; nothing is inferred from which fields are set.

use crate::api::{Preferences, ProfileUpdate, UserProfile};
use crate::model::{ConfirmAction, MainScreen, MenuAction, MenuEntry, Setting};
use crate::ColorScheme;

pub fn profile_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            label: "Edit Profile",
            action: MenuAction::Navigate(MainScreen::EditProfile),
        },
        MenuEntry {
            label: "Dark Mode",
            action: MenuAction::Toggle(Setting::DarkMode),
        },
        MenuEntry {
            label: "Notifications",
            action: MenuAction::Toggle(Setting::Notifications),
        },
        MenuEntry {
            label: "Public Reports",
            action: MenuAction::Toggle(Setting::PublicReports),
        },
        MenuEntry {
            label: "Sign Out",
            action: MenuAction::Confirm(ConfirmAction::SignOut),
        },
    ]
}

/// Current on/off value of a toggle, for the checkbox next to the label
pub fn setting_value(setting: Setting, scheme: ColorScheme, user: Option<&UserProfile>) -> bool {
    match setting {
        Setting::DarkMode => scheme.is_dark(),
        Setting::Notifications => user.map(|u| u.preferences.notifications).unwrap_or(false),
        Setting::PublicReports => user.map(|u| u.preferences.public_reports).unwrap_or(false),
    }
}

/// Profile update that flips a backend-held preference
///
/// Returns `None` for settings that live only on this device.
pub fn preference_toggle_update(setting: Setting, user: &UserProfile) -> Option<ProfileUpdate> {
    let current = &user.preferences;
    let preferences = match setting {
        Setting::DarkMode => return None,
        Setting::Notifications => Preferences {
            notifications: !current.notifications,
            ..current.clone()
        },
        Setting::PublicReports => Preferences {
            public_reports: !current.public_reports,
            ..current.clone()
        },
    };

    Some(ProfileUpdate {
        preferences: Some(preferences),
        ..Default::default()
    })
}
