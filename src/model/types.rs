//! Shared types for the Model
//!
//! Screen identifiers, menu actions and form state used across sub-models.

use crate::api::UserProfile;

/// Root of a mounted screen stack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackId {
    AuthStack,
    MainStack,
}

impl StackId {
    pub fn as_str(&self) -> &str {
        match self {
            StackId::AuthStack => "Auth",
            StackId::MainStack => "Main",
        }
    }
}

/// What the frame shows: the splash, or one of the two stacks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootView {
    Splash,
    Stack(StackId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Welcome,
    SignIn,
    Register,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MainScreen {
    #[default]
    Home,
    Profile,
    EditProfile,
}

impl MainScreen {
    pub fn title(&self) -> &str {
        match self {
            MainScreen::Home => "Home",
            MainScreen::Profile => "Profile",
            MainScreen::EditProfile => "Edit Profile",
        }
    }
}

/// Settings a menu entry can flip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setting {
    DarkMode,
    Notifications,
    PublicReports,
}

/// Actions that need a y/n confirmation first
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    SignOut,
}

impl ConfirmAction {
    pub fn title(&self) -> &str {
        match self {
            ConfirmAction::SignOut => "Sign Out",
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            ConfirmAction::SignOut => "Are you sure you want to sign out?",
        }
    }
}

/// What activating a menu entry does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(MainScreen),
    Toggle(Setting),
    Confirm(ConfirmAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Email,
    Password,
    ConfirmPassword,
    FullName,
    Organization,
    Phone,
}

impl FieldKey {
    pub fn label(&self) -> &str {
        match self {
            FieldKey::Email => "Email",
            FieldKey::Password => "Password",
            FieldKey::ConfirmPassword => "Confirm Password",
            FieldKey::FullName => "Full Name",
            FieldKey::Organization => "Organization",
            FieldKey::Phone => "Phone",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, FieldKey::Password | FieldKey::ConfirmPassword)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub value: String,
}

/// Text form with a focused field and an optional error line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
}

impl FormState {
    fn with_fields(keys: &[FieldKey]) -> Self {
        Self {
            fields: keys
                .iter()
                .map(|key| FormField {
                    key: *key,
                    value: String::new(),
                })
                .collect(),
            focused: 0,
            error: None,
        }
    }

    pub fn sign_in() -> Self {
        Self::with_fields(&[FieldKey::Email, FieldKey::Password])
    }

    pub fn register() -> Self {
        Self::with_fields(&[
            FieldKey::FullName,
            FieldKey::Email,
            FieldKey::Password,
            FieldKey::ConfirmPassword,
            FieldKey::Organization,
            FieldKey::Phone,
        ])
    }

    /// Edit form prefilled from the signed-in user
    pub fn edit_profile(user: &UserProfile) -> Self {
        let mut form =
            Self::with_fields(&[FieldKey::FullName, FieldKey::Organization, FieldKey::Phone]);
        form.set_value(FieldKey::FullName, &user.full_name);
        form.set_value(FieldKey::Organization, &user.organization);
        form.set_value(FieldKey::Phone, &user.phone);
        form
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: FieldKey, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.to_string();
        }
    }

    pub fn focused_key(&self) -> Option<FieldKey> {
        self.fields.get(self.focused).map(|f| f.key)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn is_last_field(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Wipe password fields (after submit or when leaving the screen)
    pub fn clear_secrets(&mut self) {
        for field in self.fields.iter_mut().filter(|f| f.key.is_secret()) {
            field.value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_form_fields() {
        let form = FormState::sign_in();
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.focused_key(), Some(FieldKey::Email));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FormState::sign_in();
        form.focus_prev();
        assert_eq!(form.focused_key(), Some(FieldKey::Password));
        assert!(form.is_last_field());
        form.focus_next();
        assert_eq!(form.focused_key(), Some(FieldKey::Email));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = FormState::sign_in();
        form.error = Some("Email is required".to_string());
        form.insert_char('a');
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.value(FieldKey::Email), "a");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_clear_secrets_keeps_email() {
        let mut form = FormState::register();
        form.set_value(FieldKey::Email, "a@b.co");
        form.set_value(FieldKey::Password, "hunter22");
        form.set_value(FieldKey::ConfirmPassword, "hunter22");
        form.clear_secrets();
        assert_eq!(form.value(FieldKey::Email), "a@b.co");
        assert_eq!(form.value(FieldKey::Password), "");
        assert_eq!(form.value(FieldKey::ConfirmPassword), "");
    }

    #[test]
    fn test_edit_profile_prefill() {
        let user: UserProfile = serde_json::from_str(
            r#"{"email": "a@b.co", "full_name": "Ana", "organization": "OCD", "phone": "0917"}"#,
        )
        .unwrap();
        let form = FormState::edit_profile(&user);
        assert_eq!(form.value(FieldKey::FullName), "Ana");
        assert_eq!(form.value(FieldKey::Organization), "OCD");
        assert_eq!(form.value(FieldKey::Phone), "0917");
        assert_eq!(form.value(FieldKey::Email), "");
    }
}
