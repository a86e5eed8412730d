//! Form validation
//!
//! Pure checks run before a form is submitted, and the conversion of a
//! validated form into the request the backend expects.

use crate::api::{ProfileUpdate, RegisterRequest, UserProfile};
use crate::model::{FieldKey, FormState};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose email shape check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Backend stores emails lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validated sign-in credentials (email normalized)
pub fn validate_sign_in(form: &FormState) -> Result<(String, String), String> {
    let email = form.value(FieldKey::Email);
    let password = form.value(FieldKey::Password);

    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password required".to_string());
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_string());
    }

    Ok((normalize_email(email), password.to_string()))
}

pub fn validate_register(form: &FormState) -> Result<RegisterRequest, String> {
    let full_name = form.value(FieldKey::FullName).trim();
    let email = form.value(FieldKey::Email);
    let password = form.value(FieldKey::Password);
    let confirm = form.value(FieldKey::ConfirmPassword);

    for key in [FieldKey::FullName, FieldKey::Email, FieldKey::Password] {
        if form.value(key).trim().is_empty() {
            return Err(format!("{} is required", key.label()));
        }
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(RegisterRequest {
        email: normalize_email(email),
        password: password.to_string(),
        full_name: full_name.to_string(),
        phone: form.value(FieldKey::Phone).trim().to_string(),
        organization: form.value(FieldKey::Organization).trim().to_string(),
    })
}

/// Only the fields that differ from `user` end up in the update
pub fn profile_update_from_form(form: &FormState, user: &UserProfile) -> Result<ProfileUpdate, String> {
    let full_name = form.value(FieldKey::FullName).trim();
    if full_name.is_empty() {
        return Err("Full Name is required".to_string());
    }

    let changed = |value: &str, current: &str| {
        let value = value.trim();
        (value != current).then(|| value.to_string())
    };

    Ok(ProfileUpdate {
        full_name: changed(full_name, &user.full_name),
        organization: changed(form.value(FieldKey::Organization), &user.organization),
        phone: changed(form.value(FieldKey::Phone), &user.phone),
        ..Default::default()
    })
}
