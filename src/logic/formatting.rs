//! Formatting and display logic
//!
//! Pure functions for formatting profile data for human-readable display.

use chrono::{DateTime, NaiveDateTime};
use unicode_width::UnicodeWidthChar;

use crate::api::UserProfile;

/// Up to two initials for the avatar placeholder
///
/// # Examples
/// ```
/// use dasper::logic::formatting::initials;
///
/// assert_eq!(initials("Ana Reyes"), "AR");
/// assert_eq!(initials("maria clara de la cruz"), "MC");
/// assert_eq!(initials(""), "?");
/// ```
pub fn initials(full_name: &str) -> String {
    let letters: String = full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Name to greet the user with, falling back to the email's local part
pub fn display_name(user: &UserProfile) -> String {
    let name = user.full_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    user.email
        .split('@')
        .next()
        .unwrap_or(&user.email)
        .to_string()
}

/// Backend timestamps are naive ISO-8601 (`2024-05-01T12:34:56.123456`) or RFC 3339
///
/// Returns the date as "May 1, 2024", or the raw text if it does not parse.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// "Member since" line for the profile header
pub fn member_since(user: &UserProfile) -> Option<String> {
    user.created_at
        .as_deref()
        .map(|raw| format!("Member since {}", format_date(raw)))
}

/// Show a secret as bullets of the same length
pub fn mask_secret(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Placeholder for empty optional profile fields
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

/// Truncate to a display width, ending with "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: &str, email: &str) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "email": email,
            "full_name": full_name,
            "created_at": "2024-05-01T12:34:56.123456"
        }))
        .unwrap()
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("ana"), "A");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(display_name(&user("", "responder@dasper.ph")), "responder");
        assert_eq!(display_name(&user(" Ana ", "a@b.co")), "Ana");
    }

    #[test]
    fn test_format_naive_iso_date() {
        assert_eq!(format_date("2024-05-01T12:34:56.123456"), "May 1, 2024");
        assert_eq!(format_date("2024-05-01T12:34:56"), "May 1, 2024");
    }

    #[test]
    fn test_format_rfc3339_date() {
        assert_eq!(format_date("2023-12-25T08:00:00+08:00"), "Dec 25, 2023");
    }

    #[test]
    fn test_format_unparseable_date_is_raw() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_member_since() {
        assert_eq!(
            member_since(&user("Ana", "a@b.co")).as_deref(),
            Some("Member since May 1, 2024")
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abc"), "•••");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "—");
        assert_eq!(or_dash("OCD"), "OCD");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("responder@dasper.ph", 10), "responder…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
