use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401, or 422 for a malformed or forged token
    NotFound,     // HTTP 404
    BadRequest,   // HTTP 400 (validation, duplicate user)
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

fn classify_status(status: u16) -> ErrorType {
    match status {
        400 => ErrorType::BadRequest,
        401 | 422 => ErrorType::Unauthorized,
        404 => ErrorType::NotFound,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Backend-reported statuses first: their message text is free-form
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return classify_status(api_err.status());
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if let Some(status) = reqwest_err.status() {
            return classify_status(status.as_u16());
        }
        if reqwest_err.is_connect() {
            return ErrorType::NetworkError;
        }
    }

    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the log - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Short text for a form error line or toast
///
/// Messages the backend wrote for the user ("Invalid credentials", "User
/// already exists") are shown as they are.
pub fn user_message(error: &Error) -> String {
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return api_err.to_string();
    }

    match classify_error(error) {
        ErrorType::ConnectionRefused | ErrorType::NetworkError => {
            "Cannot reach the DASPER server".to_string()
        }
        ErrorType::Timeout => "The server took too long to respond".to_string(),
        ErrorType::Unauthorized => "Your session has expired, please sign in again".to_string(),
        ErrorType::NotFound => "Not found".to_string(),
        ErrorType::ServerError => "The server had a problem, try again later".to_string(),
        ErrorType::BadRequest | ErrorType::Other => format_error_message(error),
    }
}
