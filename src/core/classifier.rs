use crate::domain::model::{
    ErrorBody, LoginResponse, NetworkErrorKind, RegisterResponse, SubmissionResult,
};
use reqwest::StatusCode;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";
pub const UNEXPECTED_STRUCTURE_MESSAGE: &str = "Unexpected response structure";
pub const GENERIC_API_ERROR_MESSAGE: &str = "An error occurred";

/// Login responses must carry a token. A success status without one is a
/// contract violation, reported as an `ApiError`, never as `Success`.
pub fn classify_login_response(status: StatusCode, body: &str) -> SubmissionResult {
    if status.is_success() {
        match serde_json::from_str::<LoginResponse>(body) {
            Ok(LoginResponse { token: Some(token) }) => SubmissionResult::Success {
                message: LOGIN_SUCCESS_MESSAGE.to_string(),
                token: Some(token),
            },
            _ => SubmissionResult::ApiError {
                message: UNEXPECTED_STRUCTURE_MESSAGE.to_string(),
            },
        }
    } else {
        SubmissionResult::ApiError {
            message: parse_error_message(body),
        }
    }
}

/// Any success status counts as a completed registration; the server message
/// is optional and falls back to a fixed one.
pub fn classify_register_response(status: StatusCode, body: &str) -> SubmissionResult {
    if status.is_success() {
        match serde_json::from_str::<RegisterResponse>(body) {
            Ok(parsed) => SubmissionResult::Success {
                message: parsed
                    .message
                    .unwrap_or_else(|| REGISTRATION_SUCCESS_MESSAGE.to_string()),
                token: None,
            },
            Err(_) => SubmissionResult::ApiError {
                message: GENERIC_API_ERROR_MESSAGE.to_string(),
            },
        }
    } else {
        SubmissionResult::ApiError {
            message: parse_error_message(body),
        }
    }
}

/// Timeouts are distinguished from every other transport failure; the raw
/// error text survives in `detail` for logs.
pub fn classify_transport_error(err: &reqwest::Error) -> SubmissionResult {
    let kind = if err.is_timeout() {
        NetworkErrorKind::Timeout
    } else {
        NetworkErrorKind::Other
    };
    SubmissionResult::NetworkError {
        kind,
        detail: err.to_string(),
    }
}

fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| GENERIC_API_ERROR_MESSAGE.to_string())
}
