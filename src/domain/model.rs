use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// 登入憑證：identifier 可為 email 或手機號碼
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Cross-screen registration state. Owned by the signup flow and cleared when
/// the flow exits, so nothing leaks into the next registration attempt.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub identifier: String,
    pub password: SecretString,
}

impl RegistrationDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.identifier.is_empty()
            && self.password.expose_secret().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    Timeout,
    Other,
}

impl NetworkErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "Request timed out. Please try again.",
            Self::Other => "Network error. Please check your connection.",
        }
    }
}

/// Terminal outcome of one submission attempt. Transport and HTTP failures are
/// values here, never `Err`: the caller always gets something it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success {
        message: String,
        token: Option<String>,
    },
    ApiError {
        message: String,
    },
    NetworkError {
        kind: NetworkErrorKind,
        detail: String,
    },
}

impl SubmissionResult {
    /// Message suitable for direct display. Network failures map to their
    /// fixed user-facing text; the underlying detail stays in `detail`.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Success { message, .. } => message,
            Self::ApiError { message } => message,
            Self::NetworkError { kind, .. } => kind.user_message(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub contact: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmailRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPhoneRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
}

/// Error payloads carry at most a `message` field.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    /// Labels are matched exactly; an unknown label keeps the user on the
    /// role-selection screen.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Candidate" => Some(Self::Candidate),
            "Recruiter" => Some(Self::Recruiter),
            _ => None,
        }
    }

    pub fn home(&self) -> Destination {
        match self {
            Self::Candidate => Destination::CandidateHome,
            Self::Recruiter => Destination::RecruiterHome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    RoleSelection,
    OtpVerification,
    CandidateHome,
    RecruiterHome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Option<String>,
    pub certificate_name: String,
    pub file_key: Option<String>,
}
