use crate::core::classifier::{
    classify_login_response, classify_register_response, classify_transport_error,
};
use crate::domain::model::{
    LoginRequest, RegisterEmailRequest, RegisterPhoneRequest, SubmissionResult,
};
use crate::domain::ports::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const LOGIN_ENDPOINT: &str = "login";
pub const REGISTER_EMAIL_ENDPOINT: &str = "register";
pub const REGISTER_PHONE_ENDPOINT: &str = "register/phone";

/// One POST per invocation, no retries. Transport and HTTP failures come back
/// classified inside `SubmissionResult`; construction is the only fallible
/// step.
pub struct SubmissionClient {
    http: Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(config: &impl ClientConfig) -> Result<Self> {
        validate_url("api_base_url", config.api_base_url())?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    pub async fn login(&self, payload: &LoginRequest) -> SubmissionResult {
        match self.post_json(LOGIN_ENDPOINT, payload).await {
            Ok((status, body)) => classify_login_response(status, &body),
            Err(err) => classify_transport_error(&err),
        }
    }

    pub async fn register_email(&self, payload: &RegisterEmailRequest) -> SubmissionResult {
        match self.post_json(REGISTER_EMAIL_ENDPOINT, payload).await {
            Ok((status, body)) => classify_register_response(status, &body),
            Err(err) => classify_transport_error(&err),
        }
    }

    pub async fn register_phone(&self, payload: &RegisterPhoneRequest) -> SubmissionResult {
        match self.post_json(REGISTER_PHONE_ENDPOINT, payload).await {
            Ok((status, body)) => classify_register_response(status, &body),
            Err(err) => classify_transport_error(&err),
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> std::result::Result<(StatusCode, String), reqwest::Error> {
        let url = format!("{}/{}", self.base_url, endpoint);

        tracing::debug!("Making API request to: {}", url);
        let response = self.http.post(&url).json(payload).send().await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Request to {} failed: {}", endpoint, err);
                return Err(err);
            }
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        Ok((status, body))
    }
}
