use crate::core::classifier::classify_transport_error;
use crate::core::client::APP_USER_AGENT;
use crate::domain::model::{Certificate, SubmissionResult};
use crate::domain::ports::{ClientConfig, TokenStore};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_url;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

pub const CERTIFICATES_ENDPOINT: &str = "candidate/certificates";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Certificate uploaded successfully";
pub const DELETE_SUCCESS_MESSAGE: &str = "Certificate deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete certificate";

/// Candidate-profile API wrapper. Every call authenticates with the stored
/// session token; a missing token is a local error and never reaches the
/// network.
pub struct CandidateClient<S: TokenStore> {
    http: Client,
    base_url: String,
    token_store: S,
}

impl<S: TokenStore> CandidateClient<S> {
    pub fn new(config: &impl ClientConfig, token_store: S) -> Result<Self> {
        validate_url("api_base_url", config.api_base_url())?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            token_store,
        })
    }

    /// Uploads one PDF as a two-part form: `certificateName` (text) and
    /// `certificateData` (the file, original name preserved).
    pub async fn upload_certificate(
        &self,
        certificate_name: &str,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<SubmissionResult> {
        let token = self.require_token().await?;
        let url = format!("{}/{}", self.base_url, CERTIFICATES_ENDPOINT);

        let file_part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new()
            .text("certificateName", certificate_name.to_string())
            .part("certificateData", file_part);

        tracing::debug!("Uploading certificate to: {}", url);
        let response = match self
            .http
            .post(&url)
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return Ok(classify_transport_error(&err)),
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            Ok(SubmissionResult::Success {
                message: UPLOAD_SUCCESS_MESSAGE.to_string(),
                token: None,
            })
        } else {
            Ok(SubmissionResult::ApiError {
                message: format!("Upload failed: {}", status),
            })
        }
    }

    pub async fn list_certificates(&self) -> Result<Vec<Certificate>> {
        let token = self.require_token().await?;
        let url = format!("{}/{}", self.base_url, CERTIFICATES_ENDPOINT);

        tracing::debug!("Fetching certificates from: {}", url);
        let certificates = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Certificate>>()
            .await?;

        tracing::debug!("Fetched {} certificates", certificates.len());
        Ok(certificates)
    }

    pub async fn delete_certificate(&self, id: &str) -> Result<SubmissionResult> {
        let token = self.require_token().await?;
        let url = format!("{}/{}/{}", self.base_url, CERTIFICATES_ENDPOINT, id);

        tracing::debug!("Deleting certificate: {}", url);
        let response = match self.http.delete(&url).bearer_auth(&token).send().await {
            Ok(response) => response,
            Err(err) => return Ok(classify_transport_error(&err)),
        };

        if response.status().is_success() {
            Ok(SubmissionResult::Success {
                message: DELETE_SUCCESS_MESSAGE.to_string(),
                token: None,
            })
        } else {
            Ok(SubmissionResult::ApiError {
                message: DELETE_FAILED_MESSAGE.to_string(),
            })
        }
    }

    async fn require_token(&self) -> Result<String> {
        self.token_store
            .load_token()
            .await?
            .ok_or(ClientError::MissingTokenError)
    }
}
