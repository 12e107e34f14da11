//! HTTP implementation of [`Gateway`] using reqwest.

use async_trait::async_trait;
use reqwest::{header, redirect, Client, Response};

use super::Gateway;
use crate::auth::API_KEY_HEADER;
use crate::config::{GatewayConfig, WritePolicy};
use crate::errors::{SyncError, GENERIC_SERVER_MESSAGE};
use crate::models::{AspirationSubmission, ContentDocument, WriteAction, WriteOutcome};

/// Sent with every write so browsers and proxies treat it as a simple request.
pub const WRITE_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

const MAX_REDIRECTS: usize = 10;

pub struct HttpGateway {
    reader: Client,
    writer: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, SyncError> {
        let reader = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SyncError::Configuration(format!("HTTP client: {}", e)))?;

        let writer = match config.write_policy {
            WritePolicy::Strict => reader.clone(),
            WritePolicy::BestEffort => Client::builder()
                .timeout(config.timeout)
                .redirect(cross_origin_redirect_fails())
                .build()
                .map_err(|e| SyncError::Configuration(format!("HTTP client: {}", e)))?,
        };

        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn endpoint(&self) -> Result<&str, SyncError> {
        self.config.endpoint().map_err(SyncError::Configuration)
    }

    /// Send a student's aspiration to the form endpoint.
    pub async fn submit_aspiration(
        &self,
        submission: &AspirationSubmission,
    ) -> Result<(), SyncError> {
        let endpoint = self
            .config
            .aspiration_endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                SyncError::Configuration(
                    "Aspiration endpoint URL is not configured (BLM_ASPIRATION_URL)".to_string(),
                )
            })?;

        let response = self.reader.post(endpoint).json(submission).send().await?;
        read_outcome(response).await
    }

    async fn push_strict(&self, endpoint: &str, body: String) -> Result<(), SyncError> {
        let response = self.write_request(endpoint, body).send().await?;
        read_outcome(response).await
    }

    async fn push_best_effort(&self, endpoint: &str, body: String) -> Result<(), SyncError> {
        match self.write_request(endpoint, body).send().await {
            Ok(response) => {
                tracing::debug!("Best-effort write sent, status {}", response.status());
                Ok(())
            }
            Err(e) if e.is_redirect() => {
                tracing::warn!(
                    "Write redirected to another origin; assuming success without a readable response"
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_request(&self, endpoint: &str, body: String) -> reqwest::RequestBuilder {
        let mut request = self
            .writer
            .post(endpoint)
            .header(header::CONTENT_TYPE, WRITE_CONTENT_TYPE)
            .body(body);
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_document(&self) -> Result<ContentDocument, SyncError> {
        let endpoint = self.endpoint()?;
        let response = self.reader.get(endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Server {
                status: Some(status.as_u16()),
                message: format!(
                    "Failed to fetch content ({}); check the endpoint URL and that the backend is deployed",
                    status
                ),
            });
        }

        Ok(response.json::<ContentDocument>().await?)
    }

    async fn push(&self, action: WriteAction) -> Result<(), SyncError> {
        let endpoint = self.endpoint()?;
        let tag = action.tag();
        let body = serde_json::to_string(&action)
            .map_err(|e| SyncError::Decode(format!("could not encode {}: {}", tag, e)))?;

        tracing::debug!("Pushing {} ({} bytes)", tag, body.len());
        match self.config.write_policy {
            WritePolicy::Strict => self.push_strict(endpoint, body).await,
            WritePolicy::BestEffort => self.push_best_effort(endpoint, body).await,
        }
    }
}

/// Interpret a `{"success": ..., "error": ...}` response body.
async fn read_outcome(response: Response) -> Result<(), SyncError> {
    let status = response.status();
    let text = response.text().await?;

    match serde_json::from_str::<WriteOutcome>(&text) {
        Ok(outcome) if outcome.success && status.is_success() => Ok(()),
        Ok(outcome) => Err(SyncError::Server {
            status: Some(status.as_u16()),
            message: outcome
                .error
                .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string()),
        }),
        Err(_) if status.is_success() => Err(SyncError::Decode(
            "write response has no success flag".to_string(),
        )),
        Err(_) => Err(SyncError::Server {
            status: Some(status.as_u16()),
            message: GENERIC_SERVER_MESSAGE.to_string(),
        }),
    }
}

/// Redirects within one origin are followed; a hop to another origin fails
/// the request with a redirect error.
fn cross_origin_redirect_fails() -> redirect::Policy {
    redirect::Policy::custom(|attempt| {
        let crosses_origin = attempt
            .previous()
            .first()
            .is_some_and(|first| first.origin() != attempt.url().origin());

        if crosses_origin {
            attempt.error("redirected to another origin")
        } else if attempt.previous().len() > MAX_REDIRECTS {
            attempt.stop()
        } else {
            attempt.follow()
        }
    })
}
