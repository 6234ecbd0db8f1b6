use crate::errors::AppError;
use axum::body::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tracing::info;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug)]
pub struct UpstreamFile {
    pub content_type: HeaderValue,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }

    pub async fn fetch_json(&self, url: &str, payload: &Value) -> Result<Value, AppError> {
        let response = self.post(url, payload).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn fetch_file(&self, url: &str, payload: &Value) -> Result<UpstreamFile, AppError> {
        let response = self.post(url, payload).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));
        let body = response.bytes().await?;
        Ok(UpstreamFile { content_type, body })
    }

    async fn post(&self, url: &str, payload: &Value) -> Result<reqwest::Response, AppError> {
        let response = self.http.post(url).json(payload).send().await?;
        let status = response.status();
        info!(url, status = status.as_u16(), "webhook responded");
        if !status.is_success() {
            return Err(AppError::upstream_status(status));
        }
        Ok(response)
    }
}
