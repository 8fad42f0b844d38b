// crates/api/src/http.rs
//! reqwest-backed implementation of the planner API contract.

use std::time::Duration;

use async_trait::async_trait;
use migration_view_types::{Assessment, Job, Source};
use reqwest::multipart;
use reqwest::{Response, StatusCode};
use uuid::Uuid;

use crate::contract::{AssessmentApi, JobApi, SourceApi};
use crate::error::ApiError;
use crate::info::ServiceInfo;

/// Default planner API root when `MIGRATION_VIEW_API` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3443/api/v1";

/// Configuration for the HTTP client.
pub struct PlannerClientConfig {
    /// API root, e.g. `https://planner.example.com/api/v1`.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for PlannerClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MIGRATION_VIEW_API")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Production client for the planner REST API.
pub struct HttpPlannerClient {
    base: String,
    http: reqwest::Client,
}

impl HttpPlannerClient {
    pub fn new(config: &PlannerClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::from_reqwest(&config.base_url, e))?;
        Ok(Self {
            base: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Client rooted at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&PlannerClientConfig {
            base_url: base_url.into(),
            ..PlannerClientConfig::default()
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// One-shot fetch of the service info resource. Callers wanting the
    /// cached process-wide value go through [`crate::info::init_service_info`].
    pub async fn fetch_service_info(&self) -> Result<ServiceInfo, ApiError> {
        self.get_json("info").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;
        let resp = check_status("GET", &url, resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode {
            url,
            source: e,
        })
    }
}

/// Turn a non-2xx response into a typed error, extracting the server's
/// `message` field when the body carries one.
async fn check_status(
    method: &'static str,
    url: &str,
    resp: Response,
) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });
    Err(ApiError::Status {
        method,
        url: url.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl JobApi for HttpPlannerClient {
    async fn create_job(&self, name: &str, file: Vec<u8>) -> Result<Job, ApiError> {
        let url = self.url("jobs");
        tracing::debug!(%url, name, bytes = file.len(), "POST (multipart)");
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .part("file", multipart::Part::bytes(file).file_name(name.to_string()));
        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;
        let resp = check_status("POST", &url, resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode {
            url,
            source: e,
        })
    }

    async fn get_job(&self, id: &str) -> Result<Job, ApiError> {
        self.get_json(&format!("jobs/{id}")).await
    }

    async fn cancel_job(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("jobs/{id}"));
        tracing::debug!(%url, "DELETE");
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;
        check_status("DELETE", &url, resp).await?;
        Ok(())
    }
}

#[async_trait]
impl AssessmentApi for HttpPlannerClient {
    async fn list_assessments(&self) -> Result<Vec<Assessment>, ApiError> {
        self.get_json("assessments").await
    }

    async fn delete_assessment(&self, id: Uuid) -> Result<(), ApiError> {
        let url = self.url(&format!("assessments/{id}"));
        tracing::debug!(%url, "DELETE");
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;
        let resp_status = resp.status();
        // Deleting an already-deleted assessment is not an error worth
        // surfacing; the list refresh will reconcile.
        if resp_status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "assessment already gone");
            return Ok(());
        }
        check_status("DELETE", &url, resp).await?;
        Ok(())
    }
}

#[async_trait]
impl SourceApi for HttpPlannerClient {
    async fn list_sources(&self) -> Result<Vec<Source>, ApiError> {
        self.get_json("sources").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpPlannerClient::with_base_url("http://localhost:3443/api/v1/").unwrap();
        assert_eq!(client.url("jobs"), "http://localhost:3443/api/v1/jobs");
        assert_eq!(client.url("/jobs/42"), "http://localhost:3443/api/v1/jobs/42");
    }

    #[test]
    fn test_config_defaults() {
        // Avoid mutating process env in tests; just check the fallback const.
        let config = PlannerClientConfig {
            base_url: DEFAULT_API_URL.to_string(),
            ..PlannerClientConfig::default()
        };
        assert!(config.base_url.starts_with("http://"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
