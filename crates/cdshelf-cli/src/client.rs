//! HTTP client for the record surface.

use anyhow::{bail, Context};
use reqwest::StatusCode;

use cdshelf_core::{Cd, CdDraft};

/// Thin wrapper over `reqwest::Client` for the three record calls.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /api/cds
    pub async fn list(&self) -> anyhow::Result<Vec<Cd>> {
        let response = self
            .http
            .get(self.url("/api/cds"))
            .send()
            .await
            .context("request failed")?;
        let response = check(response).await?;
        response.json().await.context("malformed record list")
    }

    /// POST /api/cds
    pub async fn add(&self, draft: &CdDraft) -> anyhow::Result<Cd> {
        let response = self
            .http
            .post(self.url("/api/cds"))
            .json(draft)
            .send()
            .await
            .context("request failed")?;
        let response = check(response).await?;
        response.json().await.context("malformed record")
    }

    /// DELETE /api/cds/:id
    pub async fn remove(&self, id: &str) -> anyhow::Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/cds/{id}")))
            .send()
            .await
            .context("request failed")?;
        check(response).await?;
        Ok(())
    }
}

/// Surface API failures with the server's `{error}` text when present.
async fn check(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body["error"].as_str().map(String::from))
        .unwrap_or_else(|| status_label(status));
    bail!("server returned {status}: {message}");
}

fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
