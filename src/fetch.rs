// src/fetch.rs

//! Plain GET helper used by the command line.

use anyhow::{anyhow, Context, Result};

use crate::client::ApiClient;

/// Send a GET for `path` and return the body as text, uninterpreted.
///
/// A non-success status is an error naming the status and URL.
pub async fn fetch_text(client: &ApiClient, path: &str) -> Result<String> {
    let url = client.resolve(path);
    log::info!("GET {}", url);

    let request = client
        .get(path)
        .build()
        .with_context(|| format!("Invalid request URL: {}", url))?;
    let response = client
        .inner()
        .execute(request)
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("HTTP error: {} from {}", status, url));
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
