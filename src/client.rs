// src/client.rs

//! HTTP client factory for the air data API proxy.
//!
//! [`create_client`] hands out an [`ApiClient`]: a `reqwest::Client` paired
//! with a base URL that every relative request path is resolved against.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};

use crate::settings::ClientSettings;

/// Base URL used when the caller does not supply one.
pub const DEFAULT_BASE_URL: &str = "https://umweltbundesamt.api.proxy.bund.dev/api/air_data/v2";

/// A `reqwest::Client` bound to a base URL.
///
/// The base URL is fixed for the lifetime of the handle. Default headers are
/// owned per handle and attached to every request built through it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

/// Build a client bound to `url`, or to [`DEFAULT_BASE_URL`] when `url` is `None`.
///
/// The URL is taken verbatim. An explicit empty string stays empty; only a
/// missing argument falls back to the default. Nothing is validated here, a
/// malformed URL shows up once a request is built or sent.
pub fn create_client(url: Option<&str>) -> ApiClient {
    ApiClient {
        inner: reqwest::Client::new(),
        base_url: url.unwrap_or(DEFAULT_BASE_URL).to_owned(),
        default_headers: HeaderMap::new(),
    }
}

/// Build a client with transport options taken from `settings`.
///
/// The base URL comes from `url`, then `settings.base_url`, then
/// [`DEFAULT_BASE_URL`].
pub fn create_client_with(url: Option<&str>, settings: &ClientSettings) -> Result<ApiClient> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(agent) = &settings.user_agent {
        builder = builder.user_agent(agent.as_str());
    }
    let inner = builder.build().context("Failed to build HTTP client")?;

    let mut default_headers = HeaderMap::new();
    for (name, value) in &settings.headers {
        let (name, value) = parse_header(name, value)?;
        default_headers.insert(name, value);
    }

    let base_url = url
        .or(settings.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_owned();

    Ok(ApiClient {
        inner,
        base_url,
        default_headers,
    })
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .with_context(|| format!("Invalid header name: {:?}", name))?;
    let header_value = HeaderValue::from_str(value)
        .with_context(|| format!("Invalid value for header {}: {:?}", name, value))?;
    Ok((header_name, header_value))
}

impl ApiClient {
    /// The base URL this client was created with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying `reqwest::Client`.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Headers attached to every request built through this handle.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Add a header sent with every request from this handle.
    ///
    /// Returns an error if `name` or `value` is not a valid HTTP header.
    pub fn insert_default_header(&mut self, name: &str, value: &str) -> Result<()> {
        let (name, value) = parse_header(name, value)?;
        self.default_headers.insert(name, value);
        Ok(())
    }

    /// Resolve `path` against the base URL.
    ///
    /// Absolute URLs (`scheme://` or `//`) pass through untouched, as does any
    /// path when the base URL is empty. Otherwise one trailing slash is taken
    /// off the base, all leading slashes off the path, and the two are joined
    /// with a single `/`.
    pub fn resolve(&self, path: &str) -> String {
        if self.base_url.is_empty() || is_absolute_url(path) {
            return path.to_owned();
        }
        if path.is_empty() {
            return self.base_url.clone();
        }
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let base = base.strip_suffix('/').unwrap_or(base);
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Start a request with an arbitrary method.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner
            .request(method, self.resolve(path))
            .headers(self.default_headers.clone())
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}

// `//host` or `scheme://host`, where a scheme is a letter followed by
// letters, digits, `+`, `-` or `.`.
fn is_absolute_url(path: &str) -> bool {
    let Some(idx) = path.find("//") else {
        return false;
    };
    let prefix = &path[..idx];
    if prefix.is_empty() {
        return true;
    }
    let Some(scheme) = prefix.strip_suffix(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}
