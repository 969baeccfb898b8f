use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::domain::session::Session;
use crate::errors::AppError;

use super::models::{ApiEnvelope, ErrorBody};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the storefront backend.
///
/// Cloning is cheap; an authorized copy carries the bearer token and adds it
/// to every request it builds.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn for_session(&self, session: Option<&Session>) -> Self {
        match session {
            Some(s) => self.authorized(s.jwt_token.clone()),
            None => Self {
                token: None,
                ..self.clone()
            },
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {} (token: {})", method, url, self.token.is_some());
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
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

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Sends a request whose response is wrapped in `{code, message, data}`
    /// and returns `data`.
    pub async fn send_envelope<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let envelope: ApiEnvelope<T> = self.send_json(builder).await?;
        envelope.into_data()
    }

    /// Like [`send_envelope`](Self::send_envelope) for calls whose `data` is
    /// irrelevant; returns the backend's message. An empty body counts as
    /// success.
    pub async fn send_ack(&self, builder: RequestBuilder) -> Result<String, AppError> {
        let bytes = self.send_bytes(builder).await?;
        if bytes.is_empty() {
            return Ok(String::new());
        }
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(&bytes)?;
        envelope.into_message()
    }

    /// Sends a request whose body is decoded as-is (no envelope).
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let bytes = self.send_bytes(builder).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>, AppError> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("Request failed without a response: {}", e);
            AppError::from(e)
        })?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    log::warn!("{} answered {}", response.url(), status);
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }
    if status == StatusCode::FORBIDDEN {
        return Err(AppError::Forbidden);
    }
    let body = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    Err(AppError::Rejected {
        code: i64::from(status.as_u16()),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8081/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081/api/v1");
    }

    #[test]
    fn bearer_header_is_added_only_when_authorized() {
        let client = ApiClient::new("http://localhost:8081/api/v1", Duration::from_secs(1)).unwrap();
        let anonymous = client.get("/item/item-list").build().unwrap();
        assert!(anonymous.headers().get("authorization").is_none());

        let authorized = client.authorized("abc.def").get("/order/1").build().unwrap();
        assert_eq!(authorized.headers()["authorization"], "Bearer abc.def");
        assert_eq!(authorized.url().as_str(), "http://localhost:8081/api/v1/order/1");
    }

    #[test]
    fn for_session_drops_token_when_signed_out() {
        let client = ApiClient::new("http://localhost:8081/api/v1", Duration::from_secs(1))
            .unwrap()
            .authorized("stale");
        assert!(!client.for_session(None).is_authorized());
    }
}
