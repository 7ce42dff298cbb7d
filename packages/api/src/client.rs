//! # Shared HTTP client
//!
//! One `reqwest` client serves the whole application, lazily initialised the
//! first time an endpoint function runs (the entrypoint may call [`configure`]
//! earlier to change the base URL). Every request attaches the stored session
//! token as a bearer header; the backend additionally keeps a cookie, so
//! same-origin deployments work even before a token is persisted.
//!
//! ## Error handling
//!
//! [`ApiError`] is the single error type the rest of the workspace sees:
//!
//! - [`ApiError::Backend`] — the backend rejected the request. The body is
//!   decoded from either of the two shapes the backend produces (a bare JSON
//!   array of message strings, or `{ "message": "..." }`).
//! - [`ApiError::Transport`] — the request never produced a response.
//! - [`ApiError::Decode`] — a success response did not match the expected
//!   shape.
//!
//! No call is retried here; callers surface the messages and keep their
//! cached state.

use std::sync::OnceLock;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Install the configuration the shared client is built from.
///
/// Must run before the first request; later calls are ignored.
pub fn configure(config: ClientConfig) {
    if CONFIG.set(config).is_err() {
        tracing::debug!("api client already configured, ignoring");
    }
}

pub(crate) fn current_config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}

/// Get or initialize the shared client.
pub(crate) fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(current_config()))
}

/// Error produced by any backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{}", messages.join("; "))]
    Backend { status: u16, messages: Vec<String> },
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Messages suitable for a form error banner, most specific first.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Backend { messages, .. } if !messages.is_empty() => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// HTTP status of a backend rejection, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The two error-body shapes the backend produces.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Messages(Vec<String>),
    Message { message: String },
}

fn error_messages(status: StatusCode, body: &str) -> Vec<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Messages(messages)) => messages,
        Ok(ErrorBody::Message { message }) => vec![message],
        Err(_) if !body.trim().is_empty() => vec![body.trim().to_string()],
        Err(_) => vec![format!("request failed with status {status}")],
    }
}

/// HTTP client bound to a backend base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match store::load_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Backend {
            status: status.as_u16(),
            messages: error_messages(status, &body),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    /// GET that tolerates an empty body (the backend answers `/verify` with
    /// nothing when the session is anonymous).
    pub(crate) async fn get_json_opt<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(body)?))
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST without a request body, ignoring whatever the backend answers.
    pub(crate) async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, path)).await?;
        Ok(())
    }

    /// POST without a request body, decoding the response.
    pub(crate) async fn post_empty_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::POST, path)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(response.json().await?)
    }

    /// PUT whose response body the caller does not need.
    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(())
    }

    /// DELETE; returns the response status so callers can check for 204.
    pub(crate) async fn delete(&self, path: &str) -> Result<StatusCode, ApiError> {
        let response = self.send(self.request(Method::DELETE, path)).await?;
        Ok(response.status())
    }

    /// DELETE carrying a JSON body (account deletion sends the password).
    pub(crate) async fn delete_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path).json(body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_array() {
        let messages = error_messages(
            StatusCode::BAD_REQUEST,
            r#"["Email is required","Password is required"]"#,
        );
        assert_eq!(messages, vec!["Email is required", "Password is required"]);
    }

    #[test]
    fn test_error_body_message_object() {
        let messages =
            error_messages(StatusCode::UNAUTHORIZED, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(messages, vec!["Invalid credentials"]);
    }

    #[test]
    fn test_error_body_plain_text() {
        let messages = error_messages(StatusCode::INTERNAL_SERVER_ERROR, "something broke");
        assert_eq!(messages, vec!["something broke"]);
    }

    #[test]
    fn test_error_body_empty_falls_back_to_status() {
        let messages = error_messages(StatusCode::NOT_FOUND, "");
        assert_eq!(messages, vec!["request failed with status 404 Not Found"]);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ClientConfig::default().with_base_url("http://api.test/"));
        assert_eq!(client.base_url, "http://api.test");
    }
}
