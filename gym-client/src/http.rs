//! HTTP transport for the gym API
//!
//! Every exchange (send + body read) runs under the configured timeout and
//! every failure is normalized into a [`ClientError`].

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body returned by the API (`{"message": ...}` or `{"detail": ...}`)
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

impl ApiErrorBody {
    fn into_message(self) -> Option<String> {
        fn text(value: Option<Value>) -> Option<String> {
            match value? {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            }
        }
        text(self.message).or_else(|| text(self.detail))
    }
}

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers; these replace the defaults of the same name
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    /// Options carrying a JSON-encoded body
    pub fn json<B: Serialize + ?Sized>(body: &B) -> ClientResult<Self> {
        Ok(Self {
            headers: HeaderMap::new(),
            body: Some(serde_json::to_vec(body)?),
        })
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client bound to one base URL and timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one request against `base_url + path`.
    ///
    /// Returns `Ok(None)` when a successful response has an empty or `null`
    /// body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending request");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut req = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = options.body {
            req = req.body(body);
        }

        // Dropping the exchange on expiry cancels both the request and the timer.
        let result = match tokio::time::timeout(self.timeout, Self::exchange(req)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout),
        };

        if let Err(e) = &result {
            warn!(%method, %url, error = %e, "Request failed");
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        self.request(Method::GET, path, RequestOptions::default())
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        self.request(Method::POST, path, RequestOptions::json(body)?)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        self.request(Method::PUT, path, RequestOptions::json(body)?)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        self.request(Method::DELETE, path, RequestOptions::default())
            .await
    }

    async fn exchange<T: DeserializeOwned>(req: RequestBuilder) -> ClientResult<Option<T>> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Null => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }
}

/// Best-effort message from a failed response body.
///
/// Prefers the JSON `message` field, then `detail`, and otherwise falls back
/// to `HTTP <status>: <reason>`.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
        })
}
