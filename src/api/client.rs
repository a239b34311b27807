//! Shared HTTP client for the gym API.
//!
//! One [`ApiClient`] is created at startup and cloned wherever requests are
//! made. Clones share the default header map, so setting the bearer token
//! once (on sign-in or session restore) authenticates every later request
//! from every handle.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{classify_http_error, AppError, GymError, GymResult, NetworkError};
use crate::traits::{Headers, HttpClient, Response};

/// Default URL for the gym API
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Client for the gym REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    default_headers: Arc<RwLock<Headers>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth_token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` on top of the given transport.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url,
            http,
            default_headers: Arc::new(RwLock::new(headers)),
        }
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach `token` as the bearer credential of every later request.
    pub fn set_auth_token(&self, token: &str) {
        let mut headers = self
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
    }

    /// Stop sending a bearer credential.
    pub fn clear_auth_token(&self) {
        let mut headers = self
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        headers.remove(AUTHORIZATION);
    }

    /// The bearer token currently attached, if any.
    pub fn auth_token(&self) -> Option<String> {
        self.authorization_header()
            .and_then(|value| value.strip_prefix("Bearer ").map(str::to_string))
    }

    /// The raw `Authorization` default header, if set.
    pub fn authorization_header(&self) -> Option<String> {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(AUTHORIZATION)
            .cloned()
    }

    /// Snapshot of the default headers sent with every request.
    pub fn default_headers(&self) -> Headers {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of an exercise demonstration file.
    pub fn demo_url(&self, demo: &str) -> String {
        self.url(&format!("exercise/demo/{}", demo))
    }

    /// URL of an exercise thumbnail.
    pub fn thumb_url(&self, thumb: &str) -> String {
        self.url(&format!("exercise/thumb/{}", thumb))
    }

    /// URL of a user avatar.
    pub fn avatar_url(&self, avatar: &str) -> String {
        self.url(&format!("avatar/{}", avatar))
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GymResult<T> {
        let response = self.send(Method::Get, path, None).await?;
        Self::decode(&response, path)
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GymResult<T> {
        let response = self.send(Method::Post, path, Some(Self::encode(body, path)?)).await?;
        Self::decode(&response, path)
    }

    /// POST a JSON body to `path`, ignoring the response body.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> GymResult<()> {
        self.send(Method::Post, path, Some(Self::encode(body, path)?))
            .await
            .map(|_| ())
    }

    /// PUT a JSON body to `path`, ignoring the response body.
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> GymResult<()> {
        self.send(Method::Put, path, Some(Self::encode(body, path)?))
            .await
            .map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> GymResult<Response> {
        let url = self.url(path);
        let headers = self.default_headers();

        tracing::debug!(method = method.as_str(), %url, "API request");

        let result = match method {
            Method::Get => self.http.get(&url, &headers).await,
            Method::Post => {
                self.http
                    .post(&url, body.as_deref().unwrap_or_default(), &headers)
                    .await
            }
            Method::Put => {
                self.http
                    .put(&url, body.as_deref().unwrap_or_default(), &headers)
                    .await
            }
        };

        let response = result.map_err(|e| {
            let err = classify_http_error(e, &url);
            tracing::warn!(
                method = method.as_str(),
                %url,
                code = err.error_code(),
                retryable = err.is_retryable(),
                error = %err,
                "API request failed"
            );
            GymError::Network(err)
        })?;

        Self::check_status(response, method, &url)
    }

    /// Turn a non-2xx response into an error.
    ///
    /// Bodies carrying an API `message` become [`AppError`]; anything else
    /// is reported as an HTTP status error.
    fn check_status(response: Response, method: Method, url: &str) -> GymResult<Response> {
        if response.is_success() {
            return Ok(response);
        }

        let status = response.status;
        if let Some(app_error) = AppError::from_response_body(status, &response.body) {
            tracing::info!(
                method = method.as_str(),
                %url,
                status,
                message = %app_error.message,
                "API returned an error"
            );
            return Err(app_error.into());
        }

        let text = response.text().unwrap_or_default();
        let err = NetworkError::HttpStatus {
            status,
            message: text.chars().take(200).collect(),
        };
        tracing::warn!(
            method = method.as_str(),
            %url,
            status,
            code = err.error_code(),
            retryable = err.is_retryable(),
            "Unexpected API status"
        );
        Err(err.into())
    }

    fn encode<B: Serialize>(body: &B, path: &str) -> GymResult<String> {
        serde_json::to_string(body).map_err(|e| GymError::InvalidResponse {
            endpoint: path.to_string(),
            message: format!("Failed to encode request: {}", e),
        })
    }

    fn decode<T: DeserializeOwned>(response: &Response, path: &str) -> GymResult<T> {
        response.json().map_err(|e| GymError::InvalidResponse {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}
