use std::fmt::{Display, Formatter};

use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("hubble/", env!("CARGO_PKG_VERSION"));

/// HTTP methods the agent API is queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outgoing request: no body, no custom headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }
}

/// Status code and fully drained body of a response.
///
/// The body is kept as raw bytes; it is never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("error creating request: {0}")]
    InvalidRequest(String),

    #[error("error performing request: {0}")]
    Transport(String),

    #[error("error reading response body: {message}")]
    Body { status: u16, message: String },
}

/// Transport contract: exactly one blocking round trip per call.
///
/// The status code is returned for every completed response. Deciding what
/// counts as success is up to the caller.
pub trait HttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).execute(request)
    }
}

/// Production HTTP client backed by reqwest's blocking client.
///
/// Timeouts and redirect handling are left at the library defaults. A client
/// that fails to build reports that failure from `execute`, as a request
/// construction error.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Result<reqwest::blocking::Client, HttpError>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::InvalidRequest(e.to_string()));
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let client = self.client.as_ref().map_err(Clone::clone)?;
        let builder = match request.method {
            HttpMethod::Get => client.get(&request.url),
        };
        let prepared = builder
            .build()
            .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;

        debug!(method = %request.method, url = %request.url, "sending request");
        let response = client
            .execute(prepared)
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        // bytes() reads to the end, which also releases the connection.
        let body = response
            .bytes()
            .map_err(|e| HttpError::Body {
                status,
                message: e.to_string(),
            })?
            .to_vec();
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}
