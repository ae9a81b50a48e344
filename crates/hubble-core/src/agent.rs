use serde_json::Value;
use tracing::debug;

use crate::error::AgentError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::resolver;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9703;

/// Agent API routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ping,
    Metrics,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Ping => "/api/ping",
            Self::Metrics => "/api/metrics",
        }
    }
}

/// Host and port of the agent being queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    pub host: String,
    pub port: u16,
}

impl AgentTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("http://{}:{}{}", self.host, self.port, endpoint.path())
    }
}

impl Default for AgentTarget {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Result of a ping round trip that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingOutcome {
    Reachable,
    Unhealthy { status: u16 },
}

impl PingOutcome {
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable)
    }
}

/// Client for a single agent. Each call is one blocking request.
#[derive(Debug, Clone)]
pub struct AgentClient<C> {
    target: AgentTarget,
    http: C,
}

impl<C: HttpClient> AgentClient<C> {
    pub fn new(target: AgentTarget, http: C) -> Self {
        Self { target, http }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        self.target.url(endpoint)
    }

    /// GET `/api/ping`. Any body is accepted; only the status matters.
    pub fn ping(&self) -> Result<PingOutcome, AgentError> {
        let response = self.http.execute(HttpRequest::get(self.url(Endpoint::Ping)))?;
        if response.is_ok() {
            Ok(PingOutcome::Reachable)
        } else {
            debug!(status = response.status, "agent ping returned non-200 status");
            Ok(PingOutcome::Unhealthy {
                status: response.status,
            })
        }
    }

    /// GET `/api/metrics` and return the body bytes exactly as received.
    pub fn metrics(&self) -> Result<Vec<u8>, AgentError> {
        let response = self
            .http
            .execute(HttpRequest::get(self.url(Endpoint::Metrics)))?;
        if !response.is_ok() {
            return Err(AgentError::Status {
                status: response.status,
            });
        }

        Ok(response.body)
    }

    /// Fetch metrics and resolve a dotted `path` inside them.
    pub fn metric(&self, path: &str) -> Result<Value, AgentError> {
        let body = self.metrics()?;
        debug!(path, "resolving metric");
        resolver::resolve_bytes(&body, path).map_err(AgentError::from)
    }
}
