//! # Hubble Core
//!
//! Building blocks for querying a monitoring agent over HTTP.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`agent`] | Agent target, endpoints and the ping/metrics client |
//! | [`error`] | Core error types |
//! | [`http_client`] | Blocking HTTP transport abstraction |
//! | [`path`] | Dotted metric paths |
//! | [`resolver`] | Metric lookup inside a JSON document |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hubble_core::{AgentClient, AgentTarget, ReqwestHttpClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AgentClient::new(AgentTarget::default(), ReqwestHttpClient::new());
//!     let available = client.metric("memory.available")?;
//!     println!("{available}");
//!     Ok(())
//! }
//! ```
//!
//! ## Path semantics
//!
//! Resolution stops at the first value that is not an object, so
//! `memory.available.bytes` returns `memory.available` when that is a
//! number. Paths that end on an object are reported as not found.

pub mod agent;
pub mod error;
pub mod http_client;
pub mod path;
pub mod resolver;

pub use agent::{AgentClient, AgentTarget, Endpoint, PingOutcome, DEFAULT_HOST, DEFAULT_PORT};

pub use error::{AgentError, NotFoundReason, ResolveError};

pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use path::MetricPath;

pub use resolver::{parse_document, resolve, resolve_bytes, resolve_str, Document};
