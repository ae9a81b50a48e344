//! Dotted-path lookup over parsed metric documents.
//!
//! Traversal descends only through objects. The first non-object value met
//! along the way is the result, even when segments remain unconsumed:
//! `a.b.c` over `{"a": {"b": 5}}` yields `5`. A path that is used up while
//! still pointing at an object does not resolve.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NotFoundReason, ResolveError};
use crate::path::MetricPath;

/// Parsed top-level metrics document.
pub type Document = Map<String, Value>;

/// Parse raw response bytes as a JSON object.
///
/// Valid JSON that is not an object (`[1]`, `5`) is a parse error as well.
pub fn parse_document(bytes: &[u8]) -> Result<Document, ResolveError> {
    serde_json::from_slice(bytes).map_err(ResolveError::from)
}

/// Walk `path` through `root` and return the terminal value it lands on.
pub fn resolve<'a>(root: &'a Document, path: &MetricPath) -> Result<&'a Value, ResolveError> {
    let mut current = root;

    for (depth, segment) in path.segments().enumerate() {
        let found = if segment.is_empty() {
            None
        } else {
            current.get(segment)
        };

        match found {
            None => {
                debug!(path = %path, segment, depth, "metric segment missing");
                return Err(ResolveError::not_found(
                    path.as_str(),
                    NotFoundReason::MissingSegment {
                        segment: segment.to_owned(),
                        depth,
                    },
                ));
            }
            Some(Value::Object(next)) => current = next,
            Some(terminal) => {
                debug!(path = %path, depth, "metric resolved");
                return Ok(terminal);
            }
        }
    }

    debug!(path = %path, "metric path ended on an object");
    Err(ResolveError::not_found(
        path.as_str(),
        NotFoundReason::EndedOnObject,
    ))
}

/// Parse `document` and resolve `path` in one step.
pub fn resolve_bytes(document: &[u8], path: &str) -> Result<Value, ResolveError> {
    let root = parse_document(document)?;
    resolve(&root, &MetricPath::new(path)).cloned()
}

pub fn resolve_str(document: &str, path: &str) -> Result<Value, ResolveError> {
    resolve_bytes(document.as_bytes(), path)
}
