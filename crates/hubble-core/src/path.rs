use std::fmt::{Display, Formatter};

const SEPARATOR: char = '.';

/// Dotted route through nested JSON objects, e.g. `memory.available`.
///
/// Construction never fails. Empty input and consecutive separators yield
/// empty segments, which never match a key during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricPath {
    raw: String,
    segments: Vec<String>,
}

impl MetricPath {
    pub fn new(input: impl Into<String>) -> Self {
        let raw = input.into();
        let segments = raw.split(SEPARATOR).map(String::from).collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl Display for MetricPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MetricPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MetricPath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
