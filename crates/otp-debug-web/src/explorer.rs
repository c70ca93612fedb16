//! Deep links into the GraphiQL explorer.
//!
//! The explorer is addressed as `<base>&query=<document>&variables=<json>`, so the
//! configured base URL is expected to already carry a query string
//! (e.g. `http://localhost:8080/graphiql?flavor=transmodel`).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Bytes left unescaped in a URL component: alphanumerics plus `-_.!~*'()`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where the explorer lives. Passed down explicitly to every link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub graphiql_url: Option<String>,
}

impl ExplorerConfig {
    pub fn new(graphiql_url: impl Into<String>) -> Self {
        Self {
            graphiql_url: Some(graphiql_url.into()),
        }
    }

    /// Base URL, empty when not configured. Links still build, they just won't resolve.
    pub fn base(&self) -> &str {
        self.graphiql_url.as_deref().unwrap_or_default()
    }

    pub fn is_configured(&self) -> bool {
        !self.base().is_empty()
    }
}

/// Variables for the line query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineQueryVariables {
    pub id: Option<String>,
}

impl LineQueryVariables {
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.map(str::to_string) }
    }

    /// Serialized as `{"id":"..."}`, or `{"id":null}` when the line has no id
    pub fn to_json(&self) -> String {
        // A struct with one optional string field always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Percent-encode a URL component the way browsers' `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Explorer URL with `query` preloaded and the line id bound as its variables
pub fn build_line_url(config: &ExplorerConfig, query: &str, line_id: Option<&str>) -> String {
    let variables = LineQueryVariables::new(line_id).to_json();
    format!(
        "{}&query={}&variables={}",
        config.base(),
        encode_component(query),
        encode_component(&variables)
    )
}
