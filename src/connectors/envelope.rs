//! Unwrapping of vendor response envelopes.
//!
//! 200 responses that lack the expected rows are treated as an empty page,
//! never as an error.

use reqwest::header::{HeaderMap, LINK};
use serde_json::Value;

use super::vendor::{Envelope, PageTokenSource};

/// Rows and pagination metadata pulled out of one list response
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    pub rows: Vec<Value>,
    pub total: u64,
    pub page_token: Option<String>,
}

pub fn list_page(
    envelope: Envelope,
    token_source: PageTokenSource,
    headers: &HeaderMap,
    body: &Value,
) -> RawPage {
    let (rows, total) = match envelope {
        Envelope::Data { items, total } => (
            extract_rows(body.get(items)),
            body.get(total).and_then(as_count).unwrap_or(0),
        ),
        Envelope::BareArray { total_header } => (
            extract_rows(Some(body)),
            headers
                .get(total_header)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(0),
        ),
    };

    RawPage {
        rows,
        total,
        page_token: page_token(token_source, headers),
    }
}

fn extract_rows(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(|value| value.as_array())
        .cloned()
        .unwrap_or_default()
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn page_token(source: PageTokenSource, headers: &HeaderMap) -> Option<String> {
    match source {
        PageTokenSource::None => None,
        PageTokenSource::LinkNext => headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_link),
        PageTokenSource::Header(name) => headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    }
}

/// Target of the `rel="next"` entry of an RFC 8288 `Link` header
pub fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if is_next && target.starts_with('<') && target.ends_with('>') {
            Some(target[1..target.len() - 1].to_string())
        } else {
            None
        }
    })
}

/// The object a single-resource GET returned.
///
/// A non-null `data` object is preferred; a body without a `data` key is the
/// object itself. `{ "data": null }`, arrays and scalars yield `None`.
pub fn single(body: &Value) -> Option<&Value> {
    match body.get("data") {
        Some(data) if data.is_object() => Some(data),
        Some(_) => None,
        None if body.is_object() => Some(body),
        None => None,
    }
}
