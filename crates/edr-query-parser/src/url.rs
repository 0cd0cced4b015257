//! URL decomposition for EDR query URLs.
//!
//! Splits a raw URL string into an ordered sequence of non-empty path
//! segments and a first-value query-parameter map. Decomposition never
//! fails; validating the decomposed shape (e.g. presence of the
//! `collections` segment) belongs to [`crate::parser::EdrQueryParser`].

use std::collections::HashMap;

use ::url::form_urlencoded;
use ::url::Url;

/// Decomposed form of an EDR query URL.
///
/// Accepts:
/// - absolute URLs: `https://host/collections/obs/position?z=850`
/// - bare paths: `/collections/obs/position?z=850`
///
/// Empty path segments (leading, trailing, or doubled `/`) are dropped.
/// For a repeated query key only the first value is retained, and pairs
/// with an empty value are treated as absent. Query keys and values are
/// percent-decoded (`%3A` becomes `:`, `+` becomes a space); path segments
/// are kept as received.
#[derive(Debug, Clone, PartialEq)]
pub struct EdrUrl {
    path: String,
    segments: Vec<String>,
    query: HashMap<String, String>,
}

impl EdrUrl {
    /// Decompose a URL string. Never fails.
    pub fn parse(url: &str) -> Self {
        let (path, query) = match Url::parse(url) {
            Ok(parsed) => (
                parsed.path().to_string(),
                parsed.query().map(str::to_string),
            ),
            // Not an absolute URL: treat the whole string as path[?query],
            // fragment stripped first.
            Err(_) => {
                let without_fragment = url.split('#').next().unwrap_or(url);
                match without_fragment.split_once('?') {
                    Some((path, query)) => (path.to_string(), Some(query.to_string())),
                    None => (without_fragment.to_string(), None),
                }
            }
        };

        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        let mut parameters = HashMap::new();
        if let Some(query) = query {
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                if value.is_empty() {
                    continue;
                }
                parameters
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }

        Self {
            path,
            segments,
            query: parameters,
        }
    }

    /// The raw path portion of the URL, percent-encoding intact.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The ordered non-empty path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first retained value of a query parameter, if present and
    /// non-empty.
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// The segment immediately following the first occurrence of `literal`.
    pub fn segment_after(&self, literal: &str) -> Option<&str> {
        self.segment_relative(literal, 1)
    }

    /// The segment `advance` positions after the first occurrence of
    /// `literal`.
    pub fn segment_relative(&self, literal: &str, advance: usize) -> Option<&str> {
        let index = self.segments.iter().position(|segment| segment == literal)?;
        self.segments.get(index + advance).map(String::as_str)
    }

    /// The last path segment.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}
