#![deny(missing_docs)]

//! # OData Paths
//!
//! A parsed request path. Only the segment kinds that influence codec choice
//! are distinguished (`$count`, `$value`, `$ref`, `$metadata`); every other
//! segment is a named resource with an optional key.
//!
//! Parsing drops any query string or fragment, splits on `/` and
//! percent-decodes each segment. It does not validate segments against a
//! schema model.

use crate::error::{FormatterError, FormatterResult};
use percent_encoding::percent_decode_str;
use std::fmt;
use std::str::FromStr;

/// One segment of an OData path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named resource: entity set, singleton, navigation or property.
    Resource {
        /// Segment name.
        name: String,
        /// Key predicate between parentheses, without the parentheses.
        key: Option<String>,
    },
    /// `$count`
    Count,
    /// `$value`
    Value,
    /// `$ref`
    Ref,
    /// `$metadata`
    Metadata,
}

impl PathSegment {
    /// A resource segment without a key.
    pub fn resource(name: impl Into<String>) -> Self {
        PathSegment::Resource {
            name: name.into(),
            key: None,
        }
    }

    fn parse(raw: &str) -> FormatterResult<Self> {
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|e| FormatterError::InvalidPath(format!("'{}': {}", raw, e)))?;

        let segment = match decoded.as_ref() {
            "$count" => PathSegment::Count,
            "$value" => PathSegment::Value,
            "$ref" => PathSegment::Ref,
            "$metadata" => PathSegment::Metadata,
            text => match text.split_once('(') {
                Some((name, rest)) if rest.ends_with(')') && !name.is_empty() => {
                    PathSegment::Resource {
                        name: name.to_string(),
                        key: Some(rest[..rest.len() - 1].to_string()),
                    }
                }
                Some(_) => {
                    return Err(FormatterError::InvalidPath(format!(
                        "malformed key segment '{}'",
                        text
                    )))
                }
                None => PathSegment::resource(text),
            },
        };
        Ok(segment)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Resource { name, key: None } => f.write_str(name),
            PathSegment::Resource {
                name,
                key: Some(key),
            } => write!(f, "{}({})", name, key),
            PathSegment::Count => f.write_str("$count"),
            PathSegment::Value => f.write_str("$value"),
            PathSegment::Ref => f.write_str("$ref"),
            PathSegment::Metadata => f.write_str("$metadata"),
        }
    }
}

/// A parsed OData request path. An empty path addresses the service root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataPath {
    segments: Vec<PathSegment>,
}

impl ODataPath {
    /// Creates a path from already parsed segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// All segments, in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The final segment, if any.
    pub fn last_segment(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Whether the path ends with `$count`.
    pub fn is_count_request(&self) -> bool {
        matches!(self.last_segment(), Some(PathSegment::Count))
    }

    /// Whether the path ends with `$value`.
    pub fn is_raw_value_request(&self) -> bool {
        matches!(self.last_segment(), Some(PathSegment::Value))
    }

    /// Whether the path ends with `$ref`.
    pub fn is_reference_request(&self) -> bool {
        matches!(self.last_segment(), Some(PathSegment::Ref))
    }
}

impl FromStr for ODataPath {
    type Err = FormatterError;

    fn from_str(s: &str) -> FormatterResult<Self> {
        let path = s.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let segments = trimmed
            .split('/')
            .map(|raw| {
                if raw.is_empty() {
                    Err(FormatterError::InvalidPath(format!("empty segment in '{}'", s)))
                } else {
                    PathSegment::parse(raw)
                }
            })
            .collect::<FormatterResult<Vec<_>>>()?;

        Ok(Self { segments })
    }
}

impl fmt::Display for ODataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_and_value_detection() {
        let count: ODataPath = "Customers/$count".parse().unwrap();
        assert!(count.is_count_request());
        assert!(!count.is_raw_value_request());

        let value: ODataPath = "/Customers(1)/Name/$value".parse().unwrap();
        assert!(value.is_raw_value_request());
        assert_eq!(value.segments().len(), 3);
    }

    #[test]
    fn test_key_segments() {
        let path: ODataPath = "Customers('a%20b')/Orders/$ref".parse().unwrap();
        assert_eq!(
            path.segments()[0],
            PathSegment::Resource {
                name: "Customers".into(),
                key: Some("'a b'".into())
            }
        );
        assert!(path.is_reference_request());
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let count: ODataPath = "Customers/$count?$filter=Age gt 3".parse().unwrap();
        assert!(count.is_count_request());
        assert_eq!(count.to_string(), "Customers/$count");

        let value: ODataPath = "Customers(1)/Name/$value#top".parse().unwrap();
        assert!(value.is_raw_value_request());

        let root: ODataPath = "?$format=json".parse().unwrap();
        assert!(root.last_segment().is_none());
    }

    #[test]
    fn test_service_root_is_empty() {
        let root: ODataPath = "/".parse().unwrap();
        assert!(root.last_segment().is_none());
        assert!(!root.is_count_request());
    }

    #[test]
    fn test_invalid_paths() {
        assert!("Customers//Orders".parse::<ODataPath>().is_err());
        assert!("Customers(1".parse::<ODataPath>().is_err());
        assert!("(1)".parse::<ODataPath>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let text = "Customers(1)/Orders/$count";
        let path: ODataPath = text.parse().unwrap();
        assert_eq!(path.to_string(), text);
        assert_eq!(
            "$metadata".parse::<ODataPath>().unwrap().last_segment(),
            Some(&PathSegment::Metadata)
        );
    }
}
