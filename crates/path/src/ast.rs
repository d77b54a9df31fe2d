//! Defines the parsed form of path expressions and key paths.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where resolution of a path expression starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anchor {
    /// The document root handed to the outermost mapping call.
    Root,
    /// The input record enclosing the field being computed.
    Local,
}

/// A parsed path expression such as `company.name` or `$.socialNetworks.twitter`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpr {
    pub(crate) anchor: Anchor,
    pub(crate) segments: Vec<String>,
}

impl PathExpr {
    /// Builds an expression directly from an anchor and its field names.
    pub fn new<I, S>(anchor: Anchor, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchor,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The field names walked during resolution, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_rooted(&self) -> bool {
        self.anchor == Anchor::Root
    }
}

/// Formats with the default syntax (`$.` marker, `.` separator).
impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rooted() {
            f.write_str("$.")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// One step of the key path accumulated while descending through a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A record key.
    Key(String),
    /// A sequence index.
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}
