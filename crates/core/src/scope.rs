use reshape_path::PathSegment;
use serde_json::Value;

/// Context threaded through every recursive mapping call.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    /// The document root of the outermost call. Constant for the whole walk.
    pub root: &'a Value,
    /// Keys and indices leading from the root to the field being resolved.
    pub path: Vec<PathSegment>,
}

impl<'a> Scope<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// Returns a scope one step deeper, sharing the same root.
    pub fn descend(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(segment.into());
        Self {
            root: self.root,
            path,
        }
    }
}
