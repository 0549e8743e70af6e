use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of path segments accumulated by navigating a client
/// handle, e.g. `["users", "get"]`.
///
/// Routes are immutable: [`Route::child`] derives a deeper route and leaves
/// the original untouched, so a parent route can keep being navigated after
/// a child has been derived from it. Segments are kept verbatim, in access
/// order, with no deduplication and no depth limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<String>);

impl Route {
    /// The empty route, addressing the base path itself.
    pub fn root() -> Self {
        Route(Vec::new())
    }

    /// Build a route from an ordered list of segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Route(segments.into_iter().map(Into::into).collect())
    }

    /// Derive a new route with one more trailing segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Route(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments in the route.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments joined with `/`, e.g. `users/get`.
    pub fn join(&self) -> String {
        self.0.join("/")
    }

    /// The request target this route addresses under a base path:
    /// `{base}/{joined}`. An empty route addresses the base itself.
    ///
    /// The base is expected to carry no trailing slash; client construction
    /// normalizes this.
    pub fn target(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, self.join())
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

impl<S: Into<String>> FromIterator<S> for Route {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Route::from_segments(iter)
    }
}
