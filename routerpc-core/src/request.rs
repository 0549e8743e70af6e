use crate::route::Route;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The artifact produced when a navigation chain is invoked: the accumulated
/// route plus the arguments captured at the call site, in call order.
///
/// A `CallRequest` is constructed once per invocation and owned by that
/// invocation; two concurrent calls on the same client never share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub route: Route,
    pub args: Vec<Value>,
}

impl CallRequest {
    pub fn new(route: Route, args: Vec<Value>) -> Self {
        CallRequest { route, args }
    }

    /// The request target for a given base path: `{base}/{joined-route}`.
    pub fn target(&self, base: &str) -> String {
        self.route.target(base)
    }
}
