// Forwarding client for path-routed RPC endpoints.
// The client is a pure forwarding layer: it accumulates no state across
// calls, performs no retries, and never branches on what a path "means" -
// every terminal invocation becomes one transport call to
// {base}/{segment1}/.../{segmentN}.

use crate::scope::Scope;
use routerpc_core::{CallRequest, Route, RpcError};
use routerpc_transport::CallTransport;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base path prefix for all forwarded calls, e.g. `/api` or
    /// `https://host/api`
    pub path: String,
}

impl ClientConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The root handle callers navigate from.
///
/// Holds only the immutable base path and the transport; cloning is cheap
/// and clones share both. Because nothing mutable is shared, any number of
/// calls may be in flight on one handle concurrently without interacting.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base: String,
    transport: Arc<dyn CallTransport>,
}

impl Client {
    /// Create a client over an explicit transport.
    ///
    /// Fails fast with [`RpcError::Configuration`] when the base path is
    /// empty or whitespace - every derived request depends on it. Trailing
    /// slashes are stripped so target joining yields exactly one `/` per
    /// boundary; a bare `"/"` base is legal and produces absolute targets.
    pub fn new(config: ClientConfig, transport: Arc<dyn CallTransport>) -> Result<Self, RpcError> {
        let trimmed = config.path.trim();
        if trimmed.is_empty() {
            return Err(RpcError::configuration("base path must not be empty"));
        }
        let base = trimmed.trim_end_matches('/').to_string();

        Ok(Self {
            inner: Arc::new(ClientInner { base, transport }),
        })
    }

    /// Create a client over an HTTP transport with default settings.
    #[cfg(feature = "http")]
    pub fn http(config: ClientConfig) -> Result<Self, RpcError> {
        let transport = routerpc_transport::HttpTransport::new(Default::default())?;
        Self::new(config, Arc::new(transport))
    }

    /// The normalized base path.
    pub fn base(&self) -> &str {
        &self.inner.base
    }

    /// Begin a navigation chain at `segment`.
    pub fn at(&self, segment: impl Into<String>) -> Scope {
        Scope::new(self.clone(), Route::root().child(segment))
    }

    /// The generic forwarding primitive: one call with a fixed path.
    ///
    /// Everything else in this crate - scopes, typed facades - bottoms out
    /// here.
    pub async fn call(&self, path: &[&str], args: Vec<Value>) -> Result<Value, RpcError> {
        self.dispatch(Route::from_segments(path.iter().copied()), args)
            .await
    }

    /// Forward an already-built route.
    pub async fn dispatch(&self, route: Route, args: Vec<Value>) -> Result<Value, RpcError> {
        let request = CallRequest::new(route, args);
        let target = request.target(&self.inner.base);

        debug!(%target, args = request.args.len(), "forwarding call");
        trace!(%target, "arguments: {:?}", request.args);

        self.inner.transport.invoke(&target, &request).await
    }

    /// The target a route would address under this client's base path.
    pub fn target_for(&self, route: &Route) -> String {
        route.target(&self.inner.base)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routerpc_transport::EchoTransport;
    use serde_json::json;

    fn echo_client(base: &str) -> Client {
        Client::new(ClientConfig::new(base), Arc::new(EchoTransport::new()))
            .expect("valid base path")
    }

    #[test]
    fn test_client_creation() {
        let client = Client::new(
            ClientConfig::new("/api"),
            Arc::new(EchoTransport::new()),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_empty_base_path_is_rejected_at_construction() {
        for path in ["", "   ", "\t"] {
            let result = Client::new(ClientConfig::new(path), Arc::new(EchoTransport::new()));
            assert!(matches!(result, Err(RpcError::Configuration(_))));
        }
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        assert_eq!(echo_client("/api/").base(), "/api");
        assert_eq!(echo_client("/api///").base(), "/api");
        // A bare "/" base normalizes to the empty prefix, so targets stay
        // absolute.
        assert_eq!(echo_client("/").base(), "");
    }

    #[tokio::test]
    async fn test_call_primitive_builds_the_target() {
        let client = echo_client("/api");
        let value = client
            .call(&["users", "get"], vec![json!("123")])
            .await
            .unwrap();

        assert_eq!(value["target"], json!("/api/users/get"));
        assert_eq!(value["args"], json!(["123"]));
    }

    #[tokio::test]
    async fn test_call_under_root_base() {
        let client = echo_client("/");
        let value = client.call(&["users", "get"], vec![]).await.unwrap();
        assert_eq!(value["target"], json!("/users/get"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_client_creation() {
        let client = Client::http(ClientConfig::new("http://localhost:3000/api"));
        assert!(client.is_ok());
    }
}
