use crate::client::Client;
use routerpc_core::{Route, RpcError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A position in a navigation chain: a client handle plus the route
/// accumulated so far.
///
/// Scopes are immutable. [`Scope::at`] derives a deeper scope and leaves the
/// parent usable, so one scope can fan out into many chains; nothing is
/// shared between them but the client handle. A scope is both navigable and
/// invocable at every depth, and the runtime never checks segment names
/// against any declared interface - see [`rpc_interface!`](crate::rpc_interface)
/// for the compile-time-checked alternative.
#[derive(Debug, Clone)]
pub struct Scope {
    client: Client,
    route: Route,
}

impl Scope {
    pub(crate) fn new(client: Client, route: Route) -> Self {
        Scope { client, route }
    }

    /// Navigate one segment deeper.
    pub fn at(&self, segment: impl Into<String>) -> Scope {
        Scope {
            client: self.client.clone(),
            route: self.route.child(segment),
        }
    }

    /// The route accumulated so far.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Terminate the chain: forward the accumulated route with `args` and
    /// resolve with the raw response value.
    pub async fn invoke(&self, args: Vec<Value>) -> Result<Value, RpcError> {
        self.client.dispatch(self.route.clone(), args).await
    }

    /// Terminate the chain and decode the response into `R`.
    pub async fn invoke_as<R: DeserializeOwned>(&self, args: Vec<Value>) -> Result<R, RpcError> {
        let target = self.client.target_for(&self.route);
        let value = self.invoke(args).await?;
        serde_json::from_value(value).map_err(|e| RpcError::deserialization(target, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use routerpc_transport::EchoTransport;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    fn client() -> Client {
        Client::new(ClientConfig::new("/api"), Arc::new(EchoTransport::new()))
            .expect("valid base path")
    }

    #[test]
    fn test_chain_accumulates_left_to_right() {
        let scope = client().at("users").at("profile").at("details").at("query");
        assert_eq!(scope.route().join(), "users/profile/details/query");
        assert_eq!(scope.route().depth(), 4);
    }

    #[test]
    fn test_parent_scope_stays_usable() {
        let users = client().at("users");
        let get = users.at("get");
        let delete = users.at("delete");

        assert_eq!(users.route().join(), "users");
        assert_eq!(get.route().join(), "users/get");
        assert_eq!(delete.route().join(), "users/delete");
    }

    #[tokio::test]
    async fn test_invoke_forwards_route_and_args() {
        let value = client()
            .at("posts")
            .at("create")
            .invoke(vec![json!({ "title": "New Post" })])
            .await
            .unwrap();

        assert_eq!(value["target"], json!("/api/posts/create"));
        assert_eq!(value["args"], json!([{ "title": "New Post" }]));
    }

    #[tokio::test]
    async fn test_zero_argument_invocation_captures_empty_list() {
        let value = client().at("health").invoke(vec![]).await.unwrap();
        assert_eq!(value["args"], json!([]));
    }

    #[tokio::test]
    async fn test_repeated_segment_names_are_forwarded() {
        let value = client().at("a").at("a").invoke(vec![]).await.unwrap();
        assert_eq!(value["target"], json!("/api/a/a"));
    }

    #[tokio::test]
    async fn test_invoke_as_decodes_the_response() {
        #[derive(Debug, Deserialize)]
        struct Echoed {
            target: String,
            args: Vec<serde_json::Value>,
        }

        let echoed: Echoed = client()
            .at("users")
            .at("get")
            .invoke_as(vec![json!("42")])
            .await
            .unwrap();

        assert_eq!(echoed.target, "/api/users/get");
        assert_eq!(echoed.args, vec![json!("42")]);
    }

    #[tokio::test]
    async fn test_invoke_as_surfaces_decode_failures() {
        // The echo response is an object; decoding it as a number fails.
        let result: Result<u64, _> = client().at("users").at("get").invoke_as(vec![]).await;

        match result {
            Err(RpcError::Deserialization { target, .. }) => {
                assert_eq!(target, "/api/users/get");
            }
            other => panic!("expected a deserialization error, got {:?}", other),
        }
    }
}
