use async_trait::async_trait;
use routerpc_core::{CallRequest, RpcError};
use serde_json::Value;

/// The seam between the forwarding client and the wire.
///
/// One `invoke` per terminal invocation: the client hands over the fully
/// constructed target and the captured arguments, the transport performs the
/// request and resolves with the raw response value. Implementations hold no
/// per-call state, so a single transport instance can serve any number of
/// concurrent calls.
///
/// Retries, batching, and cancellation all belong behind this trait, not in
/// the client.
#[async_trait]
pub trait CallTransport: Send + Sync {
    async fn invoke(&self, target: &str, request: &CallRequest) -> Result<Value, RpcError>;
}
