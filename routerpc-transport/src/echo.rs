use crate::CallTransport;
use async_trait::async_trait;
use routerpc_core::{CallRequest, RpcError};
use serde_json::{json, Value};

/// Loopback transport: resolves every call with the target it was addressed
/// to and the arguments it carried, without touching the network.
///
/// Useful as a test double and for inspecting what a client would send.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTransport;

impl EchoTransport {
    pub fn new() -> Self {
        EchoTransport
    }
}

#[async_trait]
impl CallTransport for EchoTransport {
    async fn invoke(&self, target: &str, request: &CallRequest) -> Result<Value, RpcError> {
        Ok(json!({
            "target": target,
            "args": request.args,
        }))
    }
}
