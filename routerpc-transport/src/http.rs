use crate::CallTransport;
use async_trait::async_trait;
use routerpc_core::{CallRequest, RpcError};
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

/// Production transport: POSTs the captured argument list as a JSON array to
/// the target and resolves with the deserialized response body.
///
/// Failure classification: request-level failures (connect, timeout, body
/// read) become [`RpcError::Transport`], a non-success status becomes
/// [`RpcError::Status`], and an unparseable body becomes
/// [`RpcError::Deserialization`]. Nothing is retried here.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| RpcError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl CallTransport for HttpTransport {
    async fn invoke(&self, target: &str, request: &CallRequest) -> Result<Value, RpcError> {
        let response = self
            .http
            .post(target)
            .json(&request.args)
            .send()
            .await
            .map_err(|e| RpcError::transport(target, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpcError::transport(target, e))?;

        if !status.is_success() {
            return Err(RpcError::status(target, status.as_u16(), body));
        }

        trace!(%target, "response body:\n{}", body);

        serde_json::from_str(&body).map_err(|e| RpcError::deserialization(target, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_construction() {
        let transport = HttpTransport::new(HttpConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_default_timeout() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_ms, 30000);
    }
}
