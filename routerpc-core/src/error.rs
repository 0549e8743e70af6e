use thiserror::Error;

/// Failure taxonomy for the forwarding client.
///
/// `Configuration` is raised synchronously at construction time; every other
/// variant is per-call, surfaces through that call's future, and names the
/// target it was attempting so concurrent calls can be told apart.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    #[error("transport failure for {target}: {detail}")]
    Transport { target: String, detail: String },

    #[error("request to {target} failed with status {status}")]
    Status {
        target: String,
        status: u16,
        body: String,
    },

    #[error("could not encode arguments for {target}: {source}")]
    Serialization {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not decode response from {target}: {source}")]
    Deserialization {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RpcError {
    pub fn configuration(message: impl Into<String>) -> Self {
        RpcError::Configuration(message.into())
    }

    pub fn transport(target: impl Into<String>, detail: impl ToString) -> Self {
        RpcError::Transport {
            target: target.into(),
            detail: detail.to_string(),
        }
    }

    pub fn status(target: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        RpcError::Status {
            target: target.into(),
            status,
            body: body.into(),
        }
    }

    pub fn serialization(target: impl Into<String>, source: serde_json::Error) -> Self {
        RpcError::Serialization {
            target: target.into(),
            source,
        }
    }

    pub fn deserialization(target: impl Into<String>, source: serde_json::Error) -> Self {
        RpcError::Deserialization {
            target: target.into(),
            source,
        }
    }

    /// The target the failing call was addressing, where one exists.
    /// Configuration failures happen before any call is possible.
    pub fn target(&self) -> Option<&str> {
        match self {
            RpcError::Configuration(_) => None,
            RpcError::Transport { target, .. }
            | RpcError::Status { target, .. }
            | RpcError::Serialization { target, .. }
            | RpcError::Deserialization { target, .. } => Some(target),
        }
    }
}
