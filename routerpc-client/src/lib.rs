pub mod client;
pub mod macros;
pub mod scope;

pub use client::{Client, ClientConfig};
pub use scope::Scope;

// Re-export the data model and transport seam so callers need only this
// crate.
pub use routerpc_core::{CallRequest, Route, RpcError};
pub use routerpc_transport::{CallTransport, EchoTransport};
#[cfg(feature = "http")]
pub use routerpc_transport::{HttpConfig, HttpTransport};
