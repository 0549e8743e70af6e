//! Declarative macros for generating typed facades over the forwarding
//! client.

use routerpc_core::RpcError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Generate a typed facade struct over a [`Client`](crate::Client).
///
/// Each declared method carries a fixed segment path and a typed signature;
/// the expansion serializes the arguments, forwards them through the generic
/// call primitive, and decodes the response into the declared return type.
/// Unlike the dynamic [`Scope`](crate::Scope) surface, path names here are
/// checked at compile time - a typo is a build error, not a stray request.
///
/// # Example
///
/// ```rust
/// use routerpc_client::{rpc_interface, Client, ClientConfig, EchoTransport};
/// use std::sync::Arc;
///
/// rpc_interface! {
///     /// Typed facade over the users namespace.
///     pub interface UsersApi {
///         route "users" / "get" fn get(id: &str) -> serde_json::Value;
///         route "users" / "create" fn create(name: &str, admin: bool) -> serde_json::Value;
///     }
/// }
///
/// let client = Client::new(ClientConfig::new("/api"), Arc::new(EchoTransport::new()))?;
/// let api = UsersApi::new(client);
/// # let _ = api;
/// # Ok::<(), routerpc_client::RpcError>(())
/// ```
#[macro_export]
macro_rules! rpc_interface {
    (
        $(#[$meta:meta])*
        $vis:vis interface $name:ident {
            $(
                $(#[$method_meta:meta])*
                route $($seg:literal)/+ fn $method:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $ret:ty ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            client: $crate::Client,
        }

        impl $name {
            pub fn new(client: $crate::Client) -> Self {
                Self { client }
            }

            pub fn client(&self) -> &$crate::Client {
                &self.client
            }

            $(
                $(#[$method_meta])*
                pub async fn $method(&self, $($arg: $ty),*) -> ::std::result::Result<$ret, $crate::RpcError> {
                    const SEGMENTS: &[&str] = &[$($seg),+];
                    let route = $crate::Route::from_segments(SEGMENTS.iter().copied());
                    let target = self.client.target_for(&route);
                    let args = ::std::vec![
                        $($crate::macros::encode_arg(&target, &$arg)?),*
                    ];
                    let value = self.client.dispatch(route, args).await?;
                    $crate::macros::decode_response(&target, value)
                }
            )*
        }
    };
}

// Expansion support for rpc_interface!; not part of the public surface.

#[doc(hidden)]
pub fn encode_arg<T: Serialize>(target: &str, value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::serialization(target, e))
}

#[doc(hidden)]
pub fn decode_response<R: DeserializeOwned>(target: &str, value: Value) -> Result<R, RpcError> {
    serde_json::from_value(value).map_err(|e| RpcError::deserialization(target, e))
}
