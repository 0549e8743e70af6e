pub mod echo;
#[cfg(feature = "http")]
pub mod http;
pub mod transport;

pub use echo::EchoTransport;
#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};
pub use transport::CallTransport;
