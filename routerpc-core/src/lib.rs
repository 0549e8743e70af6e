pub mod error;
pub mod request;
pub mod route;

pub use error::RpcError;
pub use request::CallRequest;
pub use route::Route;
