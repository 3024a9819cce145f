//! HTTP transport to the generative service.

pub mod http;

pub use http::{build_http_client, HttpTransport, TransportError};
