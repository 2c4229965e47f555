//! Core traits defined in `backoffice-core` and implemented by other crates.

pub mod transport;

pub use transport::{ApiRequest, ApiTransport, FormPart, HttpMethod, RequestBody};
