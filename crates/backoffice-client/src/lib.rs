//! # backoffice-client
//!
//! Everything between the console's controllers and the REST backend:
//! the envelope decoder, the [`ApiClient`](client::ApiClient) that sends
//! requests through an [`ApiTransport`](backoffice_core::traits::ApiTransport),
//! the reqwest transport, an in-memory mock transport for tests, and one
//! service per backend resource.

pub mod client;
pub mod envelope;
pub mod http;
pub mod resource;
pub mod routes;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{ApiClient, Outcome};
pub use resource::{Editable, Resource, ResourceService};
pub use routes::Routes;
