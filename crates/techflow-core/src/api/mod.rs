//! REST Client
//!
//! `ApiClient` speaks the backend's JSON API over any [`Transport`]. The
//! browser build uses [`ReqwestTransport`]; tests plug in a fake.

mod client;
mod transport;

pub use client::{ApiClient, LoginRequest, RegisterRequest};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
