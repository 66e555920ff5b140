//! HTTP protocol implementation
//!
//! Handles request parsing, routing, response generation, and per-route
//! handlers.

pub mod handlers;
pub mod request;
pub mod response;

pub use handlers::{RequestContext, error_response, handle_request};
pub use request::{Request, Route, parse_request_line, route_request};
pub use response::Response;
