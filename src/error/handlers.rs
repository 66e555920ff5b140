//! Error handlers
//!
//! Maps server errors to HTTP status codes and logs diagnostics at the boundary.

use crate::error::types::{DocumentError, RequestError, ResolveError, ServerError};
use log::error;

/// Log a server error at the request boundary
pub fn handle_error(err: &ServerError) {
    error!("Server error: {}", err);
}

/// Convert an error to its HTTP status code
pub fn error_to_http_status(err: &ServerError) -> u16 {
    match err {
        ServerError::Resolve(ResolveError::OutsideRoot(_)) => 403,
        ServerError::Resolve(ResolveError::NotFound(_)) => 404,
        ServerError::Resolve(ResolveError::IoError(_)) => 500,
        ServerError::Document(DocumentError::UnsupportedExtension(_)) => 400,
        ServerError::Document(DocumentError::NotAFile(_)) => 404,
        ServerError::Document(DocumentError::DecodeFailed(_)) => 500,
        ServerError::Document(DocumentError::IoError(_)) => 500,
        ServerError::Request(RequestError::UnsupportedMethod(_)) => 405,
        ServerError::Request(_) => 400,
        ServerError::Listing(_) => 500,
        ServerError::Root(_) => 500,
        ServerError::IoError(_) => 500,
    }
}
