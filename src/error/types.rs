//! Error types
//!
//! Defines domain-specific error types for each module of the document server.

use std::fmt;
use std::io;

/// Root directory resolution errors
#[derive(Debug)]
pub enum RootError {
    NoCandidates,
    NotADirectory(String),
    IoError(io::Error),
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootError::NoCandidates => write!(f, "No root directory candidates configured"),
            RootError::NotADirectory(p) => write!(f, "Root candidate is not a directory: {}", p),
            RootError::IoError(e) => write!(f, "IO error while resolving root: {}", e),
        }
    }
}

impl std::error::Error for RootError {}

impl From<io::Error> for RootError {
    fn from(error: io::Error) -> Self {
        RootError::IoError(error)
    }
}

/// Path resolution and confinement errors
#[derive(Debug)]
pub enum ResolveError {
    OutsideRoot(String),
    NotFound(String),
    IoError(io::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::OutsideRoot(p) => write!(f, "Path escapes library root: {}", p),
            ResolveError::NotFound(p) => write!(f, "Path not found: {}", p),
            ResolveError::IoError(e) => write!(f, "IO error while resolving path: {}", e),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<io::Error> for ResolveError {
    fn from(error: io::Error) -> Self {
        ResolveError::IoError(error)
    }
}

/// Directory enumeration errors
#[derive(Debug)]
pub enum ListingError {
    NotADirectory(String),
    IoError(io::Error),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            ListingError::IoError(e) => write!(f, "IO error while listing directory: {}", e),
        }
    }
}

impl std::error::Error for ListingError {}

impl From<io::Error> for ListingError {
    fn from(error: io::Error) -> Self {
        ListingError::IoError(error)
    }
}

/// Document content access errors
#[derive(Debug)]
pub enum DocumentError {
    NotAFile(String),
    UnsupportedExtension(String),
    DecodeFailed(String),
    IoError(io::Error),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotAFile(p) => write!(f, "Not a file: {}", p),
            DocumentError::UnsupportedExtension(p) => {
                write!(f, "Unsupported document extension: {}", p)
            }
            DocumentError::DecodeFailed(p) => {
                write!(f, "No supported text encoding could decode: {}", p)
            }
            DocumentError::IoError(e) => write!(f, "IO error while reading document: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<io::Error> for DocumentError {
    fn from(error: io::Error) -> Self {
        DocumentError::IoError(error)
    }
}

/// HTTP request parsing errors
#[derive(Debug)]
pub enum RequestError {
    MalformedRequestLine(String),
    UnsupportedMethod(String),
    InvalidPercentEncoding(String),
    RequestLineTooLong(usize),
    TooManyHeaders(usize),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MalformedRequestLine(l) => write!(f, "Malformed request line: {}", l),
            RequestError::UnsupportedMethod(m) => write!(f, "Unsupported method: {}", m),
            RequestError::InvalidPercentEncoding(s) => {
                write!(f, "Invalid percent encoding: {}", s)
            }
            RequestError::RequestLineTooLong(n) => {
                write!(f, "Request line exceeds {} bytes", n)
            }
            RequestError::TooManyHeaders(n) => write!(f, "Request exceeds {} headers", n),
        }
    }
}

impl std::error::Error for RequestError {}

/// General server error that encompasses all error types
#[derive(Debug)]
pub enum ServerError {
    Root(RootError),
    Resolve(ResolveError),
    Listing(ListingError),
    Document(DocumentError),
    Request(RequestError),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Root(e) => write!(f, "Root resolution error: {}", e),
            ServerError::Resolve(e) => write!(f, "Path resolution error: {}", e),
            ServerError::Listing(e) => write!(f, "Listing error: {}", e),
            ServerError::Document(e) => write!(f, "Document error: {}", e),
            ServerError::Request(e) => write!(f, "Request error: {}", e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

// Implement conversions from specific errors to ServerError
impl From<RootError> for ServerError {
    fn from(error: RootError) -> Self {
        ServerError::Root(error)
    }
}

impl From<ResolveError> for ServerError {
    fn from(error: ResolveError) -> Self {
        ServerError::Resolve(error)
    }
}

impl From<ListingError> for ServerError {
    fn from(error: ListingError) -> Self {
        ServerError::Listing(error)
    }
}

impl From<DocumentError> for ServerError {
    fn from(error: DocumentError) -> Self {
        ServerError::Document(error)
    }
}

impl From<RequestError> for ServerError {
    fn from(error: RequestError) -> Self {
        ServerError::Request(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
