//! Library storage
//!
//! Root resolution, path confinement, directory enumeration, and document
//! content access.

pub mod documents;
pub mod listing;
pub mod resolve;
pub mod root;

// Re-export the operations every handler needs
pub use documents::DocumentKind;
pub use listing::list_children;
pub use resolve::resolve_request_path;
pub use root::resolve_library_root;
