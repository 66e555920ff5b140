//! Request handlers for the document server.
//!
//! This module dispatches routed requests to their handlers. Every handler
//! resolves and confines externally supplied paths before touching the
//! filesystem, and converts failures into HTTP responses at this boundary.

use log::info;
use std::path::PathBuf;

use crate::error::handlers::{error_to_http_status, handle_error};
use crate::error::{DocumentError, ResolveError, ServerError};
use crate::navigate::build_breadcrumbs;
use crate::protocol::request::{Request, Route, route_request};
use crate::protocol::response::Response;
use crate::render::markdown_to_html;
use crate::render::pages;
use crate::storage::documents::{read_document_bytes, read_document_text};
use crate::storage::{DocumentKind, list_children, resolve_request_path};

/// Per-request context, constructed once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub library_root: PathBuf,
}

/// Dispatches a parsed request to its route handler.
pub fn handle_request(context: &RequestContext, request: &Request) -> Response {
    let route = match route_request(request) {
        Ok(route) => route,
        Err(e) => return error_response(e.into()),
    };

    match route {
        Route::Home => handle_home(),
        Route::List { folder } => handle_list(context, &folder),
        Route::View { path } => handle_view(context, &path),
        Route::Download { path } => handle_download(context, &path),
        Route::NotFound => error_response(ResolveError::NotFound(request.path.clone()).into()),
    }
}

/// Handles `GET /`: the landing page.
fn handle_home() -> Response {
    Response::html(200, pages::home_page().into_string())
}

/// Handles `GET /list?folder=..`: a confined directory listing with
/// breadcrumbs.
fn handle_list(context: &RequestContext, folder: &str) -> Response {
    // 1. Resolve and confine the requested folder
    let dir = match resolve_request_path(&context.library_root, folder) {
        Ok(dir) => dir,
        Err(e) => return error_response(e.into()),
    };

    // 2. A folder that resolves to a file is not listable
    if !dir.is_dir() {
        return error_response(ResolveError::NotFound(folder.to_string()).into());
    }

    // 3. Enumerate immediate children
    let listing = match list_children(&dir, &context.library_root) {
        Ok(listing) => listing,
        Err(e) => return error_response(e.into()),
    };

    // 4. Build the navigation trail and render
    let crumbs = build_breadcrumbs(folder);
    Response::html(200, pages::listing_page(folder, &crumbs, &listing).into_string())
}

/// Handles `GET /view/<path>`: inline PDF bytes or a rendered Markdown page.
fn handle_view(context: &RequestContext, relative: &str) -> Response {
    // 1. Resolve and confine
    let file = match resolve_request_path(&context.library_root, relative) {
        Ok(file) => file,
        Err(e) => return error_response(e.into()),
    };

    if !file.is_file() {
        return error_response(DocumentError::NotAFile(relative.to_string()).into());
    }

    // 2. Dispatch on the document kind, resolved once from the extension
    match DocumentKind::from_path(&file) {
        DocumentKind::Pdf => {
            let bytes = match read_document_bytes(&file) {
                Ok(bytes) => bytes,
                Err(e) => return error_response(e.into()),
            };
            info!("Viewing PDF {} ({} bytes)", relative, bytes.len());
            Response::file("application/pdf", "inline", &file_label(&file), bytes)
        }
        DocumentKind::Markdown => {
            let text = match read_document_text(&file) {
                Ok(text) => text,
                Err(e) => return error_response(e.into()),
            };
            let body = markdown_to_html(&text);
            let title = file_label(&file);
            info!("Viewing Markdown {}", relative);
            Response::html(
                200,
                pages::markdown_page(&title, &body, &parent_listing_href(relative)).into_string(),
            )
        }
        DocumentKind::Unsupported => {
            error_response(DocumentError::UnsupportedExtension(relative.to_string()).into())
        }
    }
}

/// Handles `GET /download/<path>`: raw bytes as an attachment.
fn handle_download(context: &RequestContext, relative: &str) -> Response {
    // 1. Resolve and confine
    let file = match resolve_request_path(&context.library_root, relative) {
        Ok(file) => file,
        Err(e) => return error_response(e.into()),
    };

    if !file.is_file() {
        return error_response(DocumentError::NotAFile(relative.to_string()).into());
    }

    // 2. Only recognized document kinds are downloadable
    let kind = DocumentKind::from_path(&file);
    let media_type = match kind.media_type() {
        Some(media_type) => media_type,
        None => {
            return error_response(
                DocumentError::UnsupportedExtension(relative.to_string()).into(),
            );
        }
    };

    // 3. Serve the on-disk bytes untransformed
    let bytes = match read_document_bytes(&file) {
        Ok(bytes) => bytes,
        Err(e) => return error_response(e.into()),
    };
    info!("Downloading {} ({} bytes)", relative, bytes.len());
    Response::file(media_type, "attachment", &file_label(&file), bytes)
}

/// Converts a server error into its HTTP response, logging the diagnostic.
pub fn error_response(err: ServerError) -> Response {
    handle_error(&err);
    let status = error_to_http_status(&err);
    let reason = Response::status_reason(status);
    let message = if status == 500 {
        // Do not echo internal diagnostics to the client
        "The server failed to process the request.".to_string()
    } else {
        err.to_string()
    };
    Response::html(status, pages::error_page(status, reason, &message).into_string())
}

/// The display name of a file (final path component).
fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// The listing href of a file's parent folder.
fn parent_listing_href(relative: &str) -> String {
    match relative.trim_matches('/').rsplit_once('/') {
        Some((parent, _)) => format!("/list?folder={}", parent),
        None => "/list".to_string(),
    }
}
