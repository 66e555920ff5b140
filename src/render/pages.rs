//! HTML page templates
//!
//! Maud templates for every page the server emits. Markup is type-safe and
//! XSS-escaped by construction; the embedded stylesheet and pre-rendered
//! Markdown HTML are the only deliberate `PreEscaped` insertions.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::navigate::Breadcrumb;
use crate::storage::listing::DirectoryListing;

// Base styles, embedded so the binary serves itself
const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
main { max-width: 56rem; margin: 0 auto; padding: 1.5rem; }
header.site-header { background: #20324a; color: #fff; padding: 0.75rem 1.5rem; }
header.site-header a { color: #cfe0f5; text-decoration: none; }
nav.breadcrumb span.sep { margin: 0 0.4rem; color: #8aa3c4; }
ul.entries { list-style: none; padding: 0; }
ul.entries li { padding: 0.4rem 0.2rem; border-bottom: 1px solid #eee; }
li.folder::before { content: "\1F4C1 "; }
li.document::before { content: "\1F4C4 "; }
span.size { color: #777; font-size: 0.85em; margin-left: 0.5rem; }
a.action { margin-left: 0.75rem; font-size: 0.85em; }
p.empty { color: #777; font-style: italic; }
article.document-body { line-height: 1.6; }
article.document-body pre { background: #f4f4f4; padding: 0.75rem; overflow-x: auto; }
article.document-body table { border-collapse: collapse; }
article.document-body td, article.document-body th { border: 1px solid #ccc; padding: 0.3rem 0.6rem; }
p.error { color: #a33; }
"#;

/// Shared document shell: head, styles, body.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the breadcrumb trail as the page header.
fn breadcrumb_header(crumbs: &[Breadcrumb]) -> Markup {
    html! {
        header.site-header {
            nav.breadcrumb {
                @for (index, crumb) in crumbs.iter().enumerate() {
                    @if index > 0 {
                        span.sep { "›" }
                    }
                    a href=(crumb.href) { (crumb.label) }
                }
            }
        }
    }
}

/// Landing page linking into the library listing.
pub fn home_page() -> Markup {
    let content = html! {
        header.site-header {
            nav.breadcrumb {
                a href="/" { "Document Library" }
            }
        }
        main {
            h1 { "Document Library" }
            p { "Browse PDF and Markdown documents, view them inline, and download them." }
            p {
                a href="/list" { "Open the library" }
            }
        }
    };
    base_document("Document Library", content)
}

/// Directory listing page: breadcrumbs, folders, then documents.
pub fn listing_page(folder: &str, crumbs: &[Breadcrumb], listing: &DirectoryListing) -> Markup {
    let heading = if folder.is_empty() {
        "Library".to_string()
    } else {
        folder.to_string()
    };

    let content = html! {
        (breadcrumb_header(crumbs))
        main {
            h1 { (heading) }
            @if listing.folders.is_empty() && listing.documents.is_empty() {
                p.empty { "This folder is empty." }
            } @else {
                ul.entries {
                    @for folder_entry in &listing.folders {
                        li.folder {
                            a href={ "/list?folder=" (folder_entry.relative_path) } {
                                (folder_entry.name)
                            }
                        }
                    }
                    @for document in &listing.documents {
                        li.document {
                            a href={ "/view/" (document.relative_path) } { (document.name) }
                            span.size { (format!("{:.2} MB", document.size_mb)) }
                            a.action href={ "/download/" (document.relative_path) } { "download" }
                        }
                    }
                }
            }
        }
    };

    base_document(&heading, content)
}

/// Markdown viewer page wrapping pre-rendered HTML.
pub fn markdown_page(title: &str, body_html: &str, back_href: &str) -> Markup {
    let content = html! {
        header.site-header {
            nav.breadcrumb {
                a href=(back_href) { "‹ Back" }
                span.sep { "›" }
                span { (title) }
            }
        }
        main {
            article.document-body {
                (PreEscaped(body_html))
            }
        }
    };
    base_document(title, content)
}

/// Error page with the HTTP status and a short diagnostic.
pub fn error_page(status: u16, reason: &str, message: &str) -> Markup {
    let title = format!("{} {}", status, reason);
    let content = html! {
        header.site-header {
            nav.breadcrumb {
                a href="/list" { "Home" }
            }
        }
        main {
            h1 { (title) }
            p.error { (message) }
        }
    };
    base_document(&title, content)
}
